//! Error types of the submission workflow.

/// Failure reported by an [`AmendGateway`](crate::AmendGateway) call.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The database rejected or failed the write.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// The backend refused the write for a reason of its own.
    #[error("{0}")]
    Rejected(String),
}

/// Closed set of ways a submission step can fail.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// No requester identity was supplied.
    #[error("Not authenticated")]
    AuthenticationRequired,

    /// The requester is not assigned to a portal.
    #[error("No portal assigned")]
    PortalMissing,

    /// The backend failed to create the amend request for a service.
    #[error("Failed to create amend request for service '{service_id}': {source}")]
    AmendCreationFailed {
        service_id: String,
        #[source]
        source: GatewayError,
    },

    /// The backend failed to attach an image to an amend request.
    #[error("Failed to create annotation for '{image_url}': {source}")]
    AnnotationCreationFailed {
        image_url: String,
        #[source]
        source: GatewayError,
    },
}
