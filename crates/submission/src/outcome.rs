//! Result of a submission and its user-facing summary.

use portal_core::types::DbId;
use portal_db::models::amend::AmendRequest;
use serde::Serialize;

/// An annotation that could not be created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedAnnotation {
    pub amend_id: DbId,
    pub service_id: String,
    pub image_url: String,
    pub error_message: String,
}

/// What a completed submission wrote and what it could not.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubmissionOutcome {
    /// Created amend requests, in service order.
    pub created_amends: Vec<AmendRequest>,
    /// Failed annotation writes, in service then image order.
    pub failed_annotations: Vec<FailedAnnotation>,
}

impl SubmissionOutcome {
    /// Whether every requested annotation was created.
    pub fn is_complete(&self) -> bool {
        self.failed_annotations.is_empty()
    }

    /// Failed annotations belonging to one service.
    pub fn failures_for_service<'a>(
        &'a self,
        service_id: &'a str,
    ) -> impl Iterator<Item = &'a FailedAnnotation> + 'a {
        self.failed_annotations
            .iter()
            .filter(move |f| f.service_id == service_id)
    }

    /// Classify the outcome for display.
    pub fn report(&self) -> SubmissionReport {
        let created = self.created_amends.len();
        if self.is_complete() {
            SubmissionReport::Submitted { created }
        } else {
            SubmissionReport::SubmittedWithWarnings {
                created,
                failed: self.failed_annotations.len(),
            }
        }
    }
}

/// How a completed submission is shown to the requester.
///
/// Submissions that end in an error never get this far; they are reported
/// through the error body instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionReport {
    Submitted { created: usize },
    SubmittedWithWarnings { created: usize, failed: usize },
}

impl SubmissionReport {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Submitted { .. } => "Success",
            Self::SubmittedWithWarnings { .. } => "Amendments submitted with warnings",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Submitted { created } => {
                format!("{created} amendment request(s) submitted.")
            }
            Self::SubmittedWithWarnings { created, failed } => format!(
                "{created} amendment(s) created, but {failed} annotation(s) failed."
            ),
        }
    }
}
