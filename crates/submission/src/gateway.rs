//! Persistence seam used by the submission workflow.

use async_trait::async_trait;
use portal_db::models::amend::{AmendRequest, CreateAmend};
use portal_db::models::annotation::{Annotation, CreateAnnotation};
use portal_db::repositories::{AmendRepo, AnnotationRepo};
use portal_db::DbPool;

use crate::error::GatewayError;

/// The write operations the submission workflow needs from the backend.
#[async_trait]
pub trait AmendGateway: Send + Sync {
    /// Persist a new amend request. The backend assigns its id and status.
    async fn create_amend(&self, input: &CreateAmend) -> Result<AmendRequest, GatewayError>;

    /// Persist a new annotation under an existing amend request.
    async fn create_annotation(
        &self,
        input: &CreateAnnotation,
    ) -> Result<Annotation, GatewayError>;
}

/// [`AmendGateway`] backed by the PostgreSQL repositories.
#[derive(Clone)]
pub struct PgAmendGateway {
    pool: DbPool,
}

impl PgAmendGateway {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AmendGateway for PgAmendGateway {
    async fn create_amend(&self, input: &CreateAmend) -> Result<AmendRequest, GatewayError> {
        Ok(AmendRepo::create(&self.pool, input).await?)
    }

    async fn create_annotation(
        &self,
        input: &CreateAnnotation,
    ) -> Result<Annotation, GatewayError> {
        Ok(AnnotationRepo::create(&self.pool, input).await?)
    }
}
