//! Amend annotation model and DTOs.

use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `amend_annotations` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Annotation {
    pub id: DbId,
    pub amend_id: DbId,
    pub image_url: String,
    pub service_id: String,
    pub annotation_data: serde_json::Value,
    /// Filled in later by reviewers; always `None` on creation.
    pub annotated_image_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating an annotation on an amend request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnnotation {
    pub amend_id: DbId,
    pub image_url: String,
    pub service_id: String,
    pub annotation_data: serde_json::Value,
    pub annotated_image_url: Option<String>,
}
