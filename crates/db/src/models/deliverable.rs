//! Order deliverable model.

use portal_core::storage::StoredFile;
use portal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `order_deliverables` table.
///
/// `amend_id` is `None` for deliverables of the original order and set for
/// files produced while working an amend request.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Deliverable {
    pub id: DbId,
    pub order_id: DbId,
    pub service_id: Option<String>,
    pub file_path: Option<String>,
    pub file_url: Option<String>,
    pub file_type: Option<String>,
    pub amend_id: Option<DbId>,
    pub created_at: Timestamp,
}

impl Deliverable {
    /// Whether the file is an image, judged by its MIME type prefix.
    pub fn is_image(&self) -> bool {
        self.file_type
            .as_deref()
            .is_some_and(|t| t.starts_with("image"))
    }
}

impl StoredFile for Deliverable {
    fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    fn file_url(&self) -> Option<&str> {
        self.file_url.as_deref()
    }
}
