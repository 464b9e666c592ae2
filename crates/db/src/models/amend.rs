//! Amend request model and DTOs.

use portal_core::amend::AmendStatus;
use portal_core::error::CoreError;
use portal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::order::PropertyRef;

/// A row from the `amends` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AmendRequest {
    pub id: DbId,
    pub order_id: DbId,
    pub service_id: String,
    pub notes: Option<String>,
    pub agent_id: DbId,
    pub portal_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AmendRequest {
    /// Parse the stored status literal.
    pub fn status(&self) -> Result<AmendStatus, CoreError> {
        AmendStatus::from_str(&self.status)
    }
}

/// DTO for creating an amend request. Status is not settable: new requests
/// always start as `pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAmend {
    pub order_id: DbId,
    pub service_id: String,
    pub notes: Option<String>,
    pub agent_id: DbId,
    pub portal_id: DbId,
}

/// Order columns joined onto a listed amend request.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AmendOrderRef {
    pub order_number: Option<String>,
    pub order_type: Option<String>,
    #[sqlx(flatten)]
    pub property: PropertyRef,
}

/// An amend request together with its order and property.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AmendListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub amend: AmendRequest,
    #[sqlx(flatten)]
    pub order: AmendOrderRef,
}
