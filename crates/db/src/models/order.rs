//! Order and property read models.

use portal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Property columns joined onto an order. All fields are `None` when the
/// order has no property.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PropertyRef {
    #[sqlx(rename = "property_id")]
    pub id: Option<DbId>,
    #[sqlx(rename = "property_name")]
    pub name: Option<String>,
    #[sqlx(rename = "property_street")]
    pub street: Option<String>,
    #[sqlx(rename = "property_city")]
    pub city: Option<String>,
}

/// An order as listed when picking which order to amend.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderSummary {
    pub id: DbId,
    pub portal_id: DbId,
    pub order_number: Option<String>,
    pub order_type: Option<String>,
    pub created_at: Timestamp,
    #[sqlx(flatten)]
    pub property: PropertyRef,
}
