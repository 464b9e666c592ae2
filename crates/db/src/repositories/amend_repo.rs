//! Repository for the `amends` table.

use portal_core::amend::AmendStatus;
use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::amend::{AmendListing, AmendRequest, CreateAmend};

/// Column list for amends queries.
const COLUMNS: &str = "id, order_id, service_id, notes, agent_id, portal_id, status, \
    created_at, updated_at";

/// Column list for amend listings (`a` = amends, `o` = orders, `p` = properties).
const LISTING_COLUMNS: &str = "a.id, a.order_id, a.service_id, a.notes, a.agent_id, \
    a.portal_id, a.status, a.created_at, a.updated_at, \
    o.order_number, o.order_type, \
    p.id AS property_id, p.name AS property_name, \
    p.street AS property_street, p.city AS property_city";

/// Provides create and read operations for amend requests.
pub struct AmendRepo;

impl AmendRepo {
    /// Insert a new amend request in the `pending` status, returning the row.
    pub async fn create(pool: &PgPool, input: &CreateAmend) -> Result<AmendRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO amends (order_id, service_id, notes, agent_id, portal_id, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AmendRequest>(&query)
            .bind(input.order_id)
            .bind(&input.service_id)
            .bind(&input.notes)
            .bind(input.agent_id)
            .bind(input.portal_id)
            .bind(AmendStatus::Pending.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find an amend request by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AmendRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM amends WHERE id = $1");
        sqlx::query_as::<_, AmendRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a portal's amend requests with their order and property, newest
    /// first, optionally narrowed to one status.
    pub async fn list_by_portal(
        pool: &PgPool,
        portal_id: DbId,
        status: Option<AmendStatus>,
    ) -> Result<Vec<AmendListing>, sqlx::Error> {
        let query = format!(
            "SELECT {LISTING_COLUMNS}
             FROM amends a
             JOIN orders o ON o.id = a.order_id
             LEFT JOIN properties p ON p.id = o.property_id
             WHERE a.portal_id = $1
               AND ($2::text IS NULL OR a.status = $2)
             ORDER BY a.created_at DESC"
        );
        sqlx::query_as::<_, AmendListing>(&query)
            .bind(portal_id)
            .bind(status.map(|s| s.as_str()))
            .fetch_all(pool)
            .await
    }
}
