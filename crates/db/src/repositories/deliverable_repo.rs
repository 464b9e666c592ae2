//! Repository for the `order_deliverables` table.

use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::deliverable::Deliverable;

/// Column list for order_deliverables queries.
const COLUMNS: &str = "id, order_id, service_id, file_path, file_url, file_type, \
    amend_id, created_at";

/// Read access to order deliverables.
pub struct DeliverableRepo;

impl DeliverableRepo {
    /// List the original deliverables of an order (those not produced by an
    /// amend), newest first.
    pub async fn list_original_by_order(
        pool: &PgPool,
        order_id: DbId,
    ) -> Result<Vec<Deliverable>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM order_deliverables
             WHERE order_id = $1 AND amend_id IS NULL
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Deliverable>(&query)
            .bind(order_id)
            .fetch_all(pool)
            .await
    }

    /// List deliverables produced while working an amend request, newest first.
    pub async fn list_by_amend(
        pool: &PgPool,
        amend_id: DbId,
    ) -> Result<Vec<Deliverable>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM order_deliverables
             WHERE amend_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Deliverable>(&query)
            .bind(amend_id)
            .fetch_all(pool)
            .await
    }
}
