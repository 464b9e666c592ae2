//! Repository for the `orders` table, joined with `properties`.

use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::order::OrderSummary;

/// Column list for order summary queries (`o` = orders, `p` = properties).
const COLUMNS: &str = "o.id, o.portal_id, o.order_number, o.order_type, o.created_at, \
    p.id AS property_id, p.name AS property_name, \
    p.street AS property_street, p.city AS property_city";

/// Read access to orders that can be amended.
pub struct OrderRepo;

impl OrderRepo {
    /// Find an order by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<OrderSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}
             FROM orders o
             LEFT JOIN properties p ON p.id = o.property_id
             WHERE o.id = $1"
        );
        sqlx::query_as::<_, OrderSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a portal's orders, newest first.
    ///
    /// When `search` is given, only orders whose number, property name or
    /// property street contain it (case-insensitively) are returned.
    pub async fn list_for_amend(
        pool: &PgPool,
        portal_id: DbId,
        search: Option<&str>,
    ) -> Result<Vec<OrderSummary>, sqlx::Error> {
        let pattern = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(s)));

        let query = format!(
            "SELECT {COLUMNS}
             FROM orders o
             LEFT JOIN properties p ON p.id = o.property_id
             WHERE o.portal_id = $1
               AND ($2::text IS NULL
                    OR o.order_number ILIKE $2
                    OR p.name ILIKE $2
                    OR p.street ILIKE $2)
             ORDER BY o.created_at DESC"
        );
        sqlx::query_as::<_, OrderSummary>(&query)
            .bind(portal_id)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }
}

/// Escape `LIKE` wildcards so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
