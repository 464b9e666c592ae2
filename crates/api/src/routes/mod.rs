pub mod amend;
pub mod health;
pub mod order;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /orders                         list orders to amend (GET, ?search=)
/// /orders/{id}/deliverables       original deliverables grouped by service (GET)
///
/// /amends                         list (GET, ?status=), submit (POST)
/// ```
///
/// Every route requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/orders", order::router())
        .nest("/amends", amend::router())
}
