//! Route definitions for orders.

use axum::routing::get;
use axum::Router;

use crate::handlers::order;
use crate::state::AppState;

/// Order routes mounted at `/orders`.
///
/// ```text
/// GET /                      -> list_orders
/// GET /{id}/deliverables     -> list_deliverables
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(order::list_orders))
        .route("/{id}/deliverables", get(order::list_deliverables))
}
