//! Route definitions for amend requests.

use axum::routing::get;
use axum::Router;

use crate::handlers::amend;
use crate::state::AppState;

/// Amend routes mounted at `/amends`.
///
/// ```text
/// GET  /    -> list_amends
/// POST /    -> submit_amends
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(amend::list_amends).post(amend::submit_amends))
}
