use std::sync::Arc;

use portal_core::storage::StorageLocator;
use portal_submission::AmendGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything heavy sits behind an `Arc` or is a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used for reads.
    pub pool: portal_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Write path for amend submissions.
    pub gateway: Arc<dyn AmendGateway>,
    /// Resolves deliverable files into public URLs.
    pub storage: StorageLocator,
}
