//! Handlers for picking an order to amend and browsing its deliverables.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use portal_core::amend::format_service_label;
use portal_core::error::CoreError;
use portal_core::storage::StorageLocator;
use portal_core::types::DbId;
use portal_db::models::deliverable::Deliverable;
use portal_db::repositories::{DeliverableRepo, OrderRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
   Query filters and response shapes
   -------------------------------------------------------------------------- */

#[derive(Debug, Deserialize)]
pub struct OrderSearch {
    /// Matches order number, property name, or street (case-insensitive).
    pub search: Option<String>,
}

/// A deliverable with the URL a client should display it from.
#[derive(Debug, Serialize)]
pub struct DeliverableFile {
    #[serde(flatten)]
    pub deliverable: Deliverable,
    pub display_url: String,
    pub is_image: bool,
}

/// Deliverables of one service, as offered for reference selection.
#[derive(Debug, Serialize)]
pub struct ServiceDeliverables {
    pub service_id: String,
    pub service_label: String,
    pub files: Vec<DeliverableFile>,
}

/// Group deliverables by service in first-seen order.
///
/// Input order is kept inside each group. Deliverables with no service id
/// cannot be amended per service and are left out.
pub fn group_by_service(
    deliverables: Vec<Deliverable>,
    storage: &StorageLocator,
    bucket: &str,
) -> Vec<ServiceDeliverables> {
    let mut groups: IndexMap<String, Vec<DeliverableFile>> = IndexMap::new();

    for deliverable in deliverables {
        let Some(service_id) = deliverable.service_id.clone().filter(|s| !s.is_empty()) else {
            continue;
        };
        let display_url = storage.resolve_display_url(&deliverable, bucket);
        groups.entry(service_id).or_default().push(DeliverableFile {
            is_image: deliverable.is_image(),
            deliverable,
            display_url,
        });
    }

    groups
        .into_iter()
        .map(|(service_id, files)| ServiceDeliverables {
            service_label: format_service_label(&service_id),
            service_id,
            files,
        })
        .collect()
}

/* --------------------------------------------------------------------------
   Handlers
   -------------------------------------------------------------------------- */

/// GET /orders?search=
///
/// Orders of the caller's portal that can be amended, newest first.
pub async fn list_orders(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<OrderSearch>,
) -> AppResult<impl IntoResponse> {
    let requester = auth.requester()?;
    let search = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let orders = OrderRepo::list_for_amend(&state.pool, requester.portal_id, search).await?;
    Ok(Json(DataResponse { data: orders }))
}

/// GET /orders/{id}/deliverables
///
/// Original deliverables of an order, grouped by service.
pub async fn list_deliverables(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(order_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let requester = auth.requester()?;

    // Orders of other portals are reported as missing.
    OrderRepo::find_by_id(&state.pool, order_id)
        .await?
        .filter(|o| o.portal_id == requester.portal_id)
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Order",
                id: order_id,
            })
        })?;

    let deliverables = DeliverableRepo::list_original_by_order(&state.pool, order_id).await?;
    let groups = group_by_service(
        deliverables,
        &state.storage,
        &state.config.deliverables_bucket,
    );

    tracing::debug!(
        order_id = %order_id,
        services = groups.len(),
        "Listed order deliverables"
    );

    Ok(Json(DataResponse { data: groups }))
}
