//! Handlers for listing and submitting amend requests.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use portal_core::amend::{
    validate_image_selection, validate_notes, validate_service_ids, AmendStatus,
};
use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_db::models::amend::{AmendListing, AmendRequest};
use portal_db::repositories::{AmendRepo, OrderRepo};
use portal_submission::{
    submit_amends_for_services, AmendSubmission, FailedAnnotation, SubmissionOutcome,
    SubmissionReport,
};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
   Request and response shapes
   -------------------------------------------------------------------------- */

#[derive(Debug, Deserialize)]
pub struct AmendListFilters {
    /// Stored status literal, e.g. `pending`.
    pub status: Option<String>,
}

/// A listed amend request with its display status.
#[derive(Debug, Serialize)]
pub struct AmendListItem {
    #[serde(flatten)]
    pub listing: AmendListing,
    /// `None` only if the stored literal is not a known status.
    pub status_label: Option<&'static str>,
    pub completed: bool,
}

impl From<AmendListing> for AmendListItem {
    fn from(listing: AmendListing) -> Self {
        let status = listing.amend.status().ok();
        Self {
            status_label: status.map(AmendStatus::label),
            completed: status.is_some_and(AmendStatus::is_completed),
            listing,
        }
    }
}

/// Body of `POST /amends`.
#[derive(Debug, Deserialize)]
pub struct SubmitAmendRequest {
    pub order_id: DbId,
    pub service_ids: Vec<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub image_urls_by_service: HashMap<String, Vec<String>>,
}

/// The report kind plus the wording to show for it.
#[derive(Debug, Serialize)]
pub struct SubmissionSummary {
    #[serde(flatten)]
    pub report: SubmissionReport,
    pub title: &'static str,
    pub message: String,
}

impl From<SubmissionReport> for SubmissionSummary {
    fn from(report: SubmissionReport) -> Self {
        Self {
            title: report.title(),
            message: report.message(),
            report,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitAmendResponse {
    pub created_amends: Vec<AmendRequest>,
    pub failed_annotations: Vec<FailedAnnotation>,
    pub summary: SubmissionSummary,
}

impl From<SubmissionOutcome> for SubmitAmendResponse {
    fn from(outcome: SubmissionOutcome) -> Self {
        let summary = outcome.report().into();
        Self {
            created_amends: outcome.created_amends,
            failed_annotations: outcome.failed_annotations,
            summary,
        }
    }
}

/* --------------------------------------------------------------------------
   Handlers
   -------------------------------------------------------------------------- */

/// GET /amends?status=
///
/// Amend requests of the caller's portal, newest first.
pub async fn list_amends(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(filters): Query<AmendListFilters>,
) -> AppResult<impl IntoResponse> {
    let requester = auth.requester()?;
    let status = filters
        .status
        .as_deref()
        .map(AmendStatus::from_str)
        .transpose()?;

    let amends: Vec<AmendListItem> =
        AmendRepo::list_by_portal(&state.pool, requester.portal_id, status)
            .await?
            .into_iter()
            .map(AmendListItem::from)
            .collect();
    Ok(Json(DataResponse { data: amends }))
}

/// POST /amends
///
/// Create one amend request per selected service and attach the selected
/// reference images. Annotation failures do not fail the request; they are
/// listed in the response. The order must belong to the caller's portal.
pub async fn submit_amends(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmitAmendRequest>,
) -> AppResult<impl IntoResponse> {
    validate_service_ids(&input.service_ids)?;
    validate_image_selection(&input.image_urls_by_service)?;
    validate_notes(input.notes.as_deref())?;
    let requester = auth.requester()?;

    // Orders of other portals are reported as missing.
    OrderRepo::find_by_id(&state.pool, input.order_id)
        .await?
        .filter(|o| o.portal_id == requester.portal_id)
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Order",
                id: input.order_id,
            })
        })?;

    let submission = AmendSubmission {
        order_id: input.order_id,
        service_ids: input.service_ids,
        notes: input.notes,
        requester_id: Some(requester.agent_id),
        portal_id: Some(requester.portal_id),
        image_urls_by_service: input.image_urls_by_service,
    };

    let outcome = submit_amends_for_services(state.gateway.as_ref(), &submission).await?;

    tracing::info!(
        user_id = %auth.user_id,
        order_id = %submission.order_id,
        created = outcome.created_amends.len(),
        failed_annotations = outcome.failed_annotations.len(),
        "Amend requests submitted"
    );

    let response = SubmitAmendResponse::from(outcome);
    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}
