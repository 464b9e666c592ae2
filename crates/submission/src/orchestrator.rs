//! Creates amend requests and their reference-image annotations.
//!
//! Every gateway call is awaited before the next one starts, so amends are
//! written in service order and annotations in image order. Nothing is
//! retried and nothing is rolled back.

use std::collections::HashMap;

use portal_core::amend::{normalize_notes, reference_selection_data};
use portal_core::types::DbId;
use portal_db::models::amend::{AmendRequest, CreateAmend};
use portal_db::models::annotation::{Annotation, CreateAnnotation};

use crate::error::SubmissionError;
use crate::gateway::AmendGateway;
use crate::outcome::{FailedAnnotation, SubmissionOutcome};
use crate::requester::Requester;

/// Fallback message when a failed annotation write carries no description.
pub const DEFAULT_ANNOTATION_ERROR: &str = "Failed to create annotation";

/// Everything one amendment submission needs.
#[derive(Debug, Clone, Default)]
pub struct AmendSubmission {
    pub order_id: DbId,
    /// Services to amend, in submission order. Duplicates are not removed.
    pub service_ids: Vec<String>,
    pub notes: Option<String>,
    pub requester_id: Option<DbId>,
    pub portal_id: Option<DbId>,
    /// Reference images picked per service. Missing keys mean no images.
    pub image_urls_by_service: HashMap<String, Vec<String>>,
}

/// Create one amend request for `service_id` on behalf of `requester`.
///
/// The request always starts out `pending`. Blank notes are stored as null.
pub async fn create_amend<G: AmendGateway + ?Sized>(
    gateway: &G,
    order_id: DbId,
    service_id: &str,
    notes: Option<&str>,
    requester: &Requester,
) -> Result<AmendRequest, SubmissionError> {
    let input = CreateAmend {
        order_id,
        service_id: service_id.to_string(),
        notes: normalize_notes(notes),
        agent_id: requester.agent_id,
        portal_id: requester.portal_id,
    };

    gateway
        .create_amend(&input)
        .await
        .map_err(|source| SubmissionError::AmendCreationFailed {
            service_id: service_id.to_string(),
            source,
        })
}

/// Attach `image_url` to the amend request `amend_id`.
pub async fn create_annotation<G: AmendGateway + ?Sized>(
    gateway: &G,
    amend_id: DbId,
    image_url: &str,
    service_id: &str,
    annotation_data: serde_json::Value,
    annotated_image_url: Option<String>,
) -> Result<Annotation, SubmissionError> {
    let input = CreateAnnotation {
        amend_id,
        image_url: image_url.to_string(),
        service_id: service_id.to_string(),
        annotation_data,
        annotated_image_url,
    };

    gateway
        .create_annotation(&input)
        .await
        .map_err(|source| SubmissionError::AnnotationCreationFailed {
            image_url: image_url.to_string(),
            source,
        })
}

/// Submit one amend request per selected service and attach the selected
/// reference images to each.
///
/// The requester is resolved before anything is written, so a missing
/// identity or portal fails with no side effects. A failed annotation is
/// recorded in the outcome and the batch carries on. A failed amend request
/// ends the call: amends and annotations already written stay in place and
/// later services are not attempted.
pub async fn submit_amends_for_services<G: AmendGateway + ?Sized>(
    gateway: &G,
    submission: &AmendSubmission,
) -> Result<SubmissionOutcome, SubmissionError> {
    let requester = Requester::resolve(submission.requester_id, submission.portal_id)?;

    let mut outcome = SubmissionOutcome::default();

    for service_id in &submission.service_ids {
        let amend = create_amend(
            gateway,
            submission.order_id,
            service_id,
            submission.notes.as_deref(),
            &requester,
        )
        .await
        .inspect_err(|e| {
            tracing::error!(
                order_id = %submission.order_id,
                service_id = %service_id,
                created = outcome.created_amends.len(),
                error = %e,
                "Amend submission aborted"
            );
        })?;

        let amend_id = amend.id;
        tracing::info!(
            order_id = %submission.order_id,
            amend_id = %amend_id,
            service_id = %service_id,
            "Amend request created"
        );
        outcome.created_amends.push(amend);

        let image_urls = submission
            .image_urls_by_service
            .get(service_id)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for image_url in image_urls {
            let data = reference_selection_data(chrono::Utc::now());
            match create_annotation(gateway, amend_id, image_url, service_id, data, None).await {
                Ok(annotation) => {
                    tracing::debug!(
                        amend_id = %amend_id,
                        annotation_id = %annotation.id,
                        "Annotation created"
                    );
                }
                Err(e) => {
                    let error_message = annotation_error_message(&e);
                    tracing::warn!(
                        amend_id = %amend_id,
                        service_id = %service_id,
                        image_url = %image_url,
                        error = %error_message,
                        "Annotation not created"
                    );
                    outcome.failed_annotations.push(FailedAnnotation {
                        amend_id,
                        service_id: service_id.clone(),
                        image_url: image_url.clone(),
                        error_message,
                    });
                }
            }
        }
    }

    tracing::info!(
        order_id = %submission.order_id,
        created = outcome.created_amends.len(),
        failed_annotations = outcome.failed_annotations.len(),
        "Amend submission finished"
    );

    Ok(outcome)
}

/// Message recorded for a failed annotation: the backend's own description.
fn annotation_error_message(err: &SubmissionError) -> String {
    let message = match err {
        SubmissionError::AnnotationCreationFailed { source, .. } => source.to_string(),
        other => other.to_string(),
    };
    if message.trim().is_empty() {
        DEFAULT_ANNOTATION_ERROR.to_string()
    } else {
        message
    }
}
