//! Amend request statuses, annotation provenance, and submission input
//! validation.
//!
//! Amend requests are always created in [`AmendStatus::Pending`]; every
//! later transition is owned by reviewers working outside this system. The
//! client side only needs to parse stored statuses back for display.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// `source` tag written into every annotation created by a mobile submission.
pub const ANNOTATION_SOURCE: &str = "mobile_app";

/// `type` tag written into every annotation created by a mobile submission.
pub const ANNOTATION_TYPE: &str = "reference_selection";

/// Label shown for a missing service identifier.
pub const UNKNOWN_SERVICE_LABEL: &str = "Unknown Service";

/// Maximum length of the free-text notes attached to an amend request.
pub const MAX_NOTES_LENGTH: usize = 5000;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of an amend request, stored as a text literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmendStatus {
    Pending,
    InProgress,
    AwaitingData,
    PendingCheck,
    Checking,
    CheckerRejected,
    WorkerRejected,
    Completed,
}

/// All valid status strings, in workflow order.
pub const VALID_STATUS_STRINGS: &[&str] = &[
    "pending",
    "in_progress",
    "awaiting_data",
    "pending_check",
    "checking",
    "checker_rejected",
    "worker_rejected",
    "completed",
];

impl AmendStatus {
    /// Return the status as its stored string literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::AwaitingData => "awaiting_data",
            Self::PendingCheck => "pending_check",
            Self::Checking => "checking",
            Self::CheckerRejected => "checker_rejected",
            Self::WorkerRejected => "worker_rejected",
            Self::Completed => "completed",
        }
    }

    /// Parse a status from its stored string literal.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "awaiting_data" => Ok(Self::AwaitingData),
            "pending_check" => Ok(Self::PendingCheck),
            "checking" => Ok(Self::Checking),
            "checker_rejected" => Ok(Self::CheckerRejected),
            "worker_rejected" => Ok(Self::WorkerRejected),
            "completed" => Ok(Self::Completed),
            _ => Err(CoreError::Validation(format!(
                "Invalid amend status '{s}'. Must be one of: {}",
                VALID_STATUS_STRINGS.join(", ")
            ))),
        }
    }

    /// Human-readable label used by the portal screens.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::AwaitingData => "Awaiting Data",
            Self::PendingCheck => "Pending Review",
            Self::Checking => "Checking",
            Self::CheckerRejected => "Rejected",
            Self::WorkerRejected => "Needs Revision",
            Self::Completed => "Completed",
        }
    }

    /// Whether the amend has left the reviewers' queue.
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

// ---------------------------------------------------------------------------
// Labels and payloads
// ---------------------------------------------------------------------------

/// Turn a hyphen-delimited service identifier into a Title Case label.
///
/// Only the first character of each word is upper-cased, so digits and the
/// rest of the word are left alone: `"2d-floor-plan"` becomes
/// `"2d Floor Plan"`.
pub fn format_service_label(service_id: &str) -> String {
    if service_id.is_empty() {
        return UNKNOWN_SERVICE_LABEL.to_string();
    }

    service_id
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Annotation payload for an image picked as a reference in the mobile flow.
pub fn reference_selection_data(created_at: Timestamp) -> serde_json::Value {
    serde_json::json!({
        "source": ANNOTATION_SOURCE,
        "type": ANNOTATION_TYPE,
        "created_at": created_at.to_rfc3339(),
    })
}

/// Trim notes and collapse blank input to `None`.
pub fn normalize_notes(notes: Option<&str>) -> Option<String> {
    notes
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate the selected services of a submission.
///
/// At least one service must be selected and none may be blank. Duplicates
/// are allowed; each occurrence yields its own amend request.
pub fn validate_service_ids(service_ids: &[String]) -> Result<(), CoreError> {
    if service_ids.is_empty() {
        return Err(CoreError::Validation(
            "Pick at least one service".to_string(),
        ));
    }

    if let Some(i) = service_ids.iter().position(|s| s.trim().is_empty()) {
        return Err(CoreError::Validation(format!(
            "service_ids[{i}] must not be blank"
        )));
    }

    Ok(())
}

/// Validate the per-service image selection.
pub fn validate_image_selection(
    image_urls_by_service: &HashMap<String, Vec<String>>,
) -> Result<(), CoreError> {
    for (service_id, urls) in image_urls_by_service {
        if let Some(i) = urls.iter().position(|u| u.trim().is_empty()) {
            return Err(CoreError::Validation(format!(
                "image_urls_by_service['{service_id}'][{i}] must not be blank"
            )));
        }
    }
    Ok(())
}

/// Validate the length of amend notes.
pub fn validate_notes(notes: Option<&str>) -> Result<(), CoreError> {
    match notes {
        Some(n) if n.chars().count() > MAX_NOTES_LENGTH => Err(CoreError::Validation(format!(
            "notes must be at most {MAX_NOTES_LENGTH} characters"
        ))),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_roundtrips_every_literal() {
        for s in VALID_STATUS_STRINGS {
            assert_eq!(AmendStatus::from_str(s).unwrap().as_str(), *s);
        }
    }

    #[test]
    fn status_rejects_unknown_literal() {
        assert!(AmendStatus::from_str("archived").is_err());
        assert!(AmendStatus::from_str("Pending").is_err());
    }

    #[test]
    fn status_labels_match_portal_wording() {
        assert_eq!(AmendStatus::PendingCheck.label(), "Pending Review");
        assert_eq!(AmendStatus::CheckerRejected.label(), "Rejected");
        assert_eq!(AmendStatus::WorkerRejected.label(), "Needs Revision");
    }

    #[test]
    fn only_completed_counts_as_completed() {
        assert!(AmendStatus::Completed.is_completed());
        assert!(!AmendStatus::Pending.is_completed());
        assert!(!AmendStatus::CheckerRejected.is_completed());
    }

    #[test]
    fn service_label_capitalizes_each_word() {
        assert_eq!(format_service_label("2d-floor-plan"), "2d Floor Plan");
        assert_eq!(format_service_label("photo-editing"), "Photo Editing");
        assert_eq!(format_service_label("virtual-staging-HDR"), "Virtual Staging HDR");
    }

    #[test]
    fn service_label_placeholder_for_empty() {
        assert_eq!(format_service_label(""), UNKNOWN_SERVICE_LABEL);
    }

    #[test]
    fn service_label_keeps_empty_segments() {
        assert_eq!(format_service_label("a--b"), "A  B");
    }

    #[test]
    fn reference_selection_data_has_fixed_tags() {
        let at = chrono::Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let data = reference_selection_data(at);
        assert_eq!(data["source"], "mobile_app");
        assert_eq!(data["type"], "reference_selection");
        assert_eq!(data["created_at"], "2026-03-01T12:00:00+00:00");
    }

    #[test]
    fn notes_are_trimmed_and_blank_dropped() {
        assert_eq!(
            normalize_notes(Some("  fix the kitchen  ")).as_deref(),
            Some("fix the kitchen")
        );
        assert_eq!(normalize_notes(Some("   ")), None);
        assert_eq!(normalize_notes(None), None);
    }

    #[test]
    fn service_ids_must_be_non_empty() {
        assert!(validate_service_ids(&[]).is_err());
        assert!(validate_service_ids(&["floor-plan".into(), " ".into()]).is_err());
        assert!(validate_service_ids(&["floor-plan".into(), "floor-plan".into()]).is_ok());
    }

    #[test]
    fn image_selection_rejects_blank_urls() {
        let mut selection = HashMap::new();
        selection.insert("floor-plan".to_string(), vec!["https://x/a.jpg".to_string()]);
        assert!(validate_image_selection(&selection).is_ok());

        selection.insert("photo-editing".to_string(), vec![String::new()]);
        assert!(validate_image_selection(&selection).is_err());
    }

    #[test]
    fn notes_length_is_bounded() {
        assert!(validate_notes(None).is_ok());
        assert!(validate_notes(Some("short")).is_ok());
        let long = "x".repeat(MAX_NOTES_LENGTH + 1);
        assert!(validate_notes(Some(&long)).is_err());
    }
}
