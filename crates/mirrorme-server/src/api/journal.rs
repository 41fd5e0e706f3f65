//! Journal entry handlers: analyze-and-store plus listing.

use axum::{extract::State, http::StatusCode, Extension, Json};
use mirrorme_core::{JournalEntry, SupportMode};
use mirrorme_signal::extract_signal;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{simulate_latency, ApiError, ApiResponse, AppState, ResponseMeta};

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(in crate::api) struct CreateEntryRequest {
    pub text: String,
    pub support_mode: String,
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

pub(in crate::api) fn parse_support_mode(
    req_id: &str,
    value: &str,
) -> Result<SupportMode, ApiError> {
    match value {
        "vent" => Ok(SupportMode::Vent),
        "advice" => Ok(SupportMode::Advice),
        "accountability" => Ok(SupportMode::Accountability),
        _ => Err(ApiError::new(
            req_id,
            "validation_error",
            format!("support_mode must be 'vent', 'advice', or 'accountability', got '{value}'"),
        )),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/journal/entries. Scores the text and stores the entry.
pub(in crate::api) async fn create_entry(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<JournalEntry>>), ApiError> {
    let rid = &req_id.0;

    // Character count, not bytes; multi-byte text gets the full budget.
    if body.text.trim().is_empty() || body.text.chars().count() > state.max_entry_chars {
        return Err(ApiError::new(
            rid,
            "validation_error",
            format!("text must be 1–{} characters", state.max_entry_chars),
        ));
    }
    let mode = parse_support_mode(rid, &body.support_mode)?;

    simulate_latency(state.analysis_delay).await;

    let signal = extract_signal(&body.text, mode)
        .map_err(|e| ApiError::new(rid, "validation_error", e.to_string()))?;
    let entry = JournalEntry::new(signal);
    state.journal.insert(entry.clone()).await;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: entry,
            meta: ResponseMeta::new(rid.clone()),
        }),
    ))
}

/// GET /api/v1/journal/entries. Newest entries first.
pub(in crate::api) async fn list_entries(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<JournalEntry>>> {
    let entries = state.journal.list().await;
    Json(ApiResponse {
        data: entries,
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_support_mode_accepts_known_values() {
        assert_eq!(
            parse_support_mode("rid", "vent").unwrap(),
            SupportMode::Vent
        );
        assert_eq!(
            parse_support_mode("rid", "advice").unwrap(),
            SupportMode::Advice
        );
        assert_eq!(
            parse_support_mode("rid", "accountability").unwrap(),
            SupportMode::Accountability
        );
    }

    #[test]
    fn parse_support_mode_rejects_unknown_value() {
        let err = parse_support_mode("rid", "rant").unwrap_err();
        assert_eq!(err.error.code, "validation_error");
        assert!(err.error.message.contains("'rant'"));
    }

    #[test]
    fn parse_support_mode_is_case_sensitive() {
        assert!(parse_support_mode("rid", "Vent").is_err());
    }
}
