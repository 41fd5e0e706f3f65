//! Match ranking handlers: the filterable list view and the single
//! best-match pick.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use mirrorme_core::{JournalEntry, MatchFilter};
use mirrorme_match::RankedMatch;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{parse_uuid, simulate_latency, ApiError, ApiResponse, AppState, ResponseMeta};

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(in crate::api) struct MatchesQuery {
    pub filter: Option<String>,
    pub entry_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(in crate::api) struct BestMatchRequest {
    pub entry_id: String,
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn parse_match_filter(req_id: &str, value: &str) -> Result<MatchFilter, ApiError> {
    match value {
        "all" => Ok(MatchFilter::All),
        "vent" => Ok(MatchFilter::Vent),
        "advice" => Ok(MatchFilter::Advice),
        "accountability" => Ok(MatchFilter::Accountability),
        _ => Err(ApiError::new(
            req_id,
            "validation_error",
            format!("filter must be 'all', 'vent', 'advice', or 'accountability', got '{value}'"),
        )),
    }
}

async fn resolve_entry(
    state: &AppState,
    rid: &str,
    raw_id: &str,
) -> Result<JournalEntry, ApiError> {
    let id = parse_uuid(rid, raw_id, "journal entry")?;
    state.journal.get(id).await.ok_or_else(|| {
        ApiError::new(
            rid,
            "not_found",
            format!("no journal entry with id '{raw_id}'"),
        )
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/matches. Ranked peer list, optionally filtered by mode and
/// personalized against a stored entry.
pub(in crate::api) async fn list_matches(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<MatchesQuery>,
) -> Result<Json<ApiResponse<Vec<RankedMatch>>>, ApiError> {
    let rid = &req_id.0;

    let filter = match query.filter.as_deref() {
        Some(value) => parse_match_filter(rid, value)?,
        None => MatchFilter::default(),
    };
    let signal = match query.entry_id.as_deref() {
        Some(raw) => Some(resolve_entry(&state, rid, raw).await?.signal),
        None => None,
    };

    let ranked = state.directory.rank_matches(signal.as_ref(), filter);
    Ok(Json(ApiResponse {
        data: ranked,
        meta: ResponseMeta::new(rid.clone()),
    }))
}

/// POST /api/v1/matches/best. One peer for the entry's mode; shared
/// emotions come from the entry's signal.
pub(in crate::api) async fn best_match(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<BestMatchRequest>,
) -> Result<Json<ApiResponse<RankedMatch>>, ApiError> {
    let rid = &req_id.0;

    let entry = resolve_entry(&state, rid, &body.entry_id).await?;

    simulate_latency(state.matching_delay).await;

    let ranked = state.directory.find_best_match(&entry.signal);
    Ok(Json(ApiResponse {
        data: ranked,
        meta: ResponseMeta::new(rid.clone()),
    }))
}
