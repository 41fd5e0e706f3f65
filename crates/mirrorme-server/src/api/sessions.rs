//! Session handlers: anonymous login, profile fetch, logout.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use mirrorme_core::identity::AnonymousIdentity;
use serde::Deserialize;
use uuid::Uuid;

use crate::middleware::RequestId;
use crate::store::UserProfile;

use super::{parse_uuid, ApiError, ApiResponse, AppState, ResponseMeta};

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(in crate::api) struct CreateSessionRequest {
    pub email: String,
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn validate_email(req_id: &str, value: &str) -> Result<String, ApiError> {
    let email = value.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::new(
            req_id,
            "validation_error",
            "email must be a valid address",
        ));
    }
    Ok(email.to_owned())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/sessions. Assigns a fresh anonymous identity to the email.
pub(in crate::api) async fn create_session(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserProfile>>), ApiError> {
    let rid = &req_id.0;

    let email = validate_email(rid, &body.email)?;

    let identity = AnonymousIdentity::generate(&mut rand::rng());
    let profile = UserProfile {
        id: Uuid::new_v4(),
        email,
        anonymous_name: identity.name,
        avatar_url: identity.avatar_url,
        created_at: Utc::now(),
    };
    state.sessions.insert(profile.clone()).await;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: profile,
            meta: ResponseMeta::new(rid.clone()),
        }),
    ))
}

/// GET /api/v1/sessions/{session_id}. Fetch the stored profile.
pub(in crate::api) async fn get_session(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<UserProfile>>, ApiError> {
    let rid = &req_id.0;

    let id = parse_uuid(rid, &session_id, "session")?;
    let profile = state.sessions.get(id).await.ok_or_else(|| {
        ApiError::new(
            rid,
            "not_found",
            format!("no session with id '{session_id}'"),
        )
    })?;

    Ok(Json(ApiResponse {
        data: profile,
        meta: ResponseMeta::new(rid.clone()),
    }))
}

/// DELETE /api/v1/sessions/{session_id}. Logout; returns the dropped profile.
pub(in crate::api) async fn delete_session(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<UserProfile>>, ApiError> {
    let rid = &req_id.0;

    let id = parse_uuid(rid, &session_id, "session")?;
    let profile = state.sessions.remove(id).await.ok_or_else(|| {
        ApiError::new(
            rid,
            "not_found",
            format!("no session with id '{session_id}'"),
        )
    })?;

    Ok(Json(ApiResponse {
        data: profile,
        meta: ResponseMeta::new(rid.clone()),
    }))
}
