//! Chat message handler: moderation gate plus the simulated peer reply.

use axum::{extract::State, Extension, Json};
use mirrorme_chat::{moderate_message, BlockReason, ModerationVerdict};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// Mirrors the input cap enforced by the chat composer.
const CHAT_MESSAGE_MAX_CHARS: usize = 500;

// ---------------------------------------------------------------------------
// Request/response bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(in crate::api) struct SendMessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct ChatMessageResponse {
    pub blocked: bool,
    pub reason: Option<BlockReason>,
    pub warning: Option<&'static str>,
    pub reply: Option<&'static str>,
    pub reply_delay_ms: Option<u64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/chat/messages. Moderates the text and, when it passes,
/// picks the peer's reply.
///
/// A blocked message is a normal outcome for the caller, not an API
/// error: the response stays 200 and carries the warning to display.
pub(in crate::api) async fn send_message(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SendMessageRequest>,
) -> Result<Json<ApiResponse<ChatMessageResponse>>, ApiError> {
    let rid = &req_id.0;

    if body.text.trim().is_empty() || body.text.chars().count() > CHAT_MESSAGE_MAX_CHARS {
        return Err(ApiError::new(
            rid,
            "validation_error",
            format!("text must be 1–{CHAT_MESSAGE_MAX_CHARS} characters"),
        ));
    }

    let data = match moderate_message(&body.text) {
        ModerationVerdict::Blocked { reason, warning } => ChatMessageResponse {
            blocked: true,
            reason: Some(reason),
            warning: Some(warning),
            reply: None,
            reply_delay_ms: None,
        },
        ModerationVerdict::Allowed => {
            let mut responder = state.responder.lock().await;
            let reply = responder.next_reply();
            #[allow(clippy::cast_possible_truncation)] // delay stays well under a minute
            let reply_delay_ms = responder.reply_delay().as_millis() as u64;
            ChatMessageResponse {
                blocked: false,
                reason: None,
                warning: None,
                reply: Some(reply),
                reply_delay_ms: Some(reply_delay_ms),
            }
        }
    };

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(rid.clone()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_response_serializes_reason_lowercase() {
        let data = ChatMessageResponse {
            blocked: true,
            reason: Some(BlockReason::Crisis),
            warning: Some("call 988"),
            reply: None,
            reply_delay_ms: None,
        };
        let json = serde_json::to_value(&data).expect("serialize");
        assert_eq!(json["reason"].as_str(), Some("crisis"));
        assert!(json["reply"].is_null());
    }
}
