use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Correlation ID carried through handlers as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// One rate-limit accounting window.
#[derive(Debug)]
struct Window {
    opened_at: Instant,
    served: usize,
}

/// Fixed-window request limiter shared by every metered route.
///
/// The window opens on the first claimed request, admits up to
/// `max_requests`, and rolls over lazily once its duration has lapsed.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    max_requests: usize,
    window: Duration,
    ledger: Arc<Mutex<Window>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            ledger: Arc::new(Mutex::new(Window {
                opened_at: Instant::now(),
                served: 0,
            })),
        }
    }

    /// Claims one request slot, rolling the window first when it has lapsed.
    async fn try_claim(&self) -> bool {
        let mut ledger = self.ledger.lock().await;

        if ledger.opened_at.elapsed() >= self.window {
            ledger.opened_at = Instant::now();
            ledger.served = 0;
        }

        if ledger.served >= self.max_requests {
            return false;
        }

        ledger.served += 1;
        true
    }
}

#[derive(Debug, Serialize)]
struct LimitBody {
    error: LimitDetail,
}

#[derive(Debug, Serialize)]
struct LimitDetail {
    code: &'static str,
    message: &'static str,
}

/// Tags every request with an ID for log correlation.
///
/// An inbound `x-request-id` header wins so callers can trace a request end
/// to end; otherwise a fresh `UUIDv4` is minted. The ID rides along as a
/// [`RequestId`] extension and is echoed back on the response header.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = inbound_request_id(req.headers().get("x-request-id"))
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert("x-request-id", val);
    }

    res
}

/// Middleware gate in front of the metered routes.
pub async fn enforce_rate_limit(
    State(rate_limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    if !rate_limit.try_claim().await {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(LimitBody {
                error: LimitDetail {
                    code: "rate_limited",
                    message: "rate limit exceeded",
                },
            }),
        )
            .into_response();
    }

    next.run(req).await
}

fn inbound_request_id(value: Option<&HeaderValue>) -> Option<String> {
    value
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}
