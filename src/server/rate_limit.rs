//! Fixed-window request limit shared by every client.

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

use super::errors::ApiErrorDetail;
use super::ServerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitResult {
    Allowed { remaining: u32 },
    Limited { retry_after: Duration },
}

#[derive(Debug)]
struct Window {
    started: Instant,
    count: u32,
}

#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    current: Mutex<Window>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            current: Mutex::new(Window {
                started: Instant::now(),
                count: 0,
            }),
        }
    }

    pub fn per_minute(max_requests: u32) -> Self {
        Self::new(max_requests, Duration::from_secs(60))
    }

    pub fn check(&self) -> RateLimitResult {
        let now = Instant::now();
        let mut current = self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if now.duration_since(current.started) >= self.window {
            current.started = now;
            current.count = 0;
        }

        if current.count >= self.max_requests {
            let retry_after = self.window.saturating_sub(now.duration_since(current.started));
            return RateLimitResult::Limited { retry_after };
        }

        current.count += 1;
        RateLimitResult::Allowed {
            remaining: self.max_requests - current.count,
        }
    }
}

pub async fn rate_limit(
    State(state): State<Arc<ServerState>>,
    req: Request,
    next: Next,
) -> Response {
    match state.limiter.check() {
        RateLimitResult::Allowed { .. } => next.run(req).await,
        RateLimitResult::Limited { retry_after } => {
            let secs = retry_after.as_secs().max(1);
            let mut response = ApiErrorDetail::rate_limited(secs).into_response();
            if let Ok(value) = HeaderValue::from_str(&secs.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
            response
        }
    }
}
