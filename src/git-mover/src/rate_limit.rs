//! Rate limiting utilities for the GitHub API.
//!
//! Requests that GitHub rejects with a rate limit or a server error are
//! retried by octocrab's own retry layer, which honours the `retry-after`
//! and `x-ratelimit-reset` headers. On top of that, writes are preceded by a
//! check of the core rate limit so a long migration pauses until the window
//! resets instead of failing halfway through.
//! Enterprise installations may have rate limiting disabled, in which case
//! the check endpoint is missing and the check is skipped.

use http::{Request, StatusCode};
use octocrab::service::middleware::retry::{RateLimitMetrics, RetryConfig};
use octocrab::{OctoBody, Octocrab};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Maximum time to wait for rate limit reset (1 hour).
const MAX_WAIT_SECS: u64 = 3600;

/// Minimum remaining requests before proactively waiting.
const MIN_REMAINING_THRESHOLD: u32 = 5;

/// Retries after the first attempt, so a request is sent at most 3 times.
pub const MAX_RETRIES: usize = 2;

/// Wait after a rate limit rejection that names no reset time.
pub const SECONDARY_LIMIT_WAIT: Duration = Duration::from_secs(60);

/// Rate limit information for a specific resource.
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,
    /// Unix timestamp when the rate limit resets.
    pub reset: u64,
    /// Total requests allowed per window.
    pub limit: u32,
}

/// Checks the current rate limit status for the core API.
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: core.remaining as u32,
        reset: core.reset,
        limit: core.limit as u32,
    })
}

/// Time to wait before the next write, if the window is nearly exhausted.
///
/// Waits longer than one hour are capped.
#[must_use]
pub fn wait_duration(info: &RateLimitInfo, now: u64) -> Option<Duration> {
    if info.remaining >= MIN_REMAINING_THRESHOLD || info.reset <= now {
        return None;
    }
    Some(Duration::from_secs((info.reset - now).min(MAX_WAIT_SECS)))
}

fn now_secs() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}

/// Sleeps until the window resets when few requests remain.
///
/// Returns true if it slept.
pub async fn wait_if_needed(info: &RateLimitInfo) -> bool {
    let now = now_secs();
    let Some(wait) = wait_duration(info, now) else {
        return false;
    };

    if info.reset - now > MAX_WAIT_SECS {
        warn!(reset = info.reset, "Rate limit resets more than an hour from now");
    }
    info!(
        remaining = info.remaining,
        limit = info.limit,
        wait_secs = wait.as_secs(),
        "Rate limit low, pausing writes"
    );

    tokio::time::sleep(wait).await;
    true
}

/// Ensures sufficient rate limit before making core API calls.
///
/// A failed check is logged and ignored; the request that follows will
/// surface any real problem.
pub async fn ensure_core_rate_limit(octocrab: &Octocrab) {
    match check_core_rate_limit(octocrab).await {
        Ok(info) => {
            wait_if_needed(&info).await;
        }
        Err(e) => debug!(error = %e, "Rate limit check unavailable, continuing"),
    }
}

/// Sleeps after a request was rejected by a rate limit.
///
/// Waits for the core window to reset when it is exhausted, and for
/// `fallback` otherwise (secondary limits, or no `/rate_limit` endpoint).
pub async fn wait_for_reset(octocrab: &Octocrab, fallback: Duration) {
    let wait = match check_core_rate_limit(octocrab).await {
        Ok(info) if info.remaining == 0 => wait_duration(&info, now_secs()).unwrap_or(fallback),
        _ => fallback,
    };
    info!(wait_secs = wait.as_secs(), "Rate limited, waiting before retrying");
    tokio::time::sleep(wait).await;
}

/// Octocrab retry policy: rate limits are waited out using GitHub's
/// headers, server errors are retried immediately, at most [`MAX_RETRIES`]
/// times each.
///
/// A 429 without headers waits `min_wait`.
#[must_use]
pub fn retry_config(min_wait: Duration) -> RetryConfig {
    RetryConfig::HandleRateLimits {
        metrics: Arc::new(RetryLog),
        max_retries: MAX_RETRIES,
        min_wait_seconds: min_wait.as_secs(),
    }
}

/// Reports octocrab's retries through `tracing`.
struct RetryLog;

impl RateLimitMetrics for RetryLog {
    fn retry_after_error(
        &self,
        req: &Request<OctoBody>,
        status_code: StatusCode,
        retries_remaining: usize,
    ) {
        warn!(
            method = %req.method(),
            uri = %req.uri(),
            status = status_code.as_u16(),
            retries_remaining,
            "Request failed"
        );
    }

    fn rate_limited(
        &self,
        req: &Request<OctoBody>,
        status_code: StatusCode,
        retries_remaining: usize,
        waiting_seconds: u64,
    ) {
        info!(
            method = %req.method(),
            uri = %req.uri(),
            status = status_code.as_u16(),
            retries_remaining,
            wait_secs = waiting_seconds,
            "Rate limited, waiting for reset"
        );
    }
}
