//! The bounded-cancellation fetch helper.

use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, Instant};

use crate::error::FetchError;

/// Run `request` with a fixed wall-clock budget.
///
/// If the window elapses before the request resolves, the request is dropped
/// and `FetchError::Aborted` returned. If the request resolves first, the
/// elapsed clock is consulted once, at the resolution point: a result that
/// lands after the window has already closed is discarded. The timer is a
/// best-effort safety net, not a strict cancellation guarantee: a response
/// arriving in the same tick the window expires may still be accepted.
pub async fn with_deadline<T, F>(window: Duration, request: F) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    let armed_at = Instant::now();

    tokio::select! {
        outcome = request => {
            if armed_at.elapsed() >= window {
                tracing::debug!("response resolved after the abort window, discarding");
                return Err(FetchError::Aborted);
            }
            outcome
        }
        _ = sleep(window) => {
            tracing::debug!(
                window_ms = window.as_millis() as u64,
                "abort window elapsed, request dropped"
            );
            Err(FetchError::Aborted)
        }
    }
}
