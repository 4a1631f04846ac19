//! Retry with exponential backoff for transient HTTP failures.
//!
//! Network-level flakiness is the test runner's kind of problem, not the
//! scan's: only the category page fetch retries, and a failed scan
//! ([`ScanError::NoCandidates`]) is never retried.

use std::future::Future;
use std::time::Duration;

use crate::error::ScanError;

/// Returns `true` if `err` represents a transient condition that should be
/// retried after a backoff delay.
///
/// Retriable: [`ScanError::RateLimited`] (the server asked us to back off)
/// and [`ScanError::Http`] (connection reset, timeout, etc.). Everything
/// else — 404, unexpected statuses, scan and reconciliation failures — is
/// propagated immediately.
fn is_retriable(err: &ScanError) -> bool {
    matches!(err, ScanError::RateLimited { .. } | ScanError::Http(_))
}

/// Executes `operation` with exponential backoff retries on transient errors.
///
/// On a retriable error the function sleeps for `backoff_base_secs *
/// 2^attempt` seconds and tries again, up to `max_retries` additional
/// attempts after the first try. Non-retriable errors return immediately.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, ScanError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScanError>>,
{
    let mut attempt = 0u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }

                // Exponential backoff: base * 2^attempt seconds, capped to
                // avoid shift overflow on extreme configs.
                let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
                tracing::warn!(
                    attempt,
                    delay_secs,
                    error = %err,
                    "transient fetch error, retrying after backoff"
                );
                tokio::time::sleep(Duration::from_secs(delay_secs)).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn transient() -> ScanError {
        ScanError::RateLimited {
            url: "https://example.com".to_owned(),
            retry_after_secs: 0,
        }
    }

    #[tokio::test]
    async fn success_on_first_attempt_does_not_retry() {
        let calls = Cell::new(0u32);
        let result = retry_with_backoff(3, 0, || {
            calls.set(calls.get() + 1);
            async { Ok::<_, ScanError>(7) }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn transient_error_retries_until_success() {
        let calls = Cell::new(0u32);
        let result = retry_with_backoff(3, 0, || {
            calls.set(calls.get() + 1);
            let succeed = calls.get() > 2;
            async move {
                if succeed {
                    Ok(42)
                } else {
                    Err(transient())
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn retries_are_exhausted_after_max_attempts() {
        let calls = Cell::new(0u32);
        let result: Result<(), _> = retry_with_backoff(2, 0, || {
            calls.set(calls.get() + 1);
            async { Err(transient()) }
        })
        .await;
        assert!(matches!(result, Err(ScanError::RateLimited { .. })));
        // Initial attempt plus two retries.
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn non_retriable_error_fails_immediately() {
        let calls = Cell::new(0u32);
        let result: Result<(), _> = retry_with_backoff(5, 0, || {
            calls.set(calls.get() + 1);
            async {
                Err(ScanError::NotFound {
                    url: "https://example.com/missing".to_owned(),
                })
            }
        })
        .await;
        assert!(matches!(result, Err(ScanError::NotFound { .. })));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn no_candidates_is_never_retried() {
        let calls = Cell::new(0u32);
        let result: Result<(), _> = retry_with_backoff(5, 0, || {
            calls.set(calls.get() + 1);
            async { Err(ScanError::NoCandidates { scanned: 4 }) }
        })
        .await;
        assert!(matches!(result, Err(ScanError::NoCandidates { .. })));
        assert_eq!(calls.get(), 1);
    }
}
