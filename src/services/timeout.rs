use std::{future::Future, time::Duration};

use crate::error::{AppError, AppResult};

/// Per-call deadline enforcement
///
/// Every outbound request gets its own guard, so an expired deadline only
/// drops the future it wraps and never touches a sibling request.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutGuard {
    deadline: Duration,
}

impl TimeoutGuard {
    pub fn new(deadline: Duration) -> Self {
        Self { deadline }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Runs `call`, failing with `AppError::Timeout` once the deadline passes
    pub async fn run<T, F>(&self, source_name: &'static str, call: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        match tokio::time::timeout(self.deadline, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    provider = source_name,
                    deadline_ms = self.deadline.as_millis() as u64,
                    "Upstream call timed out"
                );
                Err(AppError::Timeout {
                    source_name,
                    after_ms: self.deadline.as_millis() as u64,
                })
            }
        }
    }
}

impl Default for TimeoutGuard {
    fn default() -> Self {
        Self::new(Duration::from_millis(10_000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_fast_call_passes_through() {
        let guard = TimeoutGuard::new(Duration::from_millis(500));
        let value = guard.run("fast", async { Ok::<_, AppError>(42) }).await;
        assert_eq!(assert_ok!(value), 42);
    }

    #[tokio::test]
    async fn test_inner_error_is_preserved() {
        let guard = TimeoutGuard::new(Duration::from_millis(500));
        let result: AppResult<()> = guard
            .run("broken", async {
                Err(AppError::ExternalApi("bad body".to_string()))
            })
            .await;
        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }

    #[tokio::test]
    async fn test_stalled_call_times_out() {
        let guard = TimeoutGuard::new(Duration::from_millis(20));
        let result: AppResult<()> = guard
            .run("stalled", std::future::pending::<AppResult<()>>())
            .await;

        let err = assert_err!(result);
        assert!(matches!(
            err,
            AppError::Timeout {
                source_name: "stalled",
                after_ms: 20
            }
        ));
    }

    #[test]
    fn test_default_deadline_is_ten_seconds() {
        assert_eq!(TimeoutGuard::default().deadline(), Duration::from_secs(10));
    }
}
