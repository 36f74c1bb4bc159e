use crate::core::{EngineError, EngineResult};
use std::time::Duration;

/// Stand-in for a remote backend call
///
/// Waits for `latency` to model the round trip, bounded by `timeout`. A call
/// whose latency exceeds the timeout fails with `SimulationFailure`. The
/// operation passed to [`SimulatedBackend::call`] only runs after the wait, so
/// a caller that drops the future never applies it.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedBackend {
    latency: Duration,
    timeout: Duration,
}

impl SimulatedBackend {
    pub fn new(latency: Duration, timeout: Duration) -> Self {
        Self { latency, timeout }
    }

    /// A backend that answers immediately
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::from_secs(10))
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Run `operation` after the simulated round trip
    pub async fn call<T, F>(&self, name: &str, operation: F) -> EngineResult<T>
    where
        F: FnOnce() -> EngineResult<T>,
    {
        if !self.latency.is_zero() {
            tokio::time::timeout(self.timeout, tokio::time::sleep(self.latency))
                .await
                .map_err(|_| {
                    tracing::warn!("{} timed out after {:?}", name, self.timeout);
                    EngineError::SimulationFailure(format!(
                        "{} timed out after {} ms",
                        name,
                        self.timeout.as_millis()
                    ))
                })?;
        }

        operation()
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::instant()
    }
}
