//! Scan invoker - bounded immediate retry around a `NetworkScanner`

use occupancy_common::ScanConfig;
use occupancy_core::{NetworkScanner, ScanError, ScanResult};
use std::sync::Arc;
use std::time::Duration;

/// Default number of attempts before a scan is given up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 20;

/// How often, and how patiently, a failed scan is retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: None,
        }
    }
}

impl RetryPolicy {
    /// Create a policy; at least one attempt is always made
    pub fn new(max_attempts: u32, backoff: Option<Duration>) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn backoff(&self) -> Option<Duration> {
        self.backoff
    }
}

impl From<&ScanConfig> for RetryPolicy {
    fn from(config: &ScanConfig) -> Self {
        Self::new(config.max_attempts, config.backoff())
    }
}

/// Runs one network discovery with retries
#[derive(Clone)]
pub struct ScanInvoker {
    scanner: Arc<dyn NetworkScanner>,
    policy: RetryPolicy,
}

impl ScanInvoker {
    pub fn new(scanner: Arc<dyn NetworkScanner>, policy: RetryPolicy) -> Self {
        Self { scanner, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run the scan, retrying failures up to the policy's attempt bound
    ///
    /// # Errors
    /// Returns `ScanError::RetriesExhausted` carrying the last failure once
    /// every attempt has failed.
    pub async fn run_scan(&self) -> ScanResult<String> {
        let max_attempts = self.policy.max_attempts;
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            match self.scanner.scan_once().await {
                Ok(output) => {
                    if attempt > 1 {
                        tracing::debug!(attempt, "Scan succeeded after retry");
                    }
                    return Ok(output);
                }
                Err(e) => {
                    tracing::debug!(attempt, max_attempts, error = %e, "Scan attempt failed");
                    last_error = Some(e);

                    if let Some(delay) = self.policy.backoff {
                        if attempt < max_attempts {
                            tokio::time::sleep(delay).await;
                        }
                    }
                }
            }
        }

        Err(ScanError::RetriesExhausted {
            attempts: max_attempts,
            last: last_error.map(|e| e.to_string()).unwrap_or_default(),
        })
    }
}

impl std::fmt::Debug for ScanInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanInvoker")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
