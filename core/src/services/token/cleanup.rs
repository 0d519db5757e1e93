//! Periodic maintenance of expired refresh tokens
//!
//! Expiry is checked lazily on use; this task only keeps the table from
//! growing without bound. It is opt-in and never part of the hot path.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::errors::DomainResult;
use crate::repositories::TokenRepository;

/// Configuration for the token cleanup task
#[derive(Debug, Clone)]
pub struct TokenCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for TokenCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600,
            enabled: true,
        }
    }
}

/// Service for deleting expired refresh tokens
pub struct TokenCleanupService<R: TokenRepository + 'static> {
    repository: Arc<R>,
    config: TokenCleanupConfig,
}

impl<R: TokenRepository + 'static> TokenCleanupService<R> {
    /// Create a new token cleanup service
    pub fn new(repository: Arc<R>, config: TokenCleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single cleanup cycle
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired tokens deleted
    /// * `Err(DomainError)` - If the deletion fails
    pub async fn run_cleanup(&self) -> DomainResult<usize> {
        if !self.config.enabled {
            return Ok(0);
        }

        let deleted = self.repository.delete_expired_tokens().await?;

        if deleted > 0 {
            info!(deleted, "deleted expired refresh tokens");
        }

        Ok(deleted)
    }

    /// Start the cleanup service as a background task
    ///
    /// Spawns a tokio task that runs cleanup at regular intervals.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("token cleanup service is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                interval_seconds = self.config.interval_seconds,
                "token cleanup service started"
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_cleanup().await {
                    error!("token cleanup cycle failed: {}", e);
                }
            }
        });
    }
}
