use async_trait::async_trait;
use log::warn;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

use crate::api::DataSource;
use crate::config::RetrySettings;
use crate::domain::{LeagueId, LeagueRecord, TeamId, TeamRecord};
use crate::errors::FetchError;

/// Exponential backoff schedule for retryable fetch failures
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    initial_backoff: Duration,
    multiplier: u32,
}

impl RetryPolicy {
    pub fn new(settings: &RetrySettings) -> Self {
        Self {
            max_retries: settings.max_retries,
            initial_backoff: Duration::from_millis(settings.initial_backoff_ms),
            multiplier: settings.backoff_multiplier.max(1),
        }
    }

    /// Delay before retry number `attempt` (1-based)
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = self.multiplier.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff.saturating_mul(factor)
    }

    pub async fn run<T, F, Fut>(&self, what: &str, mut operation: F) -> Result<T, FetchError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.backoff(attempt);
                    warn!(
                        "Fetching {} failed ({}), retry {}/{} in {:?}",
                        what, e, attempt, self.max_retries, delay
                    );
                    sleep(delay).await;
                }
                result => return result,
            }
        }
    }
}

/// Any data source, with retries layered on top
pub struct RetryingSource<S> {
    inner: S,
    policy: RetryPolicy,
}

impl<S: DataSource> RetryingSource<S> {
    pub fn new(inner: S, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl<S: DataSource> DataSource for RetryingSource<S> {
    async fn fetch_team(&self, team_id: TeamId) -> Result<TeamRecord, FetchError> {
        let what = format!("team {}", team_id);
        self.policy.run(&what, || self.inner.fetch_team(team_id)).await
    }

    async fn fetch_league(&self, league_id: LeagueId) -> Result<LeagueRecord, FetchError> {
        let what = format!("league {}", league_id);
        self.policy
            .run(&what, || self.inner.fetch_league(league_id))
            .await
    }
}
