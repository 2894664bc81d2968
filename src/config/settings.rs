use std::path::PathBuf;

use super::selection::LeagueSelection;
use crate::domain::TeamId;
use crate::ranking::{GameweekRankPlaceholder, TieBreak};
use crate::series::ValueFill;

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
    /// Upper bound on standings pages per league; `None` follows `has_next` to the end
    pub max_standings_pages: Option<usize>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://fantasy.premierleague.com/drf".to_string(),
            user_agent: "FplLeagueRanks/0.1".to_string(),
            timeout_secs: 30,
            rate_limit_ms: 100, // 10 req/sec
            max_standings_pages: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RetrySettings {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub backoff_multiplier: u32,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff_ms: 500,
            backoff_multiplier: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub league_concurrency: usize,
    pub team_concurrency: usize,
    pub tie_break: TieBreak,
    pub value_fill: ValueFill,
    pub gameweek_rank_placeholder: GameweekRankPlaceholder,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            league_concurrency: 2,
            team_concurrency: 4,
            tie_break: TieBreak::default(),
            value_fill: ValueFill::default(),
            gameweek_rank_placeholder: GameweekRankPlaceholder::default(),
        }
    }
}

impl PipelineSettings {
    /// Reproduce the placeholders of the original charts
    pub fn with_legacy_placeholders(mut self) -> Self {
        self.value_fill = ValueFill::LEGACY;
        self.gameweek_rank_placeholder = GameweekRankPlaceholder::LegacyMedian;
        self
    }
}

/// What a single run fetches and where its reports go
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub viewer_team_id: TeamId,
    pub league_selection: LeagueSelection,
    pub output_directory: PathBuf,
    pub cache_directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub retry: RetrySettings,
    pub pipeline: PipelineSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_placeholders_switch_both_policies() {
        let settings = PipelineSettings::default().with_legacy_placeholders();
        assert_eq!(settings.value_fill, ValueFill::Placeholder(100.0));
        assert_eq!(
            settings.gameweek_rank_placeholder,
            GameweekRankPlaceholder::LegacyMedian
        );
        assert_eq!(settings.tie_break, TieBreak::EarlierRowFirst);
    }
}
