use async_trait::async_trait;

use crate::domain::{LeagueId, LeagueRecord, TeamId, TeamRecord};
use crate::errors::FetchError;

/// Where team and league records come from
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_team(&self, team_id: TeamId) -> Result<TeamRecord, FetchError>;

    /// All members of the league, in standings order
    async fn fetch_league(&self, league_id: LeagueId) -> Result<LeagueRecord, FetchError>;
}
