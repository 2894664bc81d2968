use serde::Serialize;

use crate::domain::{Gameweek, LeagueId, TeamId};
use crate::ranking::{fill_undefined, RankMatrix, TieBreak};
use crate::series::SeriesMatrix;

/// Everything a chart renderer needs for one league.
///
/// Rows of every matrix follow `team_names`; columns are gameweeks
/// `1..=current_gameweek`. Undefined cells are gameweeks before a team joined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueReport {
    pub league_id: LeagueId,
    pub league_name: String,
    pub team_ids: Vec<TeamId>,
    pub team_names: Vec<String>,
    pub current_gameweek: Gameweek,
    pub tie_break: TieBreak,
    /// League rank by cumulative points
    pub ranks: RankMatrix,
    /// League rank by points scored in each gameweek alone
    pub gameweek_ranks: RankMatrix,
    /// Scaled squad value
    pub values: SeriesMatrix<f64>,
    /// Cosmetic stand-in for undefined gameweek ranks in distribution charts.
    /// Carries no information about the team when set.
    pub gameweek_rank_placeholder: Option<u32>,
}

impl LeagueReport {
    pub fn num_teams(&self) -> usize {
        self.team_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.team_names.is_empty()
    }

    /// Gameweek ranks of one team for a distribution chart.
    ///
    /// Undefined gameweeks are skipped, or replaced by the placeholder when one is set.
    pub fn gameweek_rank_distribution(&self, row: usize) -> Vec<u32> {
        self.gameweek_ranks
            .row(row)
            .into_iter()
            .filter_map(|rank| rank.or(self.gameweek_rank_placeholder))
            .collect()
    }

    /// Gameweek ranks with every undefined cell replaced by the placeholder.
    /// `None` when no placeholder is configured.
    pub fn plottable_gameweek_ranks(&self) -> Option<SeriesMatrix<u32>> {
        self.gameweek_rank_placeholder
            .map(|value| fill_undefined(&self.gameweek_ranks, value))
    }

    /// (value, rank) pairs of one team, for gameweeks where both are defined
    pub fn value_rank_pairs(&self, row: usize) -> Vec<(f64, u32)> {
        self.values
            .row(row)
            .into_iter()
            .zip(self.ranks.row(row))
            .filter_map(|(value, rank)| Some((value?, rank?)))
            .collect()
    }
}
