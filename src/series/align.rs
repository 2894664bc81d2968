use log::debug;

use super::matrix::SeriesMatrix;
use crate::domain::{Gameweek, GameweekRecord, TeamRecord};
use crate::errors::AlignError;

/// How squad value is filled for gameweeks before a team joined
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ValueFill {
    /// Leave the cell undefined, like the points tables
    #[default]
    Missing,
    /// Fill with a constant scaled value
    Placeholder(f64),
}

impl ValueFill {
    pub const LEGACY: ValueFill = ValueFill::Placeholder(100.0);

    fn before_join(&self) -> Option<f64> {
        match self {
            ValueFill::Missing => None,
            ValueFill::Placeholder(value) => Some(*value),
        }
    }
}

/// Point and value tables for one league on a common gameweek axis
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    pub current_gameweek: Gameweek,
    pub cumulative: SeriesMatrix<i64>,
    pub gameweek_points: SeriesMatrix<i64>,
    pub values: SeriesMatrix<f64>,
}

/// Lay every team's history onto gameweeks `1..=current_gameweek`.
///
/// Row `i` holds `teams[i]`. Cells before a team's first active gameweek are
/// undefined; every gameweek from then through the horizon must be present in
/// the team's history.
pub fn align(
    teams: &[TeamRecord],
    current_gameweek: Gameweek,
    value_fill: ValueFill,
) -> Result<AlignedSeries, AlignError> {
    let num_gameweeks = current_gameweek as usize;
    let mut cumulative = SeriesMatrix::undefined(teams.len(), num_gameweeks);
    let mut gameweek_points = SeriesMatrix::undefined(teams.len(), num_gameweeks);
    let mut values = SeriesMatrix::undefined(teams.len(), num_gameweeks);

    for (row, team) in teams.iter().enumerate() {
        let first = team.first_active_gameweek.max(1);
        if first > current_gameweek {
            debug!(
                "Team {} starts at gameweek {} after the horizon {}",
                team.id, team.first_active_gameweek, current_gameweek
            );
        }

        for gameweek in 1..first.min(current_gameweek + 1) {
            values.set(row, gameweek, value_fill.before_join());
        }

        for gameweek in first..=current_gameweek {
            let record = active_record(team, gameweek)?;
            cumulative.set(row, gameweek, Some(record.total_points));
            gameweek_points.set(row, gameweek, Some(record.points));
            values.set(row, gameweek, Some(record.scaled_value()));
        }
    }

    Ok(AlignedSeries {
        current_gameweek,
        cumulative,
        gameweek_points,
        values,
    })
}

fn active_record(team: &TeamRecord, gameweek: Gameweek) -> Result<&GameweekRecord, AlignError> {
    team.record(gameweek).ok_or(AlignError::MissingGameweek {
        team_id: team.id,
        gameweek,
    })
}
