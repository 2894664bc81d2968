use serde::Serialize;

use super::rank::RankMatrix;
use crate::series::SeriesMatrix;

/// What the gameweek-rank view shows for gameweeks a team had not joined yet.
///
/// The legacy median is cosmetic: it only keeps distribution charts drawable
/// and carries no information about the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameweekRankPlaceholder {
    /// Leave the cells undefined so the renderer can show "insufficient data"
    #[default]
    InsufficientData,
    /// Substitute half the team count, as the original box plots did
    LegacyMedian,
}

impl GameweekRankPlaceholder {
    pub fn placeholder_value(&self, team_count: usize) -> Option<u32> {
        match self {
            GameweekRankPlaceholder::InsufficientData => None,
            GameweekRankPlaceholder::LegacyMedian => Some((team_count / 2) as u32),
        }
    }
}

/// Replace undefined ranks with `value`; the result is for display only
pub fn fill_undefined(ranks: &RankMatrix, value: u32) -> SeriesMatrix<u32> {
    let rows = (0..ranks.num_teams())
        .map(|row| {
            ranks
                .row(row)
                .into_iter()
                .map(|cell| Some(cell.unwrap_or(value)))
                .collect()
        })
        .collect();
    SeriesMatrix::from_rows(rows, ranks.num_gameweeks())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_median_uses_integer_half() {
        let legacy = GameweekRankPlaceholder::LegacyMedian;
        assert_eq!(legacy.placeholder_value(7), Some(3));
        assert_eq!(legacy.placeholder_value(8), Some(4));
        assert_eq!(GameweekRankPlaceholder::InsufficientData.placeholder_value(8), None);
    }

    #[test]
    fn test_fill_undefined_keeps_real_ranks() {
        let ranks = RankMatrix::from_rows(vec![vec![None, Some(1)], vec![Some(1), Some(2)]], 2);
        let filled = fill_undefined(&ranks, 1);
        assert_eq!(filled.row(0), vec![Some(1), Some(1)]);
        assert_eq!(filled.row(1), vec![Some(1), Some(2)]);
        assert_eq!(filled.count_defined(), 4);
    }
}
