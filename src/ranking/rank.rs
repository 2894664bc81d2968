use serde::Serialize;
use std::cmp::Ordering;

use crate::series::SeriesMatrix;

pub type RankMatrix = SeriesMatrix<u32>;

/// Which of two teams with equal points gets the better rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The team listed first in the league table ranks higher
    #[default]
    EarlierRowFirst,
    /// The team listed later ranks higher, as the original charts did
    LaterRowFirst,
}

impl TieBreak {
    fn order(&self, a: usize, b: usize) -> Ordering {
        match self {
            TieBreak::EarlierRowFirst => a.cmp(&b),
            TieBreak::LaterRowFirst => b.cmp(&a),
        }
    }
}

/// Rank every gameweek column, 1 = most points.
///
/// Only defined cells take part: a column with `k` defined cells gets the
/// ranks `1..=k` exactly once each, and undefined cells stay undefined.
/// Equal values are ordered by `tie_break`.
pub fn rank_columns<T: Ord + Copy>(matrix: &SeriesMatrix<T>, tie_break: TieBreak) -> RankMatrix {
    let mut ranks = RankMatrix::undefined(matrix.num_teams(), matrix.num_gameweeks());

    for col in 0..matrix.num_gameweeks() {
        let mut defined: Vec<(usize, T)> = matrix
            .column_view(col)
            .iter()
            .enumerate()
            .filter_map(|(row, &cell)| cell.map(|value| (row, value)))
            .collect();

        defined.sort_by(|(row_a, a), (row_b, b)| {
            b.cmp(a).then_with(|| tie_break.order(*row_a, *row_b))
        });

        for (position, (row, _)) in defined.into_iter().enumerate() {
            ranks.set_cell(row, col, Some(position as u32 + 1));
        }
    }

    ranks
}
