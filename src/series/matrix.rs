use ndarray::{Array2, ArrayView1};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::domain::Gameweek;

/// Teams x gameweeks table; `None` marks a cell with no value for that gameweek.
///
/// Rows follow league order. Columns are gameweeks 1..=current_gameweek,
/// so gameweek `gw` lives in column `gw - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesMatrix<T> {
    cells: Array2<Option<T>>,
}

impl<T: Copy> SeriesMatrix<T> {
    pub fn undefined(num_teams: usize, num_gameweeks: usize) -> Self {
        Self {
            cells: Array2::from_elem((num_teams, num_gameweeks), None),
        }
    }

    pub fn from_rows(rows: Vec<Vec<Option<T>>>, num_gameweeks: usize) -> Self {
        let mut matrix = Self::undefined(rows.len(), num_gameweeks);
        for (row, values) in rows.into_iter().enumerate() {
            for (col, value) in values.into_iter().take(num_gameweeks).enumerate() {
                matrix.cells[[row, col]] = value;
            }
        }
        matrix
    }

    pub fn num_teams(&self) -> usize {
        self.cells.nrows()
    }

    pub fn num_gameweeks(&self) -> usize {
        self.cells.ncols()
    }

    pub fn get(&self, row: usize, gameweek: Gameweek) -> Option<T> {
        let col = column_index(gameweek)?;
        self.cells.get((row, col)).copied().flatten()
    }

    pub fn set(&mut self, row: usize, gameweek: Gameweek, value: Option<T>) {
        if let Some(col) = column_index(gameweek) {
            if let Some(cell) = self.cells.get_mut((row, col)) {
                *cell = value;
            }
        }
    }

    pub fn row(&self, row: usize) -> Vec<Option<T>> {
        self.cells.row(row).to_vec()
    }

    pub fn column(&self, gameweek: Gameweek) -> Vec<Option<T>> {
        match column_index(gameweek) {
            Some(col) if col < self.num_gameweeks() => self.cells.column(col).to_vec(),
            _ => vec![None; self.num_teams()],
        }
    }

    pub(crate) fn column_view(&self, col: usize) -> ArrayView1<'_, Option<T>> {
        self.cells.column(col)
    }

    pub(crate) fn set_cell(&mut self, row: usize, col: usize, value: Option<T>) {
        self.cells[[row, col]] = value;
    }

    /// Values at the last gameweek of the table
    pub fn final_column(&self) -> Vec<Option<T>> {
        self.column(self.num_gameweeks() as Gameweek)
    }

    /// First and last gameweek with a defined cell in `row`
    pub fn defined_range(&self, row: usize) -> Option<(Gameweek, Gameweek)> {
        let cells = self.cells.row(row);
        let first = cells.iter().position(Option::is_some)?;
        let last = cells.iter().rposition(Option::is_some)?;
        Some((first as Gameweek + 1, last as Gameweek + 1))
    }

    pub fn count_defined(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

fn column_index(gameweek: Gameweek) -> Option<usize> {
    (gameweek as usize).checked_sub(1)
}

/// Serialized as one array per team, `null` for undefined cells
impl<T: Serialize> Serialize for SeriesMatrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut rows = serializer.serialize_seq(Some(self.cells.nrows()))?;
        for row in self.cells.rows() {
            let values: Vec<&Option<T>> = row.iter().collect();
            rows.serialize_element(&values)?;
        }
        rows.end()
    }
}
