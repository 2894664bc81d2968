use crate::errors::ConsistencyError;

/// Verify a league's final cumulative totals come in non-increasing order.
///
/// An undefined total belongs to a team that has not started yet and sorts
/// below every defined total, so it may only follow defined ones.
pub fn check_sorted_descending(final_column: &[Option<i64>]) -> Result<(), ConsistencyError> {
    for (position, pair) in final_column.windows(2).enumerate() {
        let (above, below) = (pair[0], pair[1]);
        if !in_order(above, below) {
            return Err(ConsistencyError::Unsorted {
                position: position + 1,
                above,
                below,
            });
        }
    }
    Ok(())
}

fn in_order(above: Option<i64>, below: Option<i64>) -> bool {
    match (above, below) {
        (Some(a), Some(b)) => a >= b,
        (Some(_), None) | (None, None) => true,
        (None, Some(_)) => false,
    }
}
