mod align;
mod matrix;

pub use align::{align, AlignedSeries, ValueFill};
pub use matrix::SeriesMatrix;
