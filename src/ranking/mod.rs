mod placeholder;
mod rank;

pub use placeholder::{fill_undefined, GameweekRankPlaceholder};
pub use rank::{rank_columns, RankMatrix, TieBreak};
