mod league;
mod team;

pub use league::{parse_league_page, LeaguePage};
pub use team::parse_team;
