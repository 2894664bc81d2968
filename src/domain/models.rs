use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type TeamId = u64;
pub type LeagueId = u64;
pub type Gameweek = u32;

/// Private classic leagues are tagged "x" by the API
pub const PRIVATE_LEAGUE_TYPE: &str = "x";

/// One gameweek of a team's history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameweekRecord {
    pub points: i64,
    pub total_points: i64,
    /// Raw squad value in tenths of a million
    pub value: i64,
}

impl GameweekRecord {
    pub fn scaled_value(&self) -> f64 {
        self.value as f64 / 10.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueMembership {
    pub id: LeagueId,
    pub name: String,
    pub league_type: String,
}

impl LeagueMembership {
    pub fn is_private(&self) -> bool {
        self.league_type == PRIVATE_LEAGUE_TYPE
    }
}

/// A team with its full gameweek history, keyed by gameweek number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: TeamId,
    pub player_name: String,
    pub team_name: String,
    pub first_active_gameweek: Gameweek,
    pub current_gameweek: Gameweek,
    pub history: BTreeMap<Gameweek, GameweekRecord>,
    pub classic_leagues: Vec<LeagueMembership>,
}

impl TeamRecord {
    pub fn record(&self, gameweek: Gameweek) -> Option<&GameweekRecord> {
        self.history.get(&gameweek)
    }

    pub fn private_league_ids(&self) -> Vec<LeagueId> {
        self.classic_leagues
            .iter()
            .filter(|l| l.is_private())
            .map(|l| l.id)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueMember {
    pub team_id: TeamId,
    pub team_name: String,
    pub player_name: String,
    pub rank: u32,
    pub total: i64,
}

/// A league with its members in the order the standings list them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueRecord {
    pub id: LeagueId,
    pub name: String,
    pub members: Vec<LeagueMember>,
}

impl LeagueRecord {
    pub fn team_ids(&self) -> Vec<TeamId> {
        self.members.iter().map(|m| m.team_id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

// --- API Response Structures ---

/// Raw `entry/{id}/history` response
#[derive(Debug, Deserialize, Serialize)]
pub struct EntryHistoryResponse {
    pub entry: EntryInfo,
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub leagues: Option<EntryLeagues>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct EntryInfo {
    pub id: TeamId,
    #[serde(default)]
    pub name: String,
    pub player_first_name: String,
    pub player_last_name: String,
    pub started_event: Gameweek,
    pub current_event: Gameweek,
}

impl EntryInfo {
    pub fn player_name(&self) -> String {
        format!("{} {}", self.player_first_name, self.player_last_name)
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub event: Gameweek,
    pub points: i64,
    pub total_points: i64,
    pub value: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct EntryLeagues {
    #[serde(default)]
    pub classic: Vec<ClassicLeagueInfo>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ClassicLeagueInfo {
    pub id: LeagueId,
    pub name: String,
    pub league_type: String,
}

/// Raw `leagues-classic-standings/{id}` response, one page of standings
#[derive(Debug, Deserialize, Serialize)]
pub struct LeagueStandingsResponse {
    pub league: LeagueInfo,
    pub standings: Standings,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LeagueInfo {
    pub id: LeagueId,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Standings {
    #[serde(default)]
    pub has_next: bool,
    pub results: Vec<StandingRow>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StandingRow {
    pub entry: TeamId,
    #[serde(default)]
    pub entry_name: String,
    #[serde(default)]
    pub player_name: String,
    pub rank: u32,
    pub total: i64,
}

impl From<StandingRow> for LeagueMember {
    fn from(row: StandingRow) -> Self {
        LeagueMember {
            team_id: row.entry,
            team_name: row.entry_name,
            player_name: row.player_name,
            rank: row.rank,
            total: row.total,
        }
    }
}
