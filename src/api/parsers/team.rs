use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::models::{EntryHistoryResponse, HistoryEntry};
use crate::domain::{Gameweek, GameweekRecord, LeagueMembership, TeamRecord};
use crate::errors::FetchError;

/// Parse an `entry/{id}/history` response into a team record.
///
/// History rows are keyed by their own gameweek number. Every gameweek from
/// `started_event` through `current_event` must be present exactly once.
pub fn parse_team(url: &str, raw: &Value) -> Result<TeamRecord, FetchError> {
    let response: EntryHistoryResponse = serde_json::from_value(raw.clone())
        .map_err(|e| FetchError::malformed(url, e.to_string()))?;

    let history = index_history(url, response.history)?;
    let entry = response.entry;
    check_contiguous(url, &history, entry.started_event, entry.current_event)?;

    let classic_leagues = response
        .leagues
        .map(|leagues| leagues.classic)
        .unwrap_or_default()
        .into_iter()
        .map(|league| LeagueMembership {
            id: league.id,
            name: league.name,
            league_type: league.league_type,
        })
        .collect();

    Ok(TeamRecord {
        id: entry.id,
        player_name: entry.player_name(),
        team_name: entry.name,
        first_active_gameweek: entry.started_event,
        current_gameweek: entry.current_event,
        history,
        classic_leagues,
    })
}

fn index_history(
    url: &str,
    rows: Vec<HistoryEntry>,
) -> Result<BTreeMap<Gameweek, GameweekRecord>, FetchError> {
    let mut history = BTreeMap::new();
    for row in rows {
        let record = GameweekRecord {
            points: row.points,
            total_points: row.total_points,
            value: row.value,
        };
        if history.insert(row.event, record).is_some() {
            return Err(FetchError::malformed(
                url,
                format!("gameweek {} appears twice in history", row.event),
            ));
        }
    }
    Ok(history)
}

fn check_contiguous(
    url: &str,
    history: &BTreeMap<Gameweek, GameweekRecord>,
    first: Gameweek,
    current: Gameweek,
) -> Result<(), FetchError> {
    match (first..=current).find(|gw| !history.contains_key(gw)) {
        Some(missing) => Err(FetchError::malformed(
            url,
            format!("history has no gameweek {} (active {}..={})", missing, first, current),
        )),
        None => Ok(()),
    }
}
