use serde_json::Value;

use crate::domain::models::LeagueStandingsResponse;
use crate::domain::{LeagueId, LeagueMember};
use crate::errors::FetchError;

/// One page of a league's standings
#[derive(Debug)]
pub struct LeaguePage {
    pub id: LeagueId,
    pub name: String,
    pub members: Vec<LeagueMember>,
    pub has_next: bool,
}

pub fn parse_league_page(url: &str, raw: &Value) -> Result<LeaguePage, FetchError> {
    let response: LeagueStandingsResponse = serde_json::from_value(raw.clone())
        .map_err(|e| FetchError::malformed(url, e.to_string()))?;

    Ok(LeaguePage {
        id: response.league.id,
        name: response.league.name,
        members: response
            .standings
            .results
            .into_iter()
            .map(LeagueMember::from)
            .collect(),
        has_next: response.standings.has_next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_league_page() {
        let raw = json!({
            "league": {"id": 74045, "name": "Office League", "created": "2016-08-01"},
            "standings": {
                "has_next": true,
                "number": 1,
                "results": [
                    {"entry": 11, "entry_name": "A", "player_name": "Ann", "rank": 1, "total": 40},
                    {"entry": 12, "entry_name": "B", "player_name": "Bob", "rank": 2, "total": 35}
                ]
            }
        });
        let page = parse_league_page("u", &raw).unwrap();

        assert_eq!(page.name, "Office League");
        assert!(page.has_next);
        assert_eq!(page.members.iter().map(|m| m.team_id).collect::<Vec<_>>(), vec![11, 12]);
        assert_eq!(page.members[1].total, 35);
    }

    #[test]
    fn test_missing_standings_is_malformed() {
        let raw = json!({"league": {"id": 1, "name": "L"}});
        let err = parse_league_page("u", &raw).unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
    }

    #[test]
    fn test_has_next_defaults_to_false() {
        let raw = json!({"league": {"id": 1, "name": "L"}, "standings": {"results": []}});
        assert!(!parse_league_page("u", &raw).unwrap().has_next);
    }
}
