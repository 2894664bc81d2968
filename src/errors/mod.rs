use thiserror::Error;

use crate::domain::{Gameweek, LeagueId, TeamId};

/// Failure to obtain a record from the remote source
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("remote unavailable at {url}: {reason}")]
    RemoteUnavailable {
        url: String,
        status: Option<u16>,
        reason: String,
    },
    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },
}

impl FetchError {
    pub fn unavailable(url: &str, reason: impl Into<String>) -> Self {
        FetchError::RemoteUnavailable {
            url: url.to_string(),
            status: None,
            reason: reason.into(),
        }
    }

    pub fn http_status(url: &str, status: u16) -> Self {
        FetchError::RemoteUnavailable {
            url: url.to_string(),
            status: Some(status),
            reason: format!("HTTP status {}", status),
        }
    }

    pub fn malformed(url: &str, reason: impl Into<String>) -> Self {
        FetchError::MalformedResponse {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    /// Transport failures, timeouts, throttling and server errors may succeed on retry.
    /// Client errors and malformed payloads will not.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::RemoteUnavailable { status: None, .. } => true,
            FetchError::RemoteUnavailable {
                status: Some(code), ..
            } => *code == 429 || *code >= 500,
            FetchError::MalformedResponse { .. } => false,
        }
    }
}

/// Violation of the descending-order assumption on a league table
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConsistencyError {
    #[error(
        "team at position {position} (0-based) has {}, more than the team above it ({})",
        points_label(.below),
        points_label(.above)
    )]
    Unsorted {
        /// 0-based index of the lower team in league order
        position: usize,
        above: Option<i64>,
        below: Option<i64>,
    },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AlignError {
    #[error("team {team_id} has no record for gameweek {gameweek}")]
    MissingGameweek { team_id: TeamId, gameweek: Gameweek },
}

fn points_label(points: &Option<i64>) -> String {
    match points {
        Some(points) => format!("{} points", points),
        None => "no points yet".to_string(),
    }
}

/// Anything that abandons the processing of a single league
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LeagueError {
    #[error("failed to fetch league {league_id}: {source}")]
    LeagueFetch {
        league_id: LeagueId,
        #[source]
        source: FetchError,
    },
    #[error("failed to fetch team {team_id} of league {league_id}: {source}")]
    TeamFetch {
        league_id: LeagueId,
        team_id: TeamId,
        #[source]
        source: FetchError,
    },
    #[error("league {league_id} is not sorted by total points: {source}")]
    UnsortedLeagueInvariant {
        league_id: LeagueId,
        #[source]
        source: ConsistencyError,
    },
    #[error("league {league_id} has an incomplete history: {source}")]
    IncompleteHistory {
        league_id: LeagueId,
        #[source]
        source: AlignError,
    },
    #[error("failed to publish the report for league {league_id}: {reason}")]
    Publish { league_id: LeagueId, reason: String },
}

impl LeagueError {
    pub fn league_id(&self) -> LeagueId {
        match self {
            LeagueError::LeagueFetch { league_id, .. }
            | LeagueError::TeamFetch { league_id, .. }
            | LeagueError::UnsortedLeagueInvariant { league_id, .. }
            | LeagueError::IncompleteHistory { league_id, .. }
            | LeagueError::Publish { league_id, .. } => *league_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(FetchError::unavailable("u", "timed out").is_retryable());
        assert!(FetchError::http_status("u", 503).is_retryable());
        assert!(FetchError::http_status("u", 429).is_retryable());
        assert!(!FetchError::http_status("u", 404).is_retryable());
        assert!(!FetchError::malformed("u", "missing entry").is_retryable());
    }

    #[test]
    fn test_league_id_is_carried_by_every_variant() {
        let err = LeagueError::UnsortedLeagueInvariant {
            league_id: 74045,
            source: ConsistencyError::Unsorted {
                position: 1,
                above: Some(100),
                below: Some(120),
            },
        };
        assert_eq!(err.league_id(), 74045);
        assert!(err.to_string().contains("74045"));
    }

    #[test]
    fn test_unsorted_message_shows_plain_points() {
        let err = ConsistencyError::Unsorted {
            position: 1,
            above: Some(100),
            below: Some(120),
        };
        assert_eq!(
            err.to_string(),
            "team at position 1 (0-based) has 120 points, more than the team above it (100 points)"
        );

        let err = ConsistencyError::Unsorted {
            position: 2,
            above: None,
            below: Some(5),
        };
        assert!(err.to_string().contains("(no points yet)"));
        assert!(!err.to_string().contains("Some("));
    }

    #[test]
    fn test_publish_failure_carries_league_id() {
        let err = LeagueError::Publish {
            league_id: 29394,
            reason: "disk full".to_string(),
        };
        assert_eq!(err.league_id(), 29394);
        assert!(err.to_string().contains("disk full"));
    }
}
