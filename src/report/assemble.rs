use log::{info, warn};

use super::model::LeagueReport;
use crate::config::PipelineSettings;
use crate::consistency::check_sorted_descending;
use crate::domain::{Gameweek, LeagueRecord, TeamRecord};
use crate::errors::LeagueError;
use crate::ranking::rank_columns;
use crate::series::align;

/// Build the report for one league from its fetched teams.
///
/// `teams` must be in the league's standings order. Fails when a team's
/// history has a hole or when the final totals are not in descending order.
pub fn assemble_report(
    league: &LeagueRecord,
    teams: &[TeamRecord],
    current_gameweek: Gameweek,
    settings: &PipelineSettings,
) -> Result<LeagueReport, LeagueError> {
    if league.is_empty() {
        warn!("League {} ({}) has no members", league.id, league.name);
    }

    let series = align(teams, current_gameweek, settings.value_fill).map_err(|source| {
        LeagueError::IncompleteHistory {
            league_id: league.id,
            source,
        }
    })?;

    check_sorted_descending(&series.cumulative.final_column()).map_err(|source| {
        LeagueError::UnsortedLeagueInvariant {
            league_id: league.id,
            source,
        }
    })?;

    let ranks = rank_columns(&series.cumulative, settings.tie_break);
    let gameweek_ranks = rank_columns(&series.gameweek_points, settings.tie_break);

    info!(
        "Assembled report for league {} ({}): {} teams over {} gameweeks, {} played cells",
        league.id,
        league.name,
        teams.len(),
        current_gameweek,
        series.cumulative.count_defined()
    );

    Ok(LeagueReport {
        league_id: league.id,
        league_name: league.name.clone(),
        team_ids: teams.iter().map(|t| t.id).collect(),
        team_names: teams.iter().map(|t| t.player_name.clone()).collect(),
        current_gameweek,
        tie_break: settings.tie_break,
        ranks,
        gameweek_ranks,
        values: series.values,
        gameweek_rank_placeholder: settings
            .gameweek_rank_placeholder
            .placeholder_value(teams.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GameweekRecord, LeagueMember};
    use crate::errors::{AlignError, ConsistencyError};
    use std::collections::BTreeMap;

    fn team(id: u64, name: &str, first: Gameweek, totals: &[i64]) -> TeamRecord {
        let mut history = BTreeMap::new();
        let mut previous = 0;
        for (offset, &total) in totals.iter().enumerate() {
            history.insert(
                first + offset as Gameweek,
                GameweekRecord {
                    points: total - previous,
                    total_points: total,
                    value: 1000,
                },
            );
            previous = total;
        }
        TeamRecord {
            id,
            player_name: name.to_string(),
            team_name: format!("{} FC", name),
            first_active_gameweek: first,
            current_gameweek: 3,
            history,
            classic_leagues: Vec::new(),
        }
    }

    fn league_of(teams: &[TeamRecord]) -> LeagueRecord {
        LeagueRecord {
            id: 74045,
            name: "Office League".to_string(),
            members: teams
                .iter()
                .enumerate()
                .map(|(i, t)| LeagueMember {
                    team_id: t.id,
                    team_name: t.team_name.clone(),
                    player_name: t.player_name.clone(),
                    rank: i as u32 + 1,
                    total: 0,
                })
                .collect(),
        }
    }

    fn three_teams() -> Vec<TeamRecord> {
        vec![
            team(1, "A", 1, &[10, 25, 40]),
            team(2, "B", 2, &[20, 35]),
            team(3, "C", 1, &[5, 15, 30]),
        ]
    }

    #[test]
    fn test_three_team_league() {
        let teams = three_teams();
        let report =
            assemble_report(&league_of(&teams), &teams, 3, &PipelineSettings::default()).unwrap();

        assert_eq!(report.team_names, vec!["A", "B", "C"]);
        assert_eq!(report.ranks.column(3), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(report.ranks.column(1), vec![Some(1), None, Some(2)]);
        assert_eq!(report.ranks.column(2), vec![Some(1), Some(2), Some(3)]);
        // per-gameweek points: gw2 = [15, 20, 10], gw3 = [15, 15, 15]
        assert_eq!(report.gameweek_ranks.column(2), vec![Some(2), Some(1), Some(3)]);
        assert_eq!(report.gameweek_ranks.column(3), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(report.gameweek_rank_placeholder, None);
        assert_eq!(report.gameweek_rank_distribution(1), vec![1, 2]);
        assert!(report.plottable_gameweek_ranks().is_none());
    }

    #[test]
    fn test_legacy_placeholder_fills_distribution() {
        let teams = three_teams();
        let settings = PipelineSettings::default().with_legacy_placeholders();
        let report = assemble_report(&league_of(&teams), &teams, 3, &settings).unwrap();

        assert_eq!(report.gameweek_rank_placeholder, Some(1));
        assert_eq!(report.gameweek_rank_distribution(1), vec![1, 1, 2]);
        let plottable = report.plottable_gameweek_ranks().unwrap();
        assert_eq!(plottable.row(1), vec![Some(1), Some(1), Some(2)]);
        // the report itself keeps the undefined cell
        assert_eq!(report.gameweek_ranks.get(1, 1), None);
        assert_eq!(report.values.get(1, 1), Some(100.0));
    }

    #[test]
    fn test_value_rank_pairs_skip_undefined() {
        let teams = three_teams();
        let report =
            assemble_report(&league_of(&teams), &teams, 3, &PipelineSettings::default()).unwrap();
        assert_eq!(report.value_rank_pairs(1), vec![(100.0, 2), (100.0, 2)]);
    }

    #[test]
    fn test_unsorted_league_is_rejected() {
        let teams = vec![team(1, "A", 1, &[10, 20, 30]), team(2, "B", 1, &[10, 20, 31])];
        let err =
            assemble_report(&league_of(&teams), &teams, 3, &PipelineSettings::default()).unwrap_err();

        assert_eq!(
            err,
            LeagueError::UnsortedLeagueInvariant {
                league_id: 74045,
                source: ConsistencyError::Unsorted {
                    position: 1,
                    above: Some(30),
                    below: Some(31)
                }
            }
        );
    }

    #[test]
    fn test_incomplete_history_is_not_an_undefined_cell() {
        let teams = vec![team(1, "A", 1, &[10, 20])];
        let err =
            assemble_report(&league_of(&teams), &teams, 3, &PipelineSettings::default()).unwrap_err();
        assert_eq!(
            err,
            LeagueError::IncompleteHistory {
                league_id: 74045,
                source: AlignError::MissingGameweek {
                    team_id: 1,
                    gameweek: 3
                }
            }
        );
    }

    #[test]
    fn test_empty_league_gives_empty_report() {
        let report =
            assemble_report(&league_of(&[]), &[], 3, &PipelineSettings::default()).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.ranks.num_gameweeks(), 3);
    }

    #[test]
    fn test_team_joining_after_horizon() {
        let teams = vec![team(1, "A", 1, &[10, 25]), team(2, "B", 5, &[3])];
        let report =
            assemble_report(&league_of(&teams), &teams, 2, &PipelineSettings::default()).unwrap();
        assert_eq!(report.ranks.row(1), vec![None, None]);
        assert_eq!(report.ranks.row(0), vec![Some(1), Some(1)]);
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let teams = three_teams();
        let league = league_of(&teams);
        let settings = PipelineSettings::default();
        let first = serde_json::to_vec(&assemble_report(&league, &teams, 3, &settings).unwrap()).unwrap();
        let second = serde_json::to_vec(&assemble_report(&league, &teams, 3, &settings).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
