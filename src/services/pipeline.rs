use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use log::{error, info};

use crate::api::DataSource;
use crate::config::{PipelineSettings, RunConfig};
use crate::domain::{FetchProgress, Gameweek, LeagueId, LeagueRecord, TeamRecord};
use crate::errors::LeagueError;
use crate::report::{assemble_report, LeagueReport, ReportSink};

/// Outcome of one run across all selected leagues
#[derive(Debug, Default)]
pub struct RunSummary {
    pub current_gameweek: Gameweek,
    pub completed: Vec<LeagueReport>,
    pub failed: Vec<LeagueError>,
}

/// Fetches, aligns, ranks and publishes league reports
pub struct ReportPipeline<S> {
    source: S,
    settings: PipelineSettings,
}

impl<S: DataSource> ReportPipeline<S> {
    pub fn new(source: S, settings: PipelineSettings) -> Self {
        Self { source, settings }
    }

    /// Run every selected league. Only a failure to fetch the viewer ends the
    /// run early; league failures are logged and collected.
    pub async fn run(&self, run: &RunConfig, sink: &dyn ReportSink) -> Result<RunSummary> {
        info!("=== Starting League Reports ===");

        let viewer = self
            .source
            .fetch_team(run.viewer_team_id)
            .await
            .with_context(|| format!("Failed to fetch viewer team {}", run.viewer_team_id))?;
        let current_gameweek = viewer.current_gameweek;
        let league_ids = run.league_selection.resolve(&viewer);
        info!(
            "  → Viewer {} at gameweek {}, {} leagues selected",
            viewer.player_name,
            current_gameweek,
            league_ids.len()
        );

        let outcomes: Vec<Result<LeagueReport, LeagueError>> = stream::iter(league_ids)
            .map(|league_id| self.process_league(league_id, current_gameweek))
            .buffered(self.settings.league_concurrency.max(1))
            .collect()
            .await;

        let mut summary = RunSummary {
            current_gameweek,
            ..RunSummary::default()
        };
        for outcome in outcomes {
            match outcome {
                Ok(report) => match sink.publish(&report) {
                    Ok(()) => summary.completed.push(report),
                    Err(e) => {
                        error!("Failed to publish league {}: {:#}", report.league_id, e);
                        summary.failed.push(LeagueError::Publish {
                            league_id: report.league_id,
                            reason: format!("{:#}", e),
                        });
                    }
                },
                Err(e) => {
                    error!("Skipping league {}: {}", e.league_id(), e);
                    summary.failed.push(e);
                }
            }
        }

        info!(
            "=== Reports Complete: {} ok, {} failed ===",
            summary.completed.len(),
            summary.failed.len()
        );
        Ok(summary)
    }

    /// Fetch one league and all of its teams, then assemble its report
    pub async fn process_league(
        &self,
        league_id: LeagueId,
        current_gameweek: Gameweek,
    ) -> Result<LeagueReport, LeagueError> {
        let league = self
            .source
            .fetch_league(league_id)
            .await
            .map_err(|source| LeagueError::LeagueFetch { league_id, source })?;

        let teams = self.fetch_teams(&league).await?;
        assemble_report(&league, &teams, current_gameweek, &self.settings)
    }

    /// Teams come back in standings order; the first failed fetch abandons the league
    async fn fetch_teams(&self, league: &LeagueRecord) -> Result<Vec<TeamRecord>, LeagueError> {
        let team_ids = league.team_ids();
        let mut progress = FetchProgress::new(league.id, team_ids.len());
        let mut teams = Vec::with_capacity(team_ids.len());

        let mut fetches = stream::iter(team_ids)
            .map(|team_id| async move { (team_id, self.source.fetch_team(team_id).await) })
            .buffered(self.settings.team_concurrency.max(1));

        while let Some((team_id, result)) = fetches.next().await {
            let team = result.map_err(|source| LeagueError::TeamFetch {
                league_id: league.id,
                team_id,
                source,
            })?;
            teams.push(team);
            progress.increment_fetched();
        }

        Ok(teams)
    }
}
