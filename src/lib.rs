pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod consistency;
pub mod domain;
pub mod errors;
pub mod http;
pub mod pagination;
pub mod rate_limiter;
pub mod ranking;
pub mod report;
pub mod series;
pub mod services;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use colored::Colorize;

use crate::api::{DataSource, FplClient};
use crate::cache::ResponseCache;
use crate::cli::{Command, ReportArgs};
use crate::config::{AppConfig, LeagueSelection, RunConfig};
use crate::http::{RetryPolicy, RetryingSource};
use crate::report::{artifact_file_name, ChartKind, JsonReportWriter};
use crate::services::{ReportPipeline, RunSummary};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_report(args: &ReportArgs) -> Result<()> {
    let config = build_app_config(args);
    let run = build_run_config(args);

    let runtime = tokio::runtime::Runtime::new()?;
    let summary = runtime.block_on(async {
        let source = build_source(&config, run.cache_directory.as_ref())?;
        let writer = JsonReportWriter::new(&run.output_directory)?;
        let pipeline = ReportPipeline::new(source, config.pipeline.clone());
        pipeline.run(&run, &writer).await
    })?;

    print_summary(&summary);
    Ok(())
}

pub fn handle_leagues(team_id: u64) -> Result<()> {
    let config = AppConfig::new();
    let runtime = tokio::runtime::Runtime::new()?;
    let team = runtime.block_on(async {
        let source = build_source(&config, None)?;
        source
            .fetch_team(team_id)
            .await
            .with_context(|| format!("Failed to fetch team {}", team_id))
    })?;

    println!("{} ({}), gameweek {}", team.player_name.bold(), team.team_name, team.current_gameweek);
    for league in &team.classic_leagues {
        let marker = if league.is_private() { "private".green() } else { "public".dimmed() };
        println!("  {:>8}  {:<8} {}", league.id, marker, league.name);
    }
    Ok(())
}

fn build_app_config(args: &ReportArgs) -> AppConfig {
    let mut config = AppConfig::new();
    if let Some(base_url) = &args.base_url {
        config.api.base_url = base_url.clone();
    }
    config.api.timeout_secs = args.timeout;
    config.api.max_standings_pages = args.max_pages;
    config.retry.max_retries = args.retries;
    config.pipeline.league_concurrency = args.league_concurrency;
    config.pipeline.team_concurrency = args.team_concurrency;
    config.pipeline.tie_break = args.tie_break.into();
    if args.legacy_placeholders {
        config.pipeline = config.pipeline.with_legacy_placeholders();
    }
    config
}

fn build_run_config(args: &ReportArgs) -> RunConfig {
    let league_selection = if args.leagues.is_empty() {
        LeagueSelection::FromViewer {
            exclude: args.exclude.clone(),
        }
    } else {
        LeagueSelection::Explicit(args.leagues.clone())
    };

    RunConfig {
        viewer_team_id: args.team,
        league_selection,
        output_directory: args.output_dir.clone(),
        cache_directory: args.cache_dir.clone(),
    }
}

fn build_source(
    config: &AppConfig,
    cache_dir: Option<&std::path::PathBuf>,
) -> Result<RetryingSource<FplClient>> {
    let mut client = FplClient::new(&config.api)?;
    if let Some(dir) = cache_dir {
        client = client.with_cache(ResponseCache::new(dir)?);
    }
    Ok(RetryingSource::new(client, RetryPolicy::new(&config.retry)))
}

fn print_summary(summary: &RunSummary) {
    println!("Gameweek {}", summary.current_gameweek);
    for report in &summary.completed {
        println!(
            "{} {} ({} teams)",
            "ok".green().bold(),
            report.league_name,
            report.num_teams()
        );
        if report.is_empty() {
            continue;
        }
        for kind in ChartKind::ALL {
            println!("     {}", artifact_file_name(kind, &report.league_name).dimmed());
        }
    }
    for failure in &summary.failed {
        println!("{} {}", "failed".red().bold(), failure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> ReportArgs {
        let mut argv = vec!["fpl_league_ranks", "report", "--team", "70189"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Report(args) => args,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_selection_from_flags() {
        let run = build_run_config(&args(&["-e", "29394"]));
        assert_eq!(
            run.league_selection,
            LeagueSelection::FromViewer {
                exclude: vec![29394]
            }
        );

        let run = build_run_config(&args(&["-l", "74045"]));
        assert_eq!(run.league_selection, LeagueSelection::Explicit(vec![74045]));
    }

    #[test]
    fn test_app_config_from_flags() {
        let config = build_app_config(&args(&["--retries", "0", "--legacy-placeholders", "--max-pages", "3"]));
        assert_eq!(config.retry.max_retries, 0);
        assert_eq!(config.api.max_standings_pages, Some(3));
        assert_eq!(
            config.pipeline.gameweek_rank_placeholder,
            crate::ranking::GameweekRankPlaceholder::LegacyMedian
        );
    }
}
