use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::ranking::TieBreak;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fantasy Premier League league rank history")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch league histories and write one report per league
    Report(ReportArgs),
    /// List the classic leagues a team belongs to
    Leagues {
        /// Team id whose leagues are listed
        #[arg(short, long)]
        team: u64,
    },
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    /// Viewer team id; sets the current gameweek and the default league list
    #[arg(short, long)]
    pub team: u64,

    /// Report only these leagues (repeatable); default is the viewer's private leagues
    #[arg(short, long = "league")]
    pub leagues: Vec<u64>,

    /// Skip these leagues when deriving the list from the viewer (repeatable)
    #[arg(short, long = "exclude", conflicts_with = "leagues")]
    pub exclude: Vec<u64>,

    /// Directory for the report files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Cache raw API responses here and reuse them on later runs
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Retries per request on transient failures
    #[arg(long, default_value_t = 2)]
    pub retries: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Stop reading league standings after this many pages
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Leagues processed at the same time
    #[arg(long, default_value_t = 2)]
    pub league_concurrency: usize,

    /// Team histories fetched at the same time within a league
    #[arg(long, default_value_t = 4)]
    pub team_concurrency: usize,

    /// Which of two teams with equal points ranks higher
    #[arg(long, value_enum, default_value_t = TieBreakArg::Earlier)]
    pub tie_break: TieBreakArg,

    /// Fill pre-join squad values and gameweek ranks with the original placeholders
    #[arg(long)]
    pub legacy_placeholders: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum TieBreakArg {
    /// The team higher in the league table wins ties
    Earlier,
    /// The team lower in the league table wins ties
    Later,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Earlier => TieBreak::EarlierRowFirst,
            TieBreakArg::Later => TieBreak::LaterRowFirst,
        }
    }
}
