use anyhow::Result;

use fpl_league_ranks::cli::Command;
use fpl_league_ranks::{handle_leagues, handle_report, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Report(args) => handle_report(args),
        Command::Leagues { team } => handle_leagues(*team),
    }
}
