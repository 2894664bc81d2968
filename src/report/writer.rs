use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use super::model::LeagueReport;
use super::naming::sanitize_league_name;

/// Receives finished league reports, e.g. a chart renderer
pub trait ReportSink: Send + Sync {
    fn publish(&self, report: &LeagueReport) -> Result<()>;
}

/// Writes each report as pretty JSON into an output directory
pub struct JsonReportWriter {
    output_dir: PathBuf,
}

impl JsonReportWriter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir).context("Failed to create output directory")?;
        Ok(Self { output_dir })
    }

    pub fn report_path(&self, report: &LeagueReport) -> PathBuf {
        let name = sanitize_league_name(&report.league_name);
        self.output_dir
            .join(format!("report_{}_{}.json", report.league_id, name))
    }
}

impl ReportSink for JsonReportWriter {
    fn publish(&self, report: &LeagueReport) -> Result<()> {
        let path = self.report_path(report);
        let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        info!("Wrote report for league {} to {}", report.league_id, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{RankMatrix, TieBreak};
    use crate::series::SeriesMatrix;

    fn report() -> LeagueReport {
        LeagueReport {
            league_id: 74045,
            league_name: "Office League".to_string(),
            team_ids: vec![11],
            team_names: vec!["Ann Lee".to_string()],
            current_gameweek: 2,
            tie_break: TieBreak::EarlierRowFirst,
            ranks: RankMatrix::from_rows(vec![vec![None, Some(1)]], 2),
            gameweek_ranks: RankMatrix::from_rows(vec![vec![None, Some(1)]], 2),
            values: SeriesMatrix::from_rows(vec![vec![None, Some(100.0)]], 2),
            gameweek_rank_placeholder: None,
        }
    }

    #[test]
    fn test_writes_report_json() {
        let dir = std::env::temp_dir().join("fpl_league_ranks_test_writer");
        let writer = JsonReportWriter::new(&dir).unwrap();
        let report = report();

        writer.publish(&report).unwrap();

        let path = writer.report_path(&report);
        assert!(path.ends_with("report_74045_Office-League.json"));
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["ranks"], serde_json::json!([[null, 1]]));
        assert_eq!(written["tie_break"], "earlier_row_first");

        fs::remove_dir_all(dir).ok();
    }
}
