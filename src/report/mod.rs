mod assemble;
mod model;
mod naming;
mod writer;

pub use assemble::assemble_report;
pub use model::LeagueReport;
pub use naming::{artifact_file_name, sanitize_league_name, ChartKind};
pub use writer::{JsonReportWriter, ReportSink};
