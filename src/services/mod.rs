pub mod pipeline;

pub use pipeline::{ReportPipeline, RunSummary};
