pub mod selection;
pub mod settings;

pub use selection::LeagueSelection;
pub use settings::{ApiSettings, AppConfig, PipelineSettings, RetrySettings, RunConfig};
