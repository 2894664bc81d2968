pub mod models;
mod progress;

pub use models::*;
pub use progress::FetchProgress;
