mod fpl_client;
pub mod parsers;
mod source;

pub use fpl_client::FplClient;
pub use source::DataSource;
