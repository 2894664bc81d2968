mod config;
mod iterator;
mod urls;

pub use config::PaginationConfig;
pub use iterator::PageIterator;
pub use urls::with_page_param;
