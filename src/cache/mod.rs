mod responses;

pub use responses::ResponseCache;
