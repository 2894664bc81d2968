/// Configuration for paginated requests
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    pub max_pages: Option<usize>,
    pub page_param: &'static str,
}

impl PaginationConfig {
    pub fn new(page_param: &'static str) -> Self {
        Self {
            max_pages: None,
            page_param,
        }
    }

    pub fn with_max_pages(mut self, max: Option<usize>) -> Self {
        self.max_pages = max;
        self
    }
}
