use super::config::PaginationConfig;
use super::urls::with_page_param;

/// Walks the pages of a paginated endpoint
pub struct PageIterator {
    current_page: usize,
    config: PaginationConfig,
}

impl PageIterator {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            current_page: 1,
            config,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn current_url(&self, base_url: &str) -> String {
        with_page_param(base_url, self.config.page_param, self.current_page)
    }

    /// True once the next page would exceed the configured maximum
    pub fn at_last_allowed_page(&self) -> bool {
        self.config
            .max_pages
            .is_some_and(|max| self.current_page >= max)
    }

    pub fn advance(&mut self) {
        self.current_page += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_at_max_pages() {
        let mut pages = PageIterator::new(PaginationConfig::new("ls-page").with_max_pages(Some(2)));
        assert!(!pages.at_last_allowed_page());
        pages.advance();
        assert!(pages.at_last_allowed_page());
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut pages = PageIterator::new(PaginationConfig::new("page"));
        for _ in 0..100 {
            pages.advance();
        }
        assert!(!pages.at_last_allowed_page());
        assert_eq!(pages.current_url("https://x/y"), "https://x/y?page=101");
    }
}
