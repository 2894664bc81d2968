use crate::api::parsers::{parse_league_page, parse_team};
use crate::api::DataSource;
use crate::cache::ResponseCache;
use crate::config::ApiSettings;
use crate::domain::{LeagueId, LeagueRecord, TeamId, TeamRecord};
use crate::errors::FetchError;
use crate::http::RateLimitedClient;
use crate::pagination::{PageIterator, PaginationConfig};
use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use serde_json::Value;

const STANDINGS_PAGE_PARAM: &str = "ls-page";

/// Fantasy Premier League API client
pub struct FplClient {
    client: RateLimitedClient,
    base_url: String,
    max_standings_pages: Option<usize>,
    cache: Option<ResponseCache>,
}

impl FplClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            &settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            max_standings_pages: settings.max_standings_pages,
            cache: None,
        })
    }

    /// Serve responses from `cache` when present and store fresh ones in it
    pub fn with_cache(mut self, cache: ResponseCache) -> Self {
        self.cache = Some(cache);
        self
    }

    async fn fetch_json(&self, url: &str, cache_key: &str) -> Result<Value, FetchError> {
        if let Some(value) = self.load_cached(cache_key) {
            return Ok(value);
        }

        let value = self.client.get_json(url).await?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.save_raw(cache_key, &value) {
                warn!("Failed to save {} to cache: {:?}", cache_key, e);
            }
        }
        Ok(value)
    }

    fn load_cached(&self, cache_key: &str) -> Option<Value> {
        let cache = self.cache.as_ref()?;
        match cache.load_raw(cache_key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring unreadable cache entry {}: {:?}", cache_key, e);
                None
            }
        }
    }

    // --- Helper Methods ---

    fn build_team_url(&self, team_id: TeamId) -> String {
        format!("{}/entry/{}/history", self.base_url, team_id)
    }

    fn build_standings_url(&self, league_id: LeagueId) -> String {
        format!(
            "{}/leagues-classic-standings/{}?phase=1&le-page=1",
            self.base_url, league_id
        )
    }
}

#[async_trait]
impl DataSource for FplClient {
    async fn fetch_team(&self, team_id: TeamId) -> Result<TeamRecord, FetchError> {
        let url = self.build_team_url(team_id);
        let raw = self
            .fetch_json(&url, &format!("entry-{}-history", team_id))
            .await?;
        parse_team(&url, &raw)
    }

    async fn fetch_league(&self, league_id: LeagueId) -> Result<LeagueRecord, FetchError> {
        info!("Fetching standings for league {}", league_id);

        let base_url = self.build_standings_url(league_id);
        let config = PaginationConfig::new(STANDINGS_PAGE_PARAM).with_max_pages(self.max_standings_pages);
        let mut pages = PageIterator::new(config);
        let mut name = String::new();
        let mut members = Vec::new();

        loop {
            let url = pages.current_url(&base_url);
            let cache_key = format!("league-{}-page-{}", league_id, pages.current_page());
            let raw = self.fetch_json(&url, &cache_key).await?;
            let page = parse_league_page(&url, &raw)?;
            if page.id != league_id {
                return Err(FetchError::malformed(
                    &url,
                    format!("standings belong to league {}", page.id),
                ));
            }

            if name.is_empty() {
                name = page.name;
            }
            let added = page.members.len();
            members.extend(page.members);

            if !page.has_next {
                break;
            }
            if added == 0 {
                warn!(
                    "League {} page {} is empty but claims more pages; stopping",
                    league_id,
                    pages.current_page()
                );
                break;
            }
            if pages.at_last_allowed_page() {
                warn!(
                    "League {} has more standings pages; stopping after page {}",
                    league_id,
                    pages.current_page()
                );
                break;
            }
            pages.advance();
        }

        info!("League {} ({}) has {} members", league_id, name, members.len());
        Ok(LeagueRecord {
            id: league_id,
            name,
            members,
        })
    }
}
