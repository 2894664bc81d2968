use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File-based cache of raw API responses, one JSON file per request key.
///
/// Runs that read from a populated cache see exactly the data the first run
/// fetched, which makes report output repeatable offline.
pub struct ResponseCache {
    raw_dir: PathBuf,
}

impl ResponseCache {
    /// Create a new cache instance
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let raw_dir = cache_dir.as_ref().join("raw");
        fs::create_dir_all(&raw_dir).context("Failed to create raw cache directory")?;
        Ok(Self { raw_dir })
    }

    /// Save raw API response to cache
    pub fn save_raw(&self, key: &str, data: &Value) -> Result<()> {
        let file_path = self.build_raw_path(key);
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&file_path, json)
            .with_context(|| format!("Failed to write cache file {}", file_path.display()))?;
        debug!("Saved raw response to cache: {}", file_path.display());
        Ok(())
    }

    /// Load raw API response from cache
    pub fn load_raw(&self, key: &str) -> Result<Option<Value>> {
        let file_path = self.build_raw_path(key);
        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path)?;
        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                file_path,
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(data))
    }

    /// Clear all cached responses
    pub fn clear(&self) -> Result<()> {
        fs::remove_dir_all(&self.raw_dir).context("Failed to clear cache")?;
        fs::create_dir_all(&self.raw_dir).context("Failed to recreate cache directory")?;
        info!("Cleared cache directory");
        Ok(())
    }

    fn build_raw_path(&self, key: &str) -> PathBuf {
        self.raw_dir.join(format!("{}.json", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cache_save_and_load() {
        let temp_dir = std::env::temp_dir().join("fpl_league_ranks_test_cache");
        let cache = ResponseCache::new(&temp_dir).unwrap();

        let data = json!({"entry": {"id": 70189}, "history": []});
        cache.save_raw("entry-70189-history", &data).unwrap();

        assert_eq!(cache.load_raw("entry-70189-history").unwrap(), Some(data));
        assert_eq!(cache.load_raw("missing").unwrap(), None);

        // Cleanup
        cache.clear().unwrap();
        assert_eq!(cache.load_raw("entry-70189-history").unwrap(), None);
    }
}
