use log::info;

/// Track progress of team fetches within one league
pub struct FetchProgress {
    league_id: u64,
    total: usize,
    fetched: usize,
}

impl FetchProgress {
    pub fn new(league_id: u64, total: usize) -> Self {
        Self {
            league_id,
            total,
            fetched: 0,
        }
    }

    pub fn increment_fetched(&mut self) {
        self.fetched += 1;
        self.log_progress();
    }

    fn log_progress(&self) {
        if should_log(self.fetched, self.total) {
            info!(
                "  → League {}: fetched {}/{} teams",
                self.league_id, self.fetched, self.total
            );
        }
    }
}

fn should_log(current: usize, total: usize) -> bool {
    is_milestone(current) || is_complete(current, total)
}

fn is_milestone(count: usize) -> bool {
    count % 10 == 0
}

fn is_complete(current: usize, total: usize) -> bool {
    current == total
}
