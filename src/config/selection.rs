use log::info;

use crate::domain::{LeagueId, TeamRecord};

/// Which leagues a run reports on
#[derive(Debug, Clone, PartialEq)]
pub enum LeagueSelection {
    /// Exactly these leagues, in this order
    Explicit(Vec<LeagueId>),
    /// The viewer's private classic leagues, minus the excluded ids
    FromViewer { exclude: Vec<LeagueId> },
}

impl LeagueSelection {
    pub fn resolve(&self, viewer: &TeamRecord) -> Vec<LeagueId> {
        match self {
            LeagueSelection::Explicit(ids) => dedup_preserving_order(ids),
            LeagueSelection::FromViewer { exclude } => {
                let ids: Vec<LeagueId> = viewer
                    .private_league_ids()
                    .into_iter()
                    .filter(|id| !exclude.contains(id))
                    .collect();
                info!(
                    "Selected {} private leagues of team {} ({} excluded)",
                    ids.len(),
                    viewer.id,
                    exclude.len()
                );
                dedup_preserving_order(&ids)
            }
        }
    }
}

fn dedup_preserving_order(ids: &[LeagueId]) -> Vec<LeagueId> {
    let mut seen = Vec::with_capacity(ids.len());
    for &id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}
