use regex::Regex;
use std::sync::LazyLock;

static PATH_HOSTILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).expect("Valid regex"));

/// The charts a renderer produces per league
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    LeagueRank,
    GameweekRank,
    ValueRank,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::LeagueRank,
        ChartKind::GameweekRank,
        ChartKind::ValueRank,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ChartKind::LeagueRank => "league_rank",
            ChartKind::GameweekRank => "league_gw_rank",
            ChartKind::ValueRank => "value_rank",
        }
    }
}

/// League name usable as part of a file name: spaces become `-`,
/// separators and control characters are dropped
pub fn sanitize_league_name(name: &str) -> String {
    let dashed = name.trim().replace(' ', "-");
    PATH_HOSTILE.replace_all(&dashed, "").into_owned()
}

/// `{kind}_{league_name_sanitized}.png`
pub fn artifact_file_name(kind: ChartKind, league_name: &str) -> String {
    format!("{}_{}.png", kind.as_str(), sanitize_league_name(league_name))
}
