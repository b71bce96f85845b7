use serde::Deserialize;

use super::parse::{parse_number, parse_percent, parse_rank};

/// Team statistics document as produced by the ranking-site scraper.
///
/// ```json
/// { "teams": [ { "name": "Alabama", "conference": "SEC",
///   "stats": { "offense": { "rating": "Predictive rank #3", "completion_pct": "64.2%" } } } ] }
/// ```
#[derive(Debug, Deserialize)]
pub struct StatsDocument {
    pub teams: Vec<TeamEntry>,
}

#[derive(Debug, Deserialize)]
pub struct TeamEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub stats: Option<TeamStatsGroups>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamStatsGroups {
    #[serde(default)]
    pub offense: Option<OffenseStats>,
    #[serde(default)]
    pub defense: Option<DefenseStats>,
    #[serde(default)]
    pub efficiency: Option<RatingOnly>,
    #[serde(default, rename = "advanced-stats", alias = "advanced_stats", alias = "advancedStats")]
    pub advanced: Option<RatingOnly>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OffenseStats {
    #[serde(default)]
    pub rating: Option<StatValue>,
    #[serde(default, alias = "pointsPerPlay")]
    pub points_per_play: Option<StatValue>,
    #[serde(default, alias = "yardsPerPlay")]
    pub yards_per_play: Option<StatValue>,
    #[serde(default, alias = "completionPct")]
    pub completion_pct: Option<StatValue>,
    #[serde(default, alias = "thirdDownPct")]
    pub third_down_pct: Option<StatValue>,
    #[serde(default, alias = "redZonePct")]
    pub red_zone_pct: Option<StatValue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DefenseStats {
    #[serde(default)]
    pub rating: Option<StatValue>,
    #[serde(default, alias = "oppPointsPerPlay")]
    pub opp_points_per_play: Option<StatValue>,
    #[serde(default, alias = "oppYardsPerPlay")]
    pub opp_yards_per_play: Option<StatValue>,
    #[serde(default, alias = "oppCompletionPct")]
    pub opp_completion_pct: Option<StatValue>,
    #[serde(default, alias = "oppThirdDownPct")]
    pub opp_third_down_pct: Option<StatValue>,
    #[serde(default, alias = "oppRedZonePct")]
    pub opp_red_zone_pct: Option<StatValue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RatingOnly {
    #[serde(default)]
    pub rating: Option<StatValue>,
}

/// A single statistic. Scraped values arrive as strings; hand-edited files
/// sometimes carry bare numbers, which are taken as already normalized.
/// Anything else (null, bool, object) reads as malformed.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl StatValue {
    pub fn as_rank(&self) -> f64 {
        match self {
            StatValue::Number(n) => *n,
            StatValue::Text(s) => parse_rank(s),
            StatValue::Other(_) => 0.0,
        }
    }

    pub fn as_percent(&self) -> f64 {
        match self {
            StatValue::Number(n) => *n,
            StatValue::Text(s) => parse_percent(s),
            StatValue::Other(_) => 0.0,
        }
    }

    pub fn as_number(&self) -> f64 {
        match self {
            StatValue::Number(n) => *n,
            StatValue::Text(s) => parse_number(s),
            StatValue::Other(_) => 0.0,
        }
    }
}
