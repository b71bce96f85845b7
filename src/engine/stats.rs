use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Conference label used when the source has none.
pub const UNKNOWN_CONFERENCE: &str = "Unknown";

/// Per-team statistics for one week.
///
/// Ratings are ranks: lower is better, nominally 0..=100. Rate fields are
/// fractions (0.425 == 42.5%); per-play fields are small positive floats.
/// The `opp_*` fields describe what opponents achieve against this defense.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStatistics {
    pub offensive_rating: f64,
    pub defensive_rating: f64,
    pub efficiency_rating: f64,
    pub advanced_rating: f64,

    pub points_per_play: f64,
    pub yards_per_play: f64,
    pub completion_rate: f64,
    pub third_down_rate: f64,
    pub red_zone_rate: f64,

    pub opp_points_per_play: f64,
    pub opp_yards_per_play: f64,
    pub opp_completion_rate: f64,
    pub opp_third_down_rate: f64,
    pub opp_red_zone_rate: f64,

    pub conference: String,
}

impl Default for TeamStatistics {
    /// Neutral record used for any team the source does not know about.
    fn default() -> Self {
        Self {
            offensive_rating: 50.0,
            defensive_rating: 50.0,
            efficiency_rating: 50.0,
            advanced_rating: 50.0,
            points_per_play: 0.40,
            yards_per_play: 5.5,
            completion_rate: 0.60,
            third_down_rate: 0.40,
            red_zone_rate: 0.80,
            opp_points_per_play: 0.40,
            opp_yards_per_play: 5.5,
            opp_completion_rate: 0.60,
            opp_third_down_rate: 0.40,
            opp_red_zone_rate: 0.80,
            conference: UNKNOWN_CONFERENCE.to_string(),
        }
    }
}

impl TeamStatistics {
    /// True when the conference label is a real one (not empty, not "Unknown").
    pub fn has_known_conference(&self) -> bool {
        let c = self.conference.trim();
        !c.is_empty() && c != UNKNOWN_CONFERENCE
    }
}

/// Normalize a team name for lookup: trim, collapse whitespace, lowercase.
/// "  Ohio   State " -> "ohio state"
pub fn normalize_team_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

/// Immutable snapshot of every team's statistics.
///
/// Built once by a loader and shared read-only (usually behind an `Arc`) by
/// every prediction call.
#[derive(Debug, Clone)]
pub struct StatsTable {
    teams: HashMap<String, (String, TeamStatistics)>,
    source: String,
    loaded_at: DateTime<Utc>,
}

impl Default for StatsTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl StatsTable {
    pub fn empty() -> Self {
        Self {
            teams: HashMap::new(),
            source: "none".to_string(),
            loaded_at: Utc::now(),
        }
    }

    /// Build a table from `(display name, stats)` pairs. Later duplicates
    /// (after name normalization) replace earlier ones.
    pub fn from_entries<I, S>(source: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, TeamStatistics)>,
        S: Into<String>,
    {
        let mut teams = HashMap::new();
        for (name, stats) in entries {
            let name = name.into();
            teams.insert(normalize_team_name(&name), (name, stats));
        }
        Self {
            teams,
            source: source.to_string(),
            loaded_at: Utc::now(),
        }
    }

    /// Stats for `name`, if the source had them.
    pub fn get(&self, name: &str) -> Option<&TeamStatistics> {
        self.teams.get(&normalize_team_name(name)).map(|(_, s)| s)
    }

    /// Stats for `name`, falling back to the neutral default.
    pub fn get_or_default(&self, name: &str) -> TeamStatistics {
        self.get(name).cloned().unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.teams.contains_key(&normalize_team_name(name))
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Display names, sorted.
    pub fn team_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.teams.values().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Known display names that contain `name` (or are contained by it),
    /// compared normalized. Empty input matches nothing.
    pub fn similar_names(&self, name: &str) -> Vec<&str> {
        let wanted = normalize_team_name(name);
        if wanted.is_empty() {
            return Vec::new();
        }
        self.team_names()
            .into_iter()
            .filter(|n| {
                let candidate = normalize_team_name(n);
                candidate.contains(&wanted) || wanted.contains(&candidate)
            })
            .collect()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
