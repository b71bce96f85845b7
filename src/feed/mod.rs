pub mod file;
pub mod http;
pub mod parse;
pub mod types;

use crate::engine::stats::{normalize_team_name, StatsTable, TeamStatistics, UNKNOWN_CONFERENCE};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use types::{StatValue, StatsDocument, TeamEntry};

/// Somewhere a statistics snapshot can be loaded from.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_table(&self) -> Result<StatsTable>;
    /// Label recorded on the loaded table (file path, URL).
    fn describe(&self) -> String;
}

/// Pick a source for `location`: http(s) URLs go over the network, anything
/// else is a file path.
pub fn source_for(location: &str, request_timeout_ms: u64, max_retries: u32) -> Box<dyn StatsSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(http::HttpStatsSource::new(location, request_timeout_ms).with_max_retries(max_retries))
    } else {
        Box::new(file::FileStatsSource::new(location))
    }
}

/// Parse a stats JSON document into an immutable table.
///
/// Only a document that is not JSON, or lacks a `teams` array, is an error.
/// Individual values never fail: malformed strings read as 0 and missing
/// ones keep the neutral default.
pub fn parse_stats_document(json: &str, source: &str) -> Result<StatsTable> {
    let doc: StatsDocument =
        serde_json::from_str(json).with_context(|| format!("failed to parse stats document from {source}"))?;

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(doc.teams.len());
    for entry in doc.teams {
        let name = entry.name.trim().to_string();
        if name.is_empty() {
            tracing::warn!(source, "skipping team entry with empty name");
            continue;
        }
        if !seen.insert(normalize_team_name(&name)) {
            tracing::warn!(source, team = %name, "duplicate team entry, keeping the later one");
        }
        let stats = team_statistics(&entry);
        entries.push((name, stats));
    }

    let table = StatsTable::from_entries(source, entries);
    tracing::debug!(source, teams = table.len(), "stats table parsed");
    Ok(table)
}

/// Convert one document entry into model statistics.
pub fn team_statistics(entry: &TeamEntry) -> TeamStatistics {
    let mut stats = TeamStatistics::default();

    if let Some(conf) = entry.conference.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        stats.conference = conf.to_string();
    } else {
        stats.conference = UNKNOWN_CONFERENCE.to_string();
    }

    let Some(groups) = &entry.stats else {
        return stats;
    };

    if let Some(off) = &groups.offense {
        apply(&mut stats.offensive_rating, &off.rating, StatValue::as_rank);
        apply(&mut stats.points_per_play, &off.points_per_play, StatValue::as_number);
        apply(&mut stats.yards_per_play, &off.yards_per_play, StatValue::as_number);
        apply(&mut stats.completion_rate, &off.completion_pct, StatValue::as_percent);
        apply(&mut stats.third_down_rate, &off.third_down_pct, StatValue::as_percent);
        apply(&mut stats.red_zone_rate, &off.red_zone_pct, StatValue::as_percent);
    }
    if let Some(def) = &groups.defense {
        apply(&mut stats.defensive_rating, &def.rating, StatValue::as_rank);
        apply(&mut stats.opp_points_per_play, &def.opp_points_per_play, StatValue::as_number);
        apply(&mut stats.opp_yards_per_play, &def.opp_yards_per_play, StatValue::as_number);
        apply(&mut stats.opp_completion_rate, &def.opp_completion_pct, StatValue::as_percent);
        apply(&mut stats.opp_third_down_rate, &def.opp_third_down_pct, StatValue::as_percent);
        apply(&mut stats.opp_red_zone_rate, &def.opp_red_zone_pct, StatValue::as_percent);
    }
    if let Some(eff) = &groups.efficiency {
        apply(&mut stats.efficiency_rating, &eff.rating, StatValue::as_rank);
    }
    if let Some(adv) = &groups.advanced {
        apply(&mut stats.advanced_rating, &adv.rating, StatValue::as_rank);
    }

    stats
}

/// Overwrite `field` only when the source supplied a value.
fn apply(field: &mut f64, value: &Option<StatValue>, read: fn(&StatValue) -> f64) {
    if let Some(v) = value {
        *field = read(v);
    }
}
