//! College-football pregame win probability.
//!
//! Two strategies share one entry point, [`Predictor::predict`]:
//!   - `Statistics`: linear blend of strength, matchup and efficiency
//!     differences plus home field, a same-conference bump and hashed noise,
//!     clamped to `[0.20, 0.85]`.
//!   - `Simple`: home field plus a wider hashed noise term, clamped to
//!     `[0.25, 0.75]`. Used when no statistics are available.
//!
//! Both are pure functions of (home, away, week, stats snapshot).

use super::noise::{matchup_key, noise};
use super::stats::StatsTable;
use super::strength::{efficiency_advantage, matchup_advantage, team_strength};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Fixed home-field bonus, applied unconditionally.
const HOME_FIELD_ADVANTAGE: f64 = 0.05;

/// Bonus when both teams share a known conference.
const CONFERENCE_BONUS: f64 = 0.02;

const STRENGTH_WEIGHT: f64 = 0.20;
const MATCHUP_WEIGHT: f64 = 0.15;
const EFFICIENCY_WEIGHT: f64 = 0.10;
const STATS_NOISE_WEIGHT: f64 = 0.10;
const SIMPLE_NOISE_WEIGHT: f64 = 0.30;

const STATS_BOUNDS: (f64, f64) = (0.20, 0.85);
const SIMPLE_BOUNDS: (f64, f64) = (0.25, 0.75);

/// Converts the probability edge into a points-like display number.
const SPREAD_SCALE: f64 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStrategy {
    #[default]
    Statistics,
    Simple,
}

impl PredictionStrategy {
    /// Inclusive clamp range for the home probability.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            PredictionStrategy::Statistics => STATS_BOUNDS,
            PredictionStrategy::Simple => SIMPLE_BOUNDS,
        }
    }
}

impl fmt::Display for PredictionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionStrategy::Statistics => write!(f, "statistics"),
            PredictionStrategy::Simple => write!(f, "simple"),
        }
    }
}

impl FromStr for PredictionStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "statistics" | "stats" => Ok(PredictionStrategy::Statistics),
            "simple" => Ok(PredictionStrategy::Simple),
            other => anyhow::bail!("unknown prediction strategy: {other}"),
        }
    }
}

/// Outcome of one matchup. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub home_team: String,
    pub away_team: String,
    pub winner: String,
    pub home_win_probability: f64,
    pub away_win_probability: f64,
    pub confidence: f64,
    pub spread_estimate: f64,
}

impl Prediction {
    /// Derive the record from a (clamped) home probability.
    fn from_home_probability(home: &str, away: &str, p: f64) -> Self {
        let away_p = 1.0 - p;
        let winner = if p > away_p { home } else { away };
        Self {
            home_team: home.to_string(),
            away_team: away.to_string(),
            winner: winner.to_string(),
            home_win_probability: p,
            away_win_probability: away_p,
            confidence: p.max(away_p),
            spread_estimate: (p - 0.5) * SPREAD_SCALE,
        }
    }
}

/// Prediction entry point. Cheap to clone; the stats snapshot is shared.
#[derive(Debug, Clone)]
pub struct Predictor {
    stats: Arc<StatsTable>,
    strategy: PredictionStrategy,
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new(PredictionStrategy::default())
    }
}

impl Predictor {
    /// Predictor with an empty table: every team uses default statistics.
    pub fn new(strategy: PredictionStrategy) -> Self {
        Self {
            stats: Arc::new(StatsTable::empty()),
            strategy,
        }
    }

    pub fn with_stats(stats: impl Into<Arc<StatsTable>>, strategy: PredictionStrategy) -> Self {
        Self {
            stats: stats.into(),
            strategy,
        }
    }

    /// Swap in a new snapshot. Clones made earlier keep the old one.
    pub fn replace_stats(&mut self, stats: impl Into<Arc<StatsTable>>) {
        self.stats = stats.into();
    }

    pub fn strategy(&self) -> PredictionStrategy {
        self.strategy
    }

    pub fn stats(&self) -> &StatsTable {
        &self.stats
    }

    /// Predict `home` vs `away` in `week`. Total: unknown teams fall back to
    /// neutral statistics.
    pub fn predict(&self, home: &str, away: &str, week: u32) -> Prediction {
        let p = match self.strategy {
            PredictionStrategy::Statistics => self.statistics_probability(home, away, week),
            PredictionStrategy::Simple => simple_probability(home, away, week),
        };
        Prediction::from_home_probability(home, away, p)
    }

    fn statistics_probability(&self, home: &str, away: &str, week: u32) -> f64 {
        let home_stats = self.stats.get_or_default(home);
        let away_stats = self.stats.get_or_default(away);

        let home_strength = team_strength(&home_stats);
        let away_strength = team_strength(&away_stats);
        let home_off_vs_away_def = matchup_advantage(&home_stats, &away_stats);
        let away_off_vs_home_def = matchup_advantage(&away_stats, &home_stats);
        let efficiency_adv = efficiency_advantage(&home_stats, &away_stats);

        let mut p = 0.50;
        p += ((home_strength - away_strength) / 100.0) * STRENGTH_WEIGHT;
        p += ((home_off_vs_away_def - away_off_vs_home_def) / 100.0) * MATCHUP_WEIGHT;
        p += efficiency_adv * EFFICIENCY_WEIGHT;
        p += HOME_FIELD_ADVANTAGE;
        if home_stats.has_known_conference()
            && away_stats.has_known_conference()
            && home_stats.conference.trim() == away_stats.conference.trim()
        {
            p += CONFERENCE_BONUS;
        }
        p += (noise(&matchup_key(home, away, week)) - 0.5) * STATS_NOISE_WEIGHT;

        clamp_probability(p, STATS_BOUNDS)
    }
}

fn simple_probability(home: &str, away: &str, week: u32) -> f64 {
    let mut p = 0.50;
    p += HOME_FIELD_ADVANTAGE;
    p += (noise(&matchup_key(home, away, week)) - 0.5) * SIMPLE_NOISE_WEIGHT;
    clamp_probability(p, SIMPLE_BOUNDS)
}

/// Clamp into `bounds`; NaN (from non-finite inputs) maps to the lower bound.
fn clamp_probability(p: f64, (lo, hi): (f64, f64)) -> f64 {
    if p.is_nan() {
        lo
    } else {
        p.clamp(lo, hi)
    }
}
