//! Scalar reductions of team statistics used by the win-probability blend.
//!
//! The constants here define the model. Operation order matters for
//! bit-identical output, so each formula is written in the order it is
//! evaluated.

use super::stats::TeamStatistics;

const OFFENSE_WEIGHT: f64 = 0.3;
const DEFENSE_WEIGHT: f64 = 0.3;
const EFFICIENCY_WEIGHT: f64 = 0.2;
const ADVANCED_WEIGHT: f64 = 0.2;

const MATCHUP_POINTS_WEIGHT: f64 = 0.4;
const MATCHUP_COMPLETION_WEIGHT: f64 = 0.3;
const MATCHUP_THIRD_DOWN_WEIGHT: f64 = 0.3;

/// Overall strength; higher is better.
///
/// Ratings are ranks, so each is inverted with `100 - x` before weighting.
/// Ratings inside 0..=100 give a score inside 0..=100.
pub fn team_strength(stats: &TeamStatistics) -> f64 {
    OFFENSE_WEIGHT * (100.0 - stats.offensive_rating)
        + DEFENSE_WEIGHT * (100.0 - stats.defensive_rating)
        + EFFICIENCY_WEIGHT * (100.0 - stats.efficiency_rating)
        + ADVANCED_WEIGHT * (100.0 - stats.advanced_rating)
}

/// Advantage of `offense`'s attack over `defense`'s defense. Positive favours
/// the offense. Not symmetric: call once per direction.
pub fn matchup_advantage(offense: &TeamStatistics, defense: &TeamStatistics) -> f64 {
    MATCHUP_POINTS_WEIGHT
        * (offense.points_per_play * 100.0 - defense.opp_points_per_play * 100.0)
        + MATCHUP_COMPLETION_WEIGHT
            * ((offense.completion_rate - defense.opp_completion_rate) * 100.0)
        + MATCHUP_THIRD_DOWN_WEIGHT
            * ((offense.third_down_rate - defense.opp_third_down_rate) * 100.0)
}

/// Small home-minus-away adjustment from red-zone conversion and yards per
/// play. Rates scale by 100, yards by 10, then the sum is divided by 100.
pub fn efficiency_advantage(home: &TeamStatistics, away: &TeamStatistics) -> f64 {
    (0.5 * (home.red_zone_rate - away.red_zone_rate) * 100.0
        + 0.5 * (home.yards_per_play - away.yards_per_play) * 10.0)
        / 100.0
}
