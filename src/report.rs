// Text and JSON rendering of predictions for the CLI

use crate::engine::strength::team_strength;
use crate::engine::{Prediction, TeamStatistics};
use anyhow::{Context, Result};

/// One display row per prediction.
#[derive(Debug, Clone)]
pub struct PredictionRow {
    pub matchup: String,
    pub winner: String,
    pub home_pct: String,
    pub away_pct: String,
    pub confidence: String,
    pub spread: String,
}

/// "Auburn @ Alabama", probabilities as whole-ish percents, spread from the
/// favourite's side.
pub fn build_rows(predictions: &[Prediction]) -> Vec<PredictionRow> {
    predictions
        .iter()
        .map(|p| PredictionRow {
            matchup: format!("{} @ {}", p.away_team, p.home_team),
            winner: p.winner.clone(),
            home_pct: format_pct(p.home_win_probability),
            away_pct: format_pct(p.away_win_probability),
            confidence: format_pct(p.confidence),
            spread: format_spread(p),
        })
        .collect()
}

fn format_pct(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

/// "Alabama -5.3" style: the favourite gives points. Zero edge reads "PK".
fn format_spread(p: &Prediction) -> String {
    let s = p.spread_estimate;
    if s.abs() < 0.05 {
        "PK".to_string()
    } else if s > 0.0 {
        format!("{} -{:.1}", p.home_team, s)
    } else {
        format!("{} -{:.1}", p.away_team, -s)
    }
}

/// Fixed-width table with a header line.
pub fn render_table(predictions: &[Prediction]) -> String {
    let rows = build_rows(predictions);
    let w_matchup = rows.iter().map(|r| r.matchup.len()).max().unwrap_or(0).max("MATCHUP".len());
    let w_winner = rows.iter().map(|r| r.winner.len()).max().unwrap_or(0).max("PICK".len());
    let w_spread = rows.iter().map(|r| r.spread.len()).max().unwrap_or(0).max("SPREAD".len());

    let mut out = format!(
        "{:<w_matchup$}  {:<w_winner$}  {:>7}  {:>7}  {:>7}  {:<w_spread$}\n",
        "MATCHUP", "PICK", "HOME", "AWAY", "CONF", "SPREAD",
    );
    for r in &rows {
        out.push_str(&format!(
            "{:<w_matchup$}  {:<w_winner$}  {:>7}  {:>7}  {:>7}  {:<w_spread$}\n",
            r.matchup, r.winner, r.home_pct, r.away_pct, r.confidence, r.spread,
        ));
    }
    out
}

pub fn render_json(predictions: &[Prediction]) -> Result<String> {
    serde_json::to_string_pretty(predictions).context("failed to serialize predictions")
}

/// Multi-line summary of one team's statistics and strength score.
pub fn render_team(name: &str, stats: &TeamStatistics, known: bool) -> String {
    let origin = if known { "loaded" } else { "default (team not in stats source)" };
    format!(
        "{name} [{conf}] - {origin}\n\
         \x20 strength          {strength:>7.2}\n\
         \x20 ranks  off/def/eff/adv  {off}/{def}/{eff}/{adv}\n\
         \x20 offense  ppp {ppp:.3}  ypp {ypp:.1}  cmp {cmp:.1}%  3rd {td:.1}%  rz {rz:.1}%\n\
         \x20 defense  ppp {oppp:.3}  ypp {oypp:.1}  cmp {ocmp:.1}%  3rd {otd:.1}%  rz {orz:.1}%\n",
        conf = stats.conference,
        strength = team_strength(stats),
        off = stats.offensive_rating,
        def = stats.defensive_rating,
        eff = stats.efficiency_rating,
        adv = stats.advanced_rating,
        ppp = stats.points_per_play,
        ypp = stats.yards_per_play,
        cmp = stats.completion_rate * 100.0,
        td = stats.third_down_rate * 100.0,
        rz = stats.red_zone_rate * 100.0,
        oppp = stats.opp_points_per_play,
        oypp = stats.opp_yards_per_play,
        ocmp = stats.opp_completion_rate * 100.0,
        otd = stats.opp_third_down_rate * 100.0,
        orz = stats.opp_red_zone_rate * 100.0,
    )
}
