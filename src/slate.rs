//! A week's worth of matchups supplied by the user.
//!
//! ```toml
//! week = 9
//!
//! [[games]]
//! home = "Georgia"
//! away = "Florida"
//!
//! [[games]]
//! home = "Ohio State"
//! away = "Michigan"
//! week = 13        # per-game override
//! ```

use crate::engine::{Prediction, Predictor};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Slate {
    #[serde(default = "default_week")]
    pub week: u32,
    #[serde(default)]
    pub games: Vec<SlateGame>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SlateGame {
    pub home: String,
    pub away: String,
    #[serde(default)]
    pub week: Option<u32>,
}

fn default_week() -> u32 {
    1
}

impl SlateGame {
    pub fn week_or(&self, default: u32) -> u32 {
        self.week.unwrap_or(default)
    }
}

impl Slate {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read slate file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse slate file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let slate: Slate = toml::from_str(content).context("invalid slate TOML")?;
        Ok(slate)
    }
}

/// Predict every game in slate order.
pub fn predict_slate(slate: &Slate, predictor: &Predictor) -> Vec<Prediction> {
    slate
        .games
        .iter()
        .map(|g| predictor.predict(&g.home, &g.away, g.week_or(slate.week)))
        .collect()
}
