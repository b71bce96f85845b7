use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cfb_predictor::config::DEFAULT_CONFIG_PATH;

#[derive(Parser)]
#[command(name = "cfb-predictor")]
#[command(version)]
#[command(about = "College football game predictor", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Stats document: file path or http(s) URL (overrides config)
    #[arg(long, global = true, env = "CFB_STATS")]
    pub stats: Option<String>,

    /// Use the simple home-field + noise model, ignoring statistics
    #[arg(long, global = true)]
    pub simple: bool,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict a single game
    Predict {
        /// Home team name
        home: String,
        /// Away team name
        away: String,
        /// Week number (seeds the per-game noise)
        #[arg(short, long, default_value_t = 1)]
        week: u32,
    },
    /// Predict every game in a TOML slate file
    Slate {
        /// Slate file path
        file: PathBuf,
    },
    /// Show a team's loaded statistics and strength score
    Team {
        /// Team name
        name: String,
    },
}
