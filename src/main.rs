mod cli;

use anyhow::Result;
use cfb_predictor::config::{Config, LoggingConfig, StatsConfig};
use cfb_predictor::engine::strength::team_strength;
use cfb_predictor::engine::{PredictionStrategy, Predictor, StatsTable};
use cfb_predictor::feed;
use cfb_predictor::report;
use cfb_predictor::slate::{predict_slate, Slate};
use clap::Parser;
use cli::{Cli, Commands};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    match logging.open_log_file()? {
        Some(log_file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(log_file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Load the stats snapshot from `location`, if one is configured.
/// A failed load is logged and reported as `None`.
async fn load_stats(location: Option<&str>, stats_config: &StatsConfig) -> Option<StatsTable> {
    let Some(location) = location else {
        tracing::warn!("no stats source configured");
        return None;
    };
    let source = feed::source_for(location, stats_config.request_timeout_ms, stats_config.max_retries);
    match source.fetch_table().await {
        Ok(table) => {
            tracing::debug!(
                source = table.source(),
                teams = table.len(),
                loaded_at = %table.loaded_at(),
                "stats snapshot ready"
            );
            Some(table)
        }
        Err(e) => {
            tracing::warn!(source = %source.describe(), error = %format!("{e:#}"), "failed to load stats");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(&cli.config)?;
    init_logging(&config.logging)?;

    let requested = if cli.simple {
        PredictionStrategy::Simple
    } else {
        config.model.strategy
    };

    let location = cli.stats.as_deref().or(config.stats.location());
    let needs_stats = requested == PredictionStrategy::Statistics || matches!(cli.command, Commands::Team { .. });
    let stats = if needs_stats {
        load_stats(location, &config.stats).await
    } else {
        None
    };

    // Without statistics the simple model is the only meaningful one.
    let strategy = match (&stats, requested) {
        (None, PredictionStrategy::Statistics) => {
            tracing::warn!("statistics unavailable, falling back to simple model");
            PredictionStrategy::Simple
        }
        (_, s) => s,
    };
    let predictor = match stats {
        Some(table) => Predictor::with_stats(table, strategy),
        None => Predictor::new(strategy),
    };
    tracing::info!(%strategy, teams = predictor.stats().len(), "predictor ready");

    match cli.command {
        Commands::Predict { home, away, week } => {
            for name in [&home, &away] {
                if strategy == PredictionStrategy::Statistics && !predictor.stats().contains(name) {
                    tracing::warn!(team = %name, "team not in stats source, using defaults");
                }
            }
            let prediction = predictor.predict(&home, &away, week);
            print_predictions(&[prediction], cli.json)?;
        }
        Commands::Slate { file } => {
            let slate = Slate::load(&file)?;
            tracing::info!(games = slate.games.len(), week = slate.week, "predicting slate");
            let predictions = predict_slate(&slate, &predictor);
            print_predictions(&predictions, cli.json)?;
        }
        Commands::Team { name } => {
            let known = predictor.stats().contains(&name);
            if !known {
                let similar = predictor.stats().similar_names(&name);
                tracing::warn!(team = %name, ?similar, "team not in stats source, showing defaults");
            }
            let stats = predictor.stats().get_or_default(&name);
            if cli.json {
                let value = serde_json::json!({
                    "name": name,
                    "known": known,
                    "strength": team_strength(&stats),
                    "stats": stats,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print!("{}", report::render_team(&name, &stats, known));
            }
        }
    }

    Ok(())
}

fn print_predictions(predictions: &[cfb_predictor::engine::Prediction], json: bool) -> Result<()> {
    if json {
        println!("{}", report::render_json(predictions)?);
    } else {
        print!("{}", report::render_table(predictions));
    }
    Ok(())
}
