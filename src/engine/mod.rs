pub mod noise;
pub mod stats;
pub mod strength;
pub mod win_prob;

pub use stats::{StatsTable, TeamStatistics};
pub use win_prob::{Prediction, PredictionStrategy, Predictor};
