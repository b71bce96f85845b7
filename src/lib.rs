pub mod config;
pub mod engine;
pub mod feed;
pub mod report;
pub mod slate;
