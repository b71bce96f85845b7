//! Stats document on disk.

use super::{parse_stats_document, StatsSource};
use crate::engine::stats::StatsTable;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

pub struct FileStatsSource {
    path: PathBuf,
}

impl FileStatsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl StatsSource for FileStatsSource {
    async fn fetch_table(&self) -> Result<StatsTable> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read stats file: {}", self.path.display()))?;
        let table = parse_stats_document(&content, &self.describe())?;
        tracing::info!(path = %self.path.display(), teams = table.len(), "loaded stats file");
        Ok(table)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
