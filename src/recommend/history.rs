//! Template usage history, persisted at `~/.lathe/history.json`.
//!
//! Append-only: `lathe new` records one entry per generation attempt.
//! The scorer reads the per-template success fraction from here.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageRecord {
    pub template: String,
    pub succeeded: bool,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsageHistory {
    records: Vec<UsageRecord>,
}

impl UsageHistory {
    /// Load history; empty when none has been recorded yet. A present but
    /// unparseable file is an error, never silently replaced.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::history_path())
    }

    /// Load from an explicit store path (tests use a tempdir)
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read history: {}", path.display()))?;
        let history = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse history: {}", path.display()))?;

        Ok(history)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&paths::history_path())
    }

    /// Save to an explicit store path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write history: {}", path.display()))?;

        Ok(())
    }

    /// Append one usage record for a template
    pub fn record(&mut self, template: &str, succeeded: bool) {
        self.records.push(UsageRecord {
            template: template.to_string(),
            succeeded,
            at: Utc::now(),
        });
    }

    /// Fraction of past uses of this exact template name that succeeded.
    /// 0.0 when the template has never been used.
    pub fn success_rate(&self, template: &str) -> f32 {
        let uses: Vec<_> = self
            .records
            .iter()
            .filter(|r| r.template == template)
            .collect();
        if uses.is_empty() {
            return 0.0;
        }

        let successes = uses.iter().filter(|r| r.succeeded).count();
        successes as f32 / uses.len() as f32
    }

    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
