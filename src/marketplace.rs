//! Local marketplace catalog, persisted at `~/.lathe/marketplace.json`.
//!
//! There is no network backend: publish, search, install, and rate all
//! operate on the local JSON store. Install copies the entry's template
//! into the installed-template store so the catalog picks it up.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::catalog::{self, Template};
use crate::paths;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketplaceEntry {
    pub id: Uuid,
    pub template: Template,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub downloads: u64,
    pub rating_sum: u64,
    pub rating_count: u64,
}

impl MarketplaceEntry {
    /// Mean rating in [1, 5]; None when never rated
    pub fn average_rating(&self) -> Option<f32> {
        if self.rating_count == 0 {
            return None;
        }
        Some(self.rating_sum as f32 / self.rating_count as f32)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Marketplace {
    entries: Vec<MarketplaceEntry>,
}

impl Marketplace {
    /// Load the catalog; a missing store file means an empty catalog,
    /// a present but unparseable one is an error
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::marketplace_path())
    }

    /// Load from an explicit store path (tests use a tempdir)
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read marketplace: {}", path.display()))?;
        let marketplace = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse marketplace: {}", path.display()))?;

        Ok(marketplace)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&paths::marketplace_path())
    }

    /// Save to an explicit store path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write marketplace: {}", path.display()))?;

        Ok(())
    }

    /// Publish a template under an author name. Template names are unique
    /// within the catalog.
    pub fn publish(&mut self, template: Template, author: &str) -> Result<&MarketplaceEntry> {
        if self.get(&template.name).is_some() {
            anyhow::bail!(
                "Template '{}' is already published to the marketplace",
                template.name
            );
        }

        self.entries.push(MarketplaceEntry {
            id: Uuid::new_v4(),
            template,
            author: author.to_string(),
            published_at: Utc::now(),
            downloads: 0,
            rating_sum: 0,
            rating_count: 0,
        });

        Ok(self.entries.last().unwrap())
    }

    pub fn get(&self, name: &str) -> Option<&MarketplaceEntry> {
        self.entries.iter().find(|e| e.template.name == name)
    }

    /// Case-insensitive substring search over name, description, and tags
    pub fn search(&self, query: &str) -> Vec<&MarketplaceEntry> {
        self.entries
            .iter()
            .filter(|e| e.template.matches_query(query))
            .collect()
    }

    /// Copy the named entry's template into the installed-template store
    /// and bump its download count. Returns the installed template.
    pub fn install(&mut self, name: &str) -> Result<Template> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.template.name == name)
            .with_context(|| format!("Template '{}' not found in the marketplace", name))?;

        entry.downloads += 1;
        let template = entry.template.clone();

        let mut installed = catalog::load_installed()?;
        installed.retain(|t| t.name != template.name);
        installed.push(template.clone());
        catalog::save_installed(&installed)?;

        Ok(template)
    }

    /// Record a rating from 1 to 5
    pub fn rate(&mut self, name: &str, rating: u8) -> Result<()> {
        if !(1..=5).contains(&rating) {
            anyhow::bail!("Rating must be between 1 and 5, got {}", rating);
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.template.name == name)
            .with_context(|| format!("Template '{}' not found in the marketplace", name))?;

        entry.rating_sum += rating as u64;
        entry.rating_count += 1;

        Ok(())
    }

    /// All entries sorted by downloads, most downloaded first
    pub fn list(&self) -> Vec<&MarketplaceEntry> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| {
            b.downloads
                .cmp(&a.downloads)
                .then_with(|| a.template.name.cmp(&b.template.name))
        });
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::builtin_templates;
    use tempfile::TempDir;

    fn template(name: &str) -> Template {
        let mut t = builtin_templates().remove(0);
        t.name = name.to_string();
        t
    }

    #[test]
    fn test_publish_rejects_duplicate_name() {
        let mut market = Marketplace::default();
        market.publish(template("mine"), "nic").unwrap();

        let err = market.publish(template("mine"), "other").unwrap_err();
        assert!(err.to_string().contains("already published"));
        assert_eq!(market.len(), 1);
    }

    #[test]
    fn test_search_matches_name_and_tags() {
        let mut market = Marketplace::default();
        market.publish(template("my-cli"), "nic").unwrap();

        assert_eq!(market.search("my-cli").len(), 1);
        assert_eq!(market.search("CLI").len(), 1); // builtin rust-cli tags carry over
        assert!(market.search("nonexistent").is_empty());
    }

    #[test]
    fn test_rate_bounds() {
        let mut market = Marketplace::default();
        market.publish(template("mine"), "nic").unwrap();

        assert!(market.rate("mine", 0).is_err());
        assert!(market.rate("mine", 6).is_err());
        market.rate("mine", 4).unwrap();
        market.rate("mine", 5).unwrap();

        let entry = market.get("mine").unwrap();
        assert_eq!(entry.average_rating(), Some(4.5));
    }

    #[test]
    fn test_rate_unknown_template() {
        let mut market = Marketplace::default();
        let err = market.rate("ghost", 3).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("marketplace.json");

        let mut market = Marketplace::default();
        market.publish(template("mine"), "nic").unwrap();
        market.rate("mine", 4).unwrap();
        market.save_to(&store_path).unwrap();

        let loaded = Marketplace::load_from(&store_path).unwrap();
        assert_eq!(loaded.len(), 1);
        let entry = loaded.get("mine").unwrap();
        assert_eq!(entry.author, "nic");
        assert_eq!(entry.average_rating(), Some(4.0));
    }

    #[test]
    fn test_missing_store_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let market = Marketplace::load_from(&temp_dir.path().join("marketplace.json")).unwrap();
        assert!(market.is_empty());
    }

    #[test]
    fn test_corrupt_store_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("marketplace.json");
        fs::write(&store_path, "[ { broken").unwrap();

        let err = Marketplace::load_from(&store_path).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn test_list_sorted_by_downloads() {
        let mut market = Marketplace::default();
        market.publish(template("a"), "nic").unwrap();
        market.publish(template("b"), "nic").unwrap();
        market.entries[1].downloads = 5;

        let listed = market.list();
        assert_eq!(listed[0].template.name, "b");
        assert_eq!(listed[1].template.name, "a");
    }
}
