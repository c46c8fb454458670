//! Team template catalog, persisted at `<project>/.lathe/team.json`.
//!
//! Project-local so it can be committed and shared through version
//! control. Export/import move templates between teams as plain JSON.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::catalog::Template;
use crate::paths;

#[derive(Debug, Default)]
pub struct TeamCatalog {
    templates: BTreeMap<String, Template>,
}

impl TeamCatalog {
    /// Load the team catalog for a project root; empty when none exists
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::project::team_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read team catalog: {}", path.display()))?;
        let templates: Vec<Template> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse team catalog: {}", path.display()))?;

        Ok(Self::from_templates(templates))
    }

    fn from_templates(templates: Vec<Template>) -> Self {
        let mut map = BTreeMap::new();
        for template in templates {
            map.insert(template.name.clone(), template);
        }
        Self { templates: map }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::project::team_path(root);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let templates: Vec<_> = self.templates.values().collect();
        fs::write(&path, serde_json::to_string_pretty(&templates)?)
            .with_context(|| format!("Failed to write team catalog: {}", path.display()))?;

        Ok(())
    }

    /// Add or replace a template
    pub fn add(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    pub fn remove(&mut self, name: &str) -> Result<Template> {
        self.templates
            .remove(name)
            .with_context(|| format!("Template '{}' not in the team catalog", name))
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// All templates, ordered by name
    pub fn list(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    /// Write the whole catalog to a standalone JSON file
    pub fn export(&self, path: &Path) -> Result<()> {
        let templates: Vec<_> = self.templates.values().collect();
        fs::write(path, serde_json::to_string_pretty(&templates)?)
            .with_context(|| format!("Failed to export team catalog: {}", path.display()))?;
        Ok(())
    }

    /// Merge templates from a standalone JSON file into this catalog.
    /// Imported entries replace same-named existing ones. Returns how many
    /// templates were imported.
    pub fn import(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template file: {}", path.display()))?;
        let templates: Vec<Template> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse template file: {}", path.display()))?;

        let count = templates.len();
        for template in templates {
            self.add(template);
        }
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
