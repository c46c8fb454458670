//! Template catalog: built-in entries plus user-installed templates.
//!
//! Builtins are constructed once at startup; installed templates come from
//! `~/.lathe/templates.json` (written by `lathe market install` and
//! `lathe team import`). Installed entries shadow builtins of the same name.

pub mod builtin;
pub mod template;

pub use template::{Complexity, Template, TemplateFile, TemplateStructure};

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;

use crate::paths;

/// In-memory template catalog, keyed by template name.
pub struct Catalog {
    templates: BTreeMap<String, Template>,
}

impl Catalog {
    /// Catalog of built-in templates only
    pub fn builtin() -> Self {
        Self::from_templates(builtin::builtin_templates())
    }

    /// Builtins plus user-installed templates from `~/.lathe/templates.json`
    pub fn load() -> Result<Self> {
        let mut templates = builtin::builtin_templates();
        templates.extend(load_installed()?);
        Ok(Self::from_templates(templates))
    }

    /// Build a catalog from an explicit template list. Later entries with
    /// the same name shadow earlier ones.
    pub fn from_templates(templates: Vec<Template>) -> Self {
        let mut map = BTreeMap::new();
        for template in templates {
            map.insert(template.name.clone(), template);
        }
        Self { templates: map }
    }

    /// All templates, ordered by name
    pub fn all(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    /// Look up a template by name
    pub fn get(&self, name: &str) -> Result<&Template> {
        self.templates
            .get(name)
            .with_context(|| format!("Unknown template: '{}'. Run 'lathe list' to see the catalog.", name))
    }

    /// Filter by project type, language, and/or tag (all case-insensitive)
    pub fn filter(
        &self,
        project_type: Option<&str>,
        language: Option<&str>,
        tag: Option<&str>,
    ) -> Vec<&Template> {
        self.all()
            .filter(|t| {
                project_type.map_or(true, |pt| t.project_type.eq_ignore_ascii_case(pt))
                    && language.map_or(true, |l| t.language.eq_ignore_ascii_case(l))
                    && tag.map_or(true, |tag| t.has_tag(tag))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Read the installed-template store. Missing file means nothing installed.
pub fn load_installed() -> Result<Vec<Template>> {
    let path = paths::installed_templates_path();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read installed templates: {}", path.display()))?;
    let templates = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse installed templates: {}", path.display()))?;

    Ok(templates)
}

/// Write the installed-template store.
pub fn save_installed(templates: &[Template]) -> Result<()> {
    let path = paths::installed_templates_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(&path, serde_json::to_string_pretty(templates)?)
        .with_context(|| format!("Failed to write installed templates: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_lookup() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.get("rust-cli").is_ok());
    }

    #[test]
    fn test_unknown_template_names_the_template() {
        let catalog = Catalog::builtin();
        let err = catalog.get("no-such-thing").unwrap_err();
        assert!(err.to_string().contains("no-such-thing"));
    }

    #[test]
    fn test_filter_by_language_and_type() {
        let catalog = Catalog::builtin();

        let rust = catalog.filter(None, Some("rust"), None);
        assert!(!rust.is_empty());
        assert!(rust.iter().all(|t| t.language == "rust"));

        let apis = catalog.filter(Some("web-api"), None, None);
        assert!(apis.iter().all(|t| t.project_type == "web-api"));

        let rust_apis = catalog.filter(Some("web-api"), Some("rust"), None);
        assert!(rust_apis.len() <= apis.len());
    }

    #[test]
    fn test_installed_shadows_builtin() {
        let mut templates = builtin::builtin_templates();
        let mut shadow = templates[0].clone();
        shadow.description = "overridden".to_string();
        let name = shadow.name.clone();
        templates.push(shadow);

        let catalog = Catalog::from_templates(templates);
        assert_eq!(catalog.get(&name).unwrap().description, "overridden");
    }
}
