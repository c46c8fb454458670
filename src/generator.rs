//! Project generation: writes a template's declared tree to disk.
//!
//! Writes are sequential and awaited one at a time with no transactional
//! rollback. A failure mid-generation leaves the partially written tree on
//! disk; the error names the path that failed.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Template;
use crate::paths;

/// What a generation run actually wrote, in write order.
///
/// For a given template this matches the declared `TemplateStructure`
/// exactly: same folders, same files, nothing extra.
#[derive(Debug, Serialize)]
pub struct GenerationReport {
    pub project_root: PathBuf,
    pub folders: Vec<String>,
    pub files: Vec<String>,
}

/// Validate a project name: one or more of `[A-Za-z0-9-_]`, nothing else.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        anyhow::bail!("Project name cannot be empty");
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        anyhow::bail!(
            "Invalid project name '{}': character '{}' not allowed (use letters, digits, '-', '_')",
            name,
            bad
        );
    }

    Ok(())
}

/// Generate a project from a template into `target_dir/<name>`.
///
/// Refuses to touch an existing directory. Creates declared folders first,
/// then files, in declaration order, then writes the `.lathe/project.json`
/// manifest.
pub fn generate(template: &Template, name: &str, target_dir: &Path) -> Result<GenerationReport> {
    validate_project_name(name)?;

    let project_root = target_dir.join(name);
    if project_root.exists() {
        anyhow::bail!(
            "Project directory already exists: {}",
            project_root.display()
        );
    }

    fs::create_dir_all(&project_root)
        .with_context(|| format!("Failed to create project directory: {}", project_root.display()))?;

    let mut report = GenerationReport {
        project_root: project_root.clone(),
        folders: Vec::new(),
        files: Vec::new(),
    };

    for folder in &template.structure.folders {
        let path = project_root.join(folder);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create folder: {}", path.display()))?;
        report.folders.push(folder.clone());
    }

    for file in &template.structure.files {
        let path = project_root.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create folder: {}", parent.display()))?;
        }
        fs::write(&path, render(&file.content, name))
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        report.files.push(file.path.clone());
    }

    write_manifest(template, name, &project_root)?;

    Ok(report)
}

/// Substitute placeholders in template file content.
///
/// `{{name}}` is the project name verbatim; `{{name_snake}}` maps hyphens
/// to underscores for identifier positions (crate names, module paths).
fn render(content: &str, name: &str) -> String {
    content
        .replace("{{name_snake}}", &name.replace('-', "_"))
        .replace("{{name}}", name)
}

fn write_manifest(template: &Template, name: &str, project_root: &Path) -> Result<()> {
    let lathe_dir = paths::project::lathe_dir(project_root);
    fs::create_dir_all(&lathe_dir)
        .with_context(|| format!("Failed to create {}", lathe_dir.display()))?;

    let manifest = serde_json::json!({
        "name": name,
        "template": template.name,
        "language": template.language,
        "created": chrono::Utc::now().to_rfc3339(),
        "lathe": env!("CARGO_PKG_VERSION"),
    });

    let manifest_path = paths::project::manifest_path(project_root);
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
        .with_context(|| format!("Failed to write manifest: {}", manifest_path.display()))?;

    Ok(())
}
