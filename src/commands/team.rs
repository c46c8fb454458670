use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use lathe::catalog::Catalog;
use lathe::team::TeamCatalog;

fn project_root() -> Result<std::path::PathBuf> {
    std::env::current_dir().context("Failed to resolve current directory")
}

pub fn add(template_name: &str) -> Result<()> {
    let root = project_root()?;
    let catalog = Catalog::load()?;
    let template = catalog.get(template_name)?.clone();

    let mut team = TeamCatalog::load(&root)?;
    team.add(template);
    team.save(&root)?;

    println!("✓ Added '{}' to the team catalog", template_name);

    Ok(())
}

pub fn remove(template_name: &str) -> Result<()> {
    let root = project_root()?;
    let mut team = TeamCatalog::load(&root)?;
    team.remove(template_name)?;
    team.save(&root)?;

    println!("✓ Removed '{}' from the team catalog", template_name);

    Ok(())
}

pub fn list() -> Result<()> {
    let root = project_root()?;
    let team = TeamCatalog::load(&root)?;

    if team.is_empty() {
        println!("The team catalog is empty. Add with 'lathe team add <template>'.");
        return Ok(());
    }

    println!("👥 {} team template(s):\n", team.len());
    for template in team.list() {
        println!(
            "  {}  {} [{}]",
            template.name.bold(),
            template.description,
            template.language
        );
    }

    Ok(())
}

pub fn export(path: &Path) -> Result<()> {
    let root = project_root()?;
    let team = TeamCatalog::load(&root)?;
    team.export(path)?;

    println!("📤 Exported {} template(s) to {}", team.len(), path.display());

    Ok(())
}

pub fn import(path: &Path) -> Result<()> {
    let root = project_root()?;
    let mut team = TeamCatalog::load(&root)?;
    let imported = team.import(path)?;
    team.save(&root)?;

    println!("📥 Imported {} template(s) from {}", imported, path.display());

    Ok(())
}
