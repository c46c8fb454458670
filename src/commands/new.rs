use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use lathe::catalog::Catalog;
use lathe::generator;
use lathe::recommend::UsageHistory;
use lathe::Config;

/// Generate a project from a template. Every attempt, pass or fail, is
/// recorded in the usage history so the recommender can learn from it.
pub fn execute(name: &str, template_name: &str, dir: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let catalog = Catalog::load()?;
    let template = catalog.get(template_name)?;

    // A corrupt history is an error up front, before anything is written;
    // overwriting it here would destroy the append-only store that
    // 'lathe doctor' is supposed to flag.
    let mut history = UsageHistory::load()?;

    let target_dir = match dir {
        Some(dir) => dir,
        None => match &config.target_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to resolve current directory")?,
        },
    };

    println!("🗜️  Generating '{}' from template '{}'", name, template.name);

    let result = generator::generate(template, name, &target_dir);

    history.record(template_name, result.is_ok());
    let saved = history.save();

    // The generation error takes precedence over a history-save failure
    let report = result?;
    saved?;

    for folder in &report.folders {
        println!("  {} {}/", "✓".green(), folder);
    }
    for file in &report.files {
        println!("  {} {}", "✓".green(), file);
    }

    println!(
        "\n✨ Project '{}' created at {}",
        name.bold(),
        report.project_root.display()
    );
    println!("\nNext steps:");
    println!("  1. cd {}", report.project_root.display());
    println!("  2. read README.md");

    Ok(())
}
