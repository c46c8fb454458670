use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use lathe::catalog::Catalog;
use lathe::paths;

#[derive(Serialize)]
struct HealthCheck {
    status: String, // "healthy" or "critical"
    files: Vec<FileStatus>,
    catalog_templates: usize,
}

impl HealthCheck {
    fn healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[derive(Serialize)]
struct FileStatus {
    path: PathBuf,
    exists: bool,
    parses: bool,
}

enum Format {
    Json,
    Toml,
}

/// Probe every data file under `~/.lathe/` and the catalog. Returns a
/// non-zero exit code when any present file fails to parse.
pub fn execute(json_output: bool) -> Result<i32> {
    let health = run_checks(default_checks());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&health)?);
    } else {
        println!("🏥 lathe doctor\n");
        for file in &health.files {
            let marker = if !file.exists {
                "·".dimmed()
            } else if file.parses {
                "✓".green()
            } else {
                "✗".red()
            };
            let note = if !file.exists {
                " (absent, defaults apply)"
            } else if file.parses {
                ""
            } else {
                " (corrupt)"
            };
            println!("  {} {}{}", marker, file.path.display(), note);
        }
        println!("\n  catalog: {} template(s)", health.catalog_templates);
        println!("\nStatus: {}", health.status);
    }

    Ok(if health.healthy() { 0 } else { 1 })
}

fn default_checks() -> Vec<(PathBuf, Format)> {
    vec![
        (paths::config_path(), Format::Toml),
        (paths::profile_path(), Format::Json),
        (paths::history_path(), Format::Json),
        (paths::installed_templates_path(), Format::Json),
        (paths::marketplace_path(), Format::Json),
        (paths::cache_store_path(), Format::Json),
    ]
}

fn run_checks(checks: Vec<(PathBuf, Format)>) -> HealthCheck {
    let mut files = Vec::new();
    for (path, format) in checks {
        let exists = path.exists();
        let parses = !exists || file_parses(&path, &format);
        files.push(FileStatus {
            path,
            exists,
            parses,
        });
    }

    let catalog_templates = Catalog::load().map(|c| c.len()).unwrap_or(0);
    let healthy = files.iter().all(|f| f.parses);

    HealthCheck {
        status: if healthy { "healthy" } else { "critical" }.to_string(),
        files,
        catalog_templates,
    }
}

fn file_parses(path: &Path, format: &Format) -> bool {
    let Ok(content) = fs::read_to_string(path) else {
        return false;
    };
    match format {
        Format::Json => serde_json::from_str::<serde_json::Value>(&content).is_ok(),
        Format::Toml => content.parse::<toml::Table>().is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absent_files_are_healthy() {
        let temp_dir = TempDir::new().unwrap();
        let health = run_checks(vec![(temp_dir.path().join("profile.json"), Format::Json)]);

        assert!(health.healthy());
        assert!(!health.files[0].exists);
        assert!(health.files[0].parses);
    }

    #[test]
    fn test_corrupt_json_store_is_critical() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join("marketplace.json");
        fs::write(&store_path, "[ { broken").unwrap();

        let health = run_checks(vec![(store_path, Format::Json)]);

        assert_eq!(health.status, "critical");
        assert!(!health.files[0].parses);
    }

    #[test]
    fn test_corrupt_toml_config_is_critical() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "author = = \"nic\"").unwrap();

        let health = run_checks(vec![(config_path, Format::Toml)]);
        assert!(!health.healthy());
    }

    #[test]
    fn test_valid_files_stay_healthy() {
        let temp_dir = TempDir::new().unwrap();
        let json_path = temp_dir.path().join("history.json");
        let toml_path = temp_dir.path().join("config.toml");
        fs::write(&json_path, "{\"records\": []}").unwrap();
        fs::write(&toml_path, "author = \"nic\"").unwrap();

        let health = run_checks(vec![(json_path, Format::Json), (toml_path, Format::Toml)]);
        assert!(health.healthy());
        assert!(health.files.iter().all(|f| f.exists && f.parses));
    }
}
