//! Single source of truth for ALL lathe filesystem layout.
//!
//! This module defines WHERE data lives. It has no I/O, no validation,
//! no business logic. One file shows the entire filesystem layout.
//!
//! # User-Level Paths (~/.lathe/)
//!
//! ```text
//! ~/.lathe/
//! ├── config.toml          # Global config
//! ├── profile.json         # User preference profile
//! ├── history.json         # Template usage history
//! ├── templates.json       # Installed (marketplace/team) templates
//! ├── marketplace.json     # Local marketplace catalog
//! └── cache/
//!     └── entries.json     # TTL cache store (rebuildable)
//! ```
//!
//! # Project-Level Paths (project/.lathe/)
//!
//! ```text
//! project/.lathe/
//! ├── project.json         # Generated-project manifest
//! └── team.json            # Team template catalog (committable)
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// User Level (~/.lathe/)
// =============================================================================

/// User's lathe home directory: `~/.lathe/`
pub fn lathe_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".lathe")
}

/// Global config file: `~/.lathe/config.toml`
pub fn config_path() -> PathBuf {
    lathe_home().join("config.toml")
}

/// User preference profile: `~/.lathe/profile.json`
pub fn profile_path() -> PathBuf {
    lathe_home().join("profile.json")
}

/// Template usage history: `~/.lathe/history.json`
pub fn history_path() -> PathBuf {
    lathe_home().join("history.json")
}

/// Installed templates (from marketplace or team imports): `~/.lathe/templates.json`
pub fn installed_templates_path() -> PathBuf {
    lathe_home().join("templates.json")
}

/// Local marketplace catalog: `~/.lathe/marketplace.json`
pub fn marketplace_path() -> PathBuf {
    lathe_home().join("marketplace.json")
}

/// Cache directory for rebuildable data: `~/.lathe/cache/`
pub fn cache_dir() -> PathBuf {
    lathe_home().join("cache")
}

/// Cache store: `~/.lathe/cache/entries.json`
pub fn cache_store_path() -> PathBuf {
    cache_dir().join("entries.json")
}

// =============================================================================
// Project Level (project/.lathe/)
// =============================================================================

/// Project-level paths, relative to a generated project root.
pub mod project {
    use super::*;

    /// Project's lathe directory: `.lathe/`
    pub fn lathe_dir(root: &Path) -> PathBuf {
        root.join(".lathe")
    }

    /// Generated-project manifest: `.lathe/project.json`
    pub fn manifest_path(root: &Path) -> PathBuf {
        root.join(".lathe/project.json")
    }

    /// Team template catalog: `.lathe/team.json`
    pub fn team_path(root: &Path) -> PathBuf {
        root.join(".lathe/team.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lathe_home() {
        let home = lathe_home();
        assert!(home.ends_with(".lathe"));
    }

    #[test]
    fn test_user_paths_live_under_home() {
        for path in [
            config_path(),
            profile_path(),
            history_path(),
            installed_templates_path(),
            marketplace_path(),
            cache_store_path(),
        ] {
            assert!(path.starts_with(lathe_home()));
        }
    }

    #[test]
    fn test_cache_store_in_cache_dir() {
        assert!(cache_store_path().starts_with(cache_dir()));
    }

    #[test]
    fn test_project_paths() {
        let root = Path::new("/tmp/test-project");

        assert_eq!(
            project::lathe_dir(root),
            PathBuf::from("/tmp/test-project/.lathe")
        );
        assert_eq!(
            project::manifest_path(root),
            PathBuf::from("/tmp/test-project/.lathe/project.json")
        );
        assert_eq!(
            project::team_path(root),
            PathBuf::from("/tmp/test-project/.lathe/team.json")
        );
    }
}
