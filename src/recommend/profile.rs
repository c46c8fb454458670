//! User preference profile, persisted at `~/.lathe/profile.json`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::catalog::Complexity;
use crate::paths;

/// Self-reported skill level, used by the scorer's compatibility table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Parse a level from a CLI string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// What the user prefers to work with. Feeds the template scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub preferred_languages: Vec<String>,
    pub preferred_frameworks: Vec<String>,
    pub complexity_preference: Complexity,
    pub skill_level: SkillLevel,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            preferred_languages: Vec::new(),
            preferred_frameworks: Vec::new(),
            complexity_preference: Complexity::Simple,
            skill_level: SkillLevel::Beginner,
        }
    }
}

impl UserProfile {
    /// Load the profile; defaults when no profile has been saved yet
    pub fn load() -> Result<Self> {
        let path = paths::profile_path();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        let profile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse profile: {}", path.display()))?;

        Ok(profile)
    }

    pub fn save(&self) -> Result<()> {
        let path = paths::profile_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&path, serde_json::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write profile: {}", path.display()))?;

        Ok(())
    }

    pub fn prefers_language(&self, language: &str) -> bool {
        self.preferred_languages
            .iter()
            .any(|l| l.eq_ignore_ascii_case(language))
    }

    pub fn prefers_framework(&self, framework: &str) -> bool {
        self.preferred_frameworks
            .iter()
            .any(|f| f.eq_ignore_ascii_case(framework))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_parse() {
        assert_eq!(SkillLevel::parse("beginner"), Some(SkillLevel::Beginner));
        assert_eq!(SkillLevel::parse("ADVANCED"), Some(SkillLevel::Advanced));
        assert_eq!(SkillLevel::parse("wizard"), None);
    }

    #[test]
    fn test_preference_match_is_case_insensitive() {
        let profile = UserProfile {
            preferred_languages: vec!["Rust".to_string()],
            preferred_frameworks: vec!["Axum".to_string()],
            ..Default::default()
        };

        assert!(profile.prefers_language("rust"));
        assert!(profile.prefers_framework("axum"));
        assert!(!profile.prefers_language("go"));
    }
}
