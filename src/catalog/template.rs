//! Template record types.
//!
//! A template is an immutable catalog entry describing an output file set
//! for a project type/language combination. Entries are created once at
//! startup (builtins) or installed from the marketplace/team catalogs;
//! there is no lifecycle beyond process lifetime.

use serde::{Deserialize, Serialize};

/// Complexity tier of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    /// Parse a tier from a CLI/config string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "simple" => Some(Self::Simple),
            "medium" => Some(Self::Medium),
            "complex" => Some(Self::Complex),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Complex => "complex",
        }
    }
}

/// A single file emitted by a template.
///
/// `content` may contain `{{name}}` placeholders, substituted with the
/// project name at generation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateFile {
    pub path: String,
    pub content: String,
}

/// The declared output tree of a template: folders first, then files,
/// both written in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateStructure {
    pub folders: Vec<String>,
    pub files: Vec<TemplateFile>,
}

/// A catalog entry describing an output file set for a given
/// project type/language combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub description: String,
    /// Project kind: "cli", "web-api", "library", "fullstack", ...
    pub project_type: String,
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_tool: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub complexity: Complexity,
    #[serde(default)]
    pub tags: Vec<String>,
    pub structure: TemplateStructure,
}

impl Template {
    /// Case-insensitive tag match
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Case-insensitive substring match over name, description, and tags.
    /// Used by marketplace search.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_template() -> Template {
        Template {
            name: "rust-cli".to_string(),
            description: "Command-line application in Rust".to_string(),
            project_type: "cli".to_string(),
            language: "rust".to_string(),
            framework: Some("clap".to_string()),
            database: None,
            testing: Some("cargo-test".to_string()),
            build_tool: Some("cargo".to_string()),
            features: vec!["argument parsing".to_string()],
            complexity: Complexity::Simple,
            tags: vec!["rust".to_string(), "CLI".to_string()],
            structure: TemplateStructure::default(),
        }
    }

    #[test]
    fn test_complexity_parse() {
        assert_eq!(Complexity::parse("simple"), Some(Complexity::Simple));
        assert_eq!(Complexity::parse("MEDIUM"), Some(Complexity::Medium));
        assert_eq!(Complexity::parse("complex"), Some(Complexity::Complex));
        assert_eq!(Complexity::parse("extreme"), None);
    }

    #[test]
    fn test_has_tag_case_insensitive() {
        let template = make_template();
        assert!(template.has_tag("cli"));
        assert!(template.has_tag("RUST"));
        assert!(!template.has_tag("python"));
    }

    #[test]
    fn test_matches_query() {
        let template = make_template();
        assert!(template.matches_query("rust"));
        assert!(template.matches_query("Command-line"));
        assert!(template.matches_query("CLI"));
        assert!(!template.matches_query("django"));
    }
}
