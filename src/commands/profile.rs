use anyhow::Result;

use lathe::catalog::Complexity;
use lathe::recommend::{SkillLevel, UserProfile};

pub fn show() -> Result<()> {
    let profile = UserProfile::load()?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

/// Update only the fields the user passed; everything else keeps its value.
pub fn set(
    languages: Option<Vec<String>>,
    frameworks: Option<Vec<String>>,
    complexity: Option<&str>,
    skill: Option<&str>,
) -> Result<()> {
    let mut profile = UserProfile::load()?;

    if let Some(languages) = languages {
        profile.preferred_languages = languages;
    }
    if let Some(frameworks) = frameworks {
        profile.preferred_frameworks = frameworks;
    }
    if let Some(complexity) = complexity {
        profile.complexity_preference = Complexity::parse(complexity)
            .ok_or_else(|| anyhow::anyhow!("Unknown complexity '{}': use simple, medium, or complex", complexity))?;
    }
    if let Some(skill) = skill {
        profile.skill_level = SkillLevel::parse(skill)
            .ok_or_else(|| anyhow::anyhow!("Unknown skill level '{}': use beginner, intermediate, or advanced", skill))?;
    }

    profile.save()?;
    println!("✓ Profile updated");

    Ok(())
}
