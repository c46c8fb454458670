//! Template recommendation scoring.
//!
//! Hand-tuned weighted scoring: language and framework preference dominate,
//! complexity fit and skill compatibility refine, past success nudges. The
//! weights are calibration, not a derived model - bigger weight means bigger
//! influence, nothing more.

pub mod history;
pub mod profile;

pub use history::{UsageHistory, UsageRecord};
pub use profile::{SkillLevel, UserProfile};

use serde::Serialize;

use crate::catalog::{Complexity, Template};

const LANGUAGE_WEIGHT: f32 = 0.4;
const FRAMEWORK_WEIGHT: f32 = 0.3;
const COMPLEXITY_WEIGHT: f32 = 0.2;
const SKILL_WEIGHT: f32 = 0.1;
const HISTORY_WEIGHT: f32 = 0.1;

/// Recommendations below this score are discarded
const SCORE_CUTOFF: f32 = 0.3;
/// At most this many recommendations are returned
const MAX_RECOMMENDATIONS: usize = 10;

/// A scored candidate, highest score first
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub template: String,
    pub language: String,
    pub description: String,
    pub score: f32,
}

/// Compatibility multiplier for a complexity tier at a skill level.
///
/// Matching tiers score highest; complex templates are steeply discounted
/// for beginners, simple ones mildly for advanced users.
fn skill_factor(complexity: Complexity, skill: SkillLevel) -> f32 {
    match (skill, complexity) {
        (SkillLevel::Beginner, Complexity::Simple) => 1.0,
        (SkillLevel::Beginner, Complexity::Medium) => 0.6,
        (SkillLevel::Beginner, Complexity::Complex) => 0.2,
        (SkillLevel::Intermediate, Complexity::Simple) => 0.8,
        (SkillLevel::Intermediate, Complexity::Medium) => 1.0,
        (SkillLevel::Intermediate, Complexity::Complex) => 0.7,
        (SkillLevel::Advanced, Complexity::Simple) => 0.5,
        (SkillLevel::Advanced, Complexity::Medium) => 0.9,
        (SkillLevel::Advanced, Complexity::Complex) => 1.0,
    }
}

/// Score one template against a profile and history. Deterministic,
/// always in [0, 1].
pub fn score(profile: &UserProfile, history: &UsageHistory, template: &Template) -> f32 {
    let mut score = 0.0;

    if profile.prefers_language(&template.language) {
        score += LANGUAGE_WEIGHT;
    }

    if template
        .framework
        .as_deref()
        .map_or(false, |f| profile.prefers_framework(f))
    {
        score += FRAMEWORK_WEIGHT;
    }

    if template.complexity == profile.complexity_preference {
        score += COMPLEXITY_WEIGHT;
    }

    score += SKILL_WEIGHT * skill_factor(template.complexity, profile.skill_level);
    score += HISTORY_WEIGHT * history.success_rate(&template.name);

    score.min(1.0)
}

/// Score every candidate, drop those below the cutoff, and return the top
/// candidates sorted by descending score. Ties break by template name so
/// the output is fully deterministic.
pub fn recommend<'a>(
    profile: &UserProfile,
    history: &UsageHistory,
    candidates: impl IntoIterator<Item = &'a Template>,
) -> Vec<Recommendation> {
    let mut scored: Vec<Recommendation> = candidates
        .into_iter()
        .map(|t| Recommendation {
            template: t.name.clone(),
            language: t.language.clone(),
            description: t.description.clone(),
            score: score(profile, history, t),
        })
        .filter(|r| r.score >= SCORE_CUTOFF)
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.template.cmp(&b.template))
    });
    scored.truncate(MAX_RECOMMENDATIONS);
    scored
}
