//! Skill extraction and required-skill coverage scoring.
//!
//! Extraction is plain substring containment against the vocabulary, so short
//! entries can fire inside longer words ("ecs" inside "specs"). Callers that
//! need tokenized matching must not rely on this module for it.

use std::collections::BTreeSet;

use crate::matching::profile::{JobRequirement, ResumeProfile};
use crate::matching::vocabulary::SkillVocabulary;
use crate::matching::{non_empty, MAX_SCORE, NEUTRAL_SCORE};

/// Extracted vocabulary entries. Ordered only so that serialization is stable.
pub type SkillSet = BTreeSet<String>;

/// Returns every vocabulary entry contained in `text` (case-insensitive).
pub fn extract_skills(text: Option<&str>, vocabulary: &SkillVocabulary) -> SkillSet {
    let Some(text) = non_empty(text) else {
        return SkillSet::new();
    };
    let text = text.to_lowercase();

    vocabulary
        .iter()
        .filter(|skill| text.contains(skill))
        .map(str::to_string)
        .collect()
}

/// Share of `required_services` covered by `resume_skills`, 0–100.
///
/// - absent job description → 0
/// - no required services → 50 (no signal)
/// - no resume skills → 0
/// - otherwise a service counts when any resume skill contains it; the ratio
///   is truncated toward zero, not rounded.
pub fn skills_score(
    resume_skills: &SkillSet,
    job_description: Option<&str>,
    required_services: &[String],
) -> f64 {
    if non_empty(job_description).is_none() {
        return 0.0;
    }
    if required_services.is_empty() {
        return NEUTRAL_SCORE;
    }
    if resume_skills.is_empty() {
        return 0.0;
    }

    let matches = required_services
        .iter()
        .filter(|service| {
            let service = service.to_lowercase();
            resume_skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(&service))
        })
        .count();

    let ratio = matches as f64 / required_services.len() as f64;
    (ratio * 100.0).trunc().min(MAX_SCORE)
}

/// Skills sub-score for a profile/job pair. A profile without resume text
/// scores 0 regardless of the job.
pub fn profile_skills_score(profile: &ResumeProfile, job: &JobRequirement) -> f64 {
    if profile.resume_text().is_none() {
        return 0.0;
    }
    skills_score(profile.skills(), job.description(), job.required_services())
}
