//! Experience and education sub-scores.
//!
//! Neither dimension is analysed yet: `FixedBackgroundScorer` returns the same
//! constants for every pair. Swap in another `BackgroundScorer` through
//! `MatchConfig` to replace them without touching the engine.

use crate::matching::profile::{JobRequirement, ResumeProfile};

pub const DEFAULT_EXPERIENCE_SCORE: f64 = 70.0;
pub const DEFAULT_EDUCATION_SCORE: f64 = 65.0;

pub trait BackgroundScorer: Send + Sync {
    fn experience_score(&self, profile: &ResumeProfile, job: &JobRequirement) -> f64;
    fn education_score(&self, profile: &ResumeProfile, job: &JobRequirement) -> f64;
}

/// Returns configured constants regardless of input.
#[derive(Debug, Clone, Copy)]
pub struct FixedBackgroundScorer {
    pub experience: f64,
    pub education: f64,
}

impl Default for FixedBackgroundScorer {
    fn default() -> Self {
        Self {
            experience: DEFAULT_EXPERIENCE_SCORE,
            education: DEFAULT_EDUCATION_SCORE,
        }
    }
}

impl BackgroundScorer for FixedBackgroundScorer {
    fn experience_score(&self, _profile: &ResumeProfile, _job: &JobRequirement) -> f64 {
        self.experience
    }

    fn education_score(&self, _profile: &ResumeProfile, _job: &JobRequirement) -> f64 {
        self.education
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::vocabulary::SkillVocabulary;
    use uuid::Uuid;

    fn pair(resume: Option<&str>) -> (ResumeProfile, JobRequirement) {
        let vocab = SkillVocabulary::default();
        (
            ResumeProfile::new(Uuid::new_v4(), resume.map(str::to_string), &vocab),
            JobRequirement::new(Uuid::new_v4(), Some("Cloud".to_string()), vec![]),
        )
    }

    #[test]
    fn test_defaults_ignore_input() {
        let scorer = FixedBackgroundScorer::default();
        for resume in [None, Some("10 years of AWS")] {
            let (profile, job) = pair(resume);
            assert_eq!(scorer.experience_score(&profile, &job), 70.0);
            assert_eq!(scorer.education_score(&profile, &job), 65.0);
        }
    }

    #[test]
    fn test_overridden_constants() {
        let scorer = FixedBackgroundScorer {
            experience: 10.0,
            education: 20.0,
        };
        let (profile, job) = pair(None);
        assert_eq!(scorer.experience_score(&profile, &job), 10.0);
        assert_eq!(scorer.education_score(&profile, &job), 20.0);
    }
}
