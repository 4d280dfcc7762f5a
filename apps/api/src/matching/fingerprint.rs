use sha2::{Digest, Sha256};

use crate::matching::profile::{JobRequirement, ResumeProfile};
use crate::matching::vocabulary::SkillVocabulary;
use crate::matching::weights::MatchWeights;

/// SHA-256 over every input the sub-scores read, plus the blend weights and
/// vocabulary. Fields are NUL-separated and absent text hashes differently
/// from empty text.
///
/// The injected `BackgroundScorer` is opaque and not covered: swapping it
/// needs an explicit recompute.
pub fn input_fingerprint(
    profile: &ResumeProfile,
    job: &JobRequirement,
    weights: &MatchWeights,
    vocabulary: &SkillVocabulary,
) -> String {
    let mut hasher = Sha256::new();
    update_optional(&mut hasher, profile.resume_text());
    update_optional(&mut hasher, job.description());
    for service in job.required_services() {
        hasher.update(service.as_bytes());
        hasher.update([0u8]);
    }
    hasher.update([0u8]);
    for weight in [weights.skills, weights.experience, weights.education, weights.keyword] {
        hasher.update(weight.to_le_bytes());
    }
    for skill in vocabulary.iter() {
        hasher.update(skill.as_bytes());
        hasher.update([0u8]);
    }
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

fn update_optional(hasher: &mut Sha256, value: Option<&str>) {
    match value {
        Some(v) => {
            hasher.update([1u8]);
            hasher.update(v.as_bytes());
        }
        None => hasher.update([0u8]),
    }
    hasher.update([0u8]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn fp(resume: Option<&str>, description: Option<&str>, services: &[&str]) -> String {
        fp_with(resume, description, services, &MatchWeights::default(), &SkillVocabulary::default())
    }

    fn fp_with(
        resume: Option<&str>,
        description: Option<&str>,
        services: &[&str],
        weights: &MatchWeights,
        vocab: &SkillVocabulary,
    ) -> String {
        let profile = ResumeProfile::new(Uuid::nil(), resume.map(str::to_string), vocab);
        let job = JobRequirement::new(
            Uuid::nil(),
            description.map(str::to_string),
            services.iter().map(|s| s.to_string()).collect(),
        );
        input_fingerprint(&profile, &job, weights, vocab)
    }

    #[test]
    fn test_stable_for_same_inputs() {
        assert_eq!(fp(Some("ec2"), Some("job"), &["EC2"]), fp(Some("ec2"), Some("job"), &["EC2"]));
    }

    #[test]
    fn test_changes_with_resume_text() {
        assert_ne!(fp(Some("ec2"), Some("job"), &[]), fp(Some("s3"), Some("job"), &[]));
    }

    #[test]
    fn test_changes_with_services() {
        assert_ne!(fp(Some("ec2"), Some("job"), &["EC2"]), fp(Some("ec2"), Some("job"), &["S3"]));
    }

    #[test]
    fn test_field_boundaries_are_unambiguous() {
        assert_ne!(fp(Some("ab"), Some("c"), &[]), fp(Some("a"), Some("bc"), &[]));
    }

    #[test]
    fn test_changes_with_weights() {
        let reweighted = MatchWeights {
            skills: 0.25,
            experience: 0.25,
            education: 0.25,
            keyword: 0.25,
        };
        let vocab = SkillVocabulary::default();
        assert_ne!(
            fp(Some("ec2"), Some("job"), &[]),
            fp_with(Some("ec2"), Some("job"), &[], &reweighted, &vocab)
        );
    }

    #[test]
    fn test_changes_with_vocabulary() {
        let narrow = SkillVocabulary::new(["ec2"]);
        assert_ne!(
            fp(Some("ec2"), Some("job"), &[]),
            fp_with(Some("ec2"), Some("job"), &[], &MatchWeights::default(), &narrow)
        );
    }

    #[test]
    fn test_prefixed_hex_digest() {
        let digest = fp(None, None, &[]);
        assert!(digest.starts_with("sha256:"));
        assert_eq!(digest.len(), "sha256:".len() + 64);
    }
}
