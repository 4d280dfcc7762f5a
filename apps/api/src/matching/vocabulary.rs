//! Skill vocabulary — the fixed list of canonical skills recognized in free text.

use std::collections::BTreeSet;

/// AWS-focused default vocabulary. Multi-word entries are matched as-is.
pub const DEFAULT_AWS_SKILLS: &[&str] = &[
    "ec2",
    "elastic compute cloud",
    "s3",
    "simple storage service",
    "lambda",
    "serverless",
    "rds",
    "relational database service",
    "dynamodb",
    "vpc",
    "virtual private cloud",
    "iam",
    "identity access management",
    "eks",
    "kubernetes",
    "elastic kubernetes service",
    "ecs",
    "elastic container service",
    "cloudformation",
    "cloudwatch",
    "route53",
    "cloudfront",
    "sqs",
    "sns",
    "step functions",
    "api gateway",
    "aws cli",
    "terraform",
    "ansible",
    "chef",
    "puppet",
    "aws certified",
    "solutions architect",
    "sysops administrator",
    "devops engineer",
    "cloud practitioner",
    "aws security",
    "aws networking",
    "aws storage",
];

/// Immutable set of lower-cased canonical skill strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    /// Builds a vocabulary from arbitrary entries. Entries are lower-cased,
    /// trimmed, de-duplicated; blanks are dropped.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        let skills = entries
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.clone()))
            .collect();
        Self { skills }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_AWS_SKILLS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_has_all_entries() {
        let vocab = SkillVocabulary::default();
        assert_eq!(vocab.len(), DEFAULT_AWS_SKILLS.len());
        assert!(vocab.iter().any(|s| s == "api gateway"));
    }

    #[test]
    fn test_new_normalizes_and_dedups() {
        let vocab = SkillVocabulary::new(["EC2", " ec2 ", "", "Lambda"]);
        let entries: Vec<_> = vocab.iter().collect();
        assert_eq!(entries, vec!["ec2", "lambda"]);
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocab = SkillVocabulary::new(Vec::<String>::new());
        assert!(vocab.is_empty());
    }
}
