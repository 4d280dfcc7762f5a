use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Blend weights for the overall score. Must sum to 1.0 so that the blend of
/// 0–100 sub-scores stays within 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keyword: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.4,
            experience: 0.3,
            education: 0.15,
            keyword: 0.15,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.keyword
    }

    pub fn validate(self) -> Result<Self> {
        let all = [self.skills, self.experience, self.education, self.keyword];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            bail!("match weights must be finite and non-negative: {self:?}");
        }
        if (self.sum() - 1.0).abs() > 1e-6 {
            bail!("match weights must sum to 1.0, got {}", self.sum());
        }
        Ok(self)
    }

    /// Parses `skills,experience,education,keyword`.
    pub fn parse(raw: &str) -> Result<Self> {
        let parts = raw
            .split(',')
            .map(|p| {
                p.trim()
                    .parse::<f64>()
                    .with_context(|| format!("invalid weight '{}'", p.trim()))
            })
            .collect::<Result<Vec<_>>>()?;

        let [skills, experience, education, keyword] = parts[..] else {
            bail!("expected 4 comma-separated weights, got {}", parts.len());
        };

        Self {
            skills,
            experience,
            education,
            keyword,
        }
        .validate()
    }

    /// Weighted blend, clamped to 0–100.
    pub fn combine(&self, skills: f64, experience: f64, education: f64, keyword: f64) -> f64 {
        (skills * self.skills
            + experience * self.experience
            + education * self.education
            + keyword * self.keyword)
            .clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((MatchWeights::default().sum() - 1.0).abs() < 1e-9);
        assert!(MatchWeights::default().validate().is_ok());
    }

    #[test]
    fn test_combine_default_blend() {
        let w = MatchWeights::default();
        // 50*0.4 + 70*0.3 + 65*0.15 + 66*0.15 = 20 + 21 + 9.75 + 9.9 = 60.65
        let overall = w.combine(50.0, 70.0, 65.0, 66.0);
        assert!((overall - 60.65).abs() < 1e-9, "overall was {overall}");
    }

    #[test]
    fn test_combine_bounds() {
        let w = MatchWeights::default();
        assert!((w.combine(100.0, 100.0, 100.0, 100.0) - 100.0).abs() < 1e-9);
        assert_eq!(w.combine(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_parse_valid() {
        let w = MatchWeights::parse("0.25, 0.25, 0.25, 0.25").unwrap();
        assert_eq!(w.keyword, 0.25);
    }

    #[test]
    fn test_parse_rejects_bad_sum() {
        assert!(MatchWeights::parse("0.5,0.5,0.5,0.5").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert!(MatchWeights::parse("0.5,0.5").is_err());
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(MatchWeights::parse("1.2,-0.2,0,0").is_err());
    }
}
