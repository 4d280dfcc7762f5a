//! Keyword overlap between resume text and job description.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::matching::{non_empty, MAX_SCORE, NEUTRAL_SCORE};

/// Common words excluded from the overlap comparison.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "to", "of", "in", "on",
    "for", "with", "by", "at", "from",
];

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// Lower-cased word set of `text` with stopwords removed.
pub fn tokenize(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| !STOPWORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Fraction of job-description words that also appear in the resume, 0–100.
///
/// Either text absent → 0. A description with no words left after stopword
/// filtering → 50. The ratio is floored.
pub fn keyword_score(resume_text: Option<&str>, job_description: Option<&str>) -> f64 {
    let (Some(resume_text), Some(job_description)) =
        (non_empty(resume_text), non_empty(job_description))
    else {
        return 0.0;
    };

    let job_words = tokenize(job_description);
    if job_words.is_empty() {
        return NEUTRAL_SCORE;
    }
    let resume_words = tokenize(resume_text);

    let matches = job_words.intersection(&resume_words).count();
    let ratio = matches as f64 / job_words.len() as f64;
    (ratio * 100.0).floor().min(MAX_SCORE)
}
