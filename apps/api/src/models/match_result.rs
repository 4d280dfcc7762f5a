use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted score for one (user, job) pair. Never updated in place; a
/// recomputation replaces the whole row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MatchResult {
    pub user_id: Uuid,
    pub job_id: Uuid,
    pub overall: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keyword: f64,
    /// SHA-256 of the resume/job inputs this result was computed from.
    pub fingerprint: String,
    pub computed_at: DateTime<Utc>,
}
