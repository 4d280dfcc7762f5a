use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Row in `users`. Only the resume columns are read by the match engine.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub resume_text: Option<String>,
    pub resume_skills: Vec<String>,
    pub resume_updated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
