use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: Option<String>,
    /// Required AWS services as authored on the posting.
    pub aws_services: Vec<String>,
    pub created_at: DateTime<Utc>,
}
