//! Storage seams for the match engine.
//!
//! The engine only depends on these traits; `PgStore` backs them with
//! Postgres and `MemoryStore` with in-process maps.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobRow;
use crate::models::match_result::MatchResult;
use crate::models::user::UserRow;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<UserRow>, AppError>;

    /// Replaces the resume text and its skill tags. `None` if the user does not exist.
    async fn save_resume(
        &self,
        user_id: Uuid,
        resume_text: Option<&str>,
        skills: &[String],
    ) -> Result<Option<UserRow>, AppError>;
}

#[async_trait]
pub trait JobStore: Send + Sync {
    async fn get_job(&self, job_id: Uuid) -> Result<Option<JobRow>, AppError>;
}

#[async_trait]
pub trait MatchResultStore: Send + Sync {
    async fn get_result(&self, user_id: Uuid, job_id: Uuid)
        -> Result<Option<MatchResult>, AppError>;

    /// Inserts unless a result for the pair already exists, and returns the
    /// stored record. A concurrent writer that lost the race gets the winner.
    async fn put_result(&self, result: MatchResult) -> Result<MatchResult, AppError>;

    /// Inserts or overwrites the pair's result.
    async fn replace_result(&self, result: MatchResult) -> Result<MatchResult, AppError>;

    /// `true` if a result was removed.
    async fn delete_result(&self, user_id: Uuid, job_id: Uuid) -> Result<bool, AppError>;

    /// The user's stored results, best overall score first.
    async fn top_results(&self, user_id: Uuid, limit: usize)
        -> Result<Vec<MatchResult>, AppError>;
}
