use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::store::{JobStore, MatchResultStore, UserStore};
use crate::models::job::JobRow;
use crate::models::match_result::MatchResult;
use crate::models::user::UserRow;

/// Postgres-backed stores. `match_results` has `(user_id, job_id)` as its
/// primary key, which is what makes `put_result` first-write-wins.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<UserRow>, AppError> {
        Ok(
            sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn save_resume(
        &self,
        user_id: Uuid,
        resume_text: Option<&str>,
        skills: &[String],
    ) -> Result<Option<UserRow>, AppError> {
        Ok(sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET resume_text = $2, resume_skills = $3, resume_updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(resume_text)
        .bind(skills)
        .fetch_optional(&self.pool)
        .await?)
    }
}

#[async_trait]
impl JobStore for PgStore {
    async fn get_job(&self, job_id: Uuid) -> Result<Option<JobRow>, AppError> {
        Ok(
            sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
                .bind(job_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}

#[async_trait]
impl MatchResultStore for PgStore {
    async fn get_result(
        &self,
        user_id: Uuid,
        job_id: Uuid,
    ) -> Result<Option<MatchResult>, AppError> {
        Ok(sqlx::query_as::<_, MatchResult>(
            "SELECT * FROM match_results WHERE user_id = $1 AND job_id = $2",
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn put_result(&self, result: MatchResult) -> Result<MatchResult, AppError> {
        let inserted = sqlx::query_as::<_, MatchResult>(
            r#"
            INSERT INTO match_results
                (user_id, job_id, overall, skills, experience, education, keyword,
                 fingerprint, computed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (user_id, job_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(result.user_id)
        .bind(result.job_id)
        .bind(result.overall)
        .bind(result.skills)
        .bind(result.experience)
        .bind(result.education)
        .bind(result.keyword)
        .bind(&result.fingerprint)
        .bind(result.computed_at)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = inserted {
            return Ok(row);
        }

        tracing::debug!(
            user_id = %result.user_id,
            job_id = %result.job_id,
            "match result already stored by a concurrent request"
        );
        Ok(sqlx::query_as::<_, MatchResult>(
            "SELECT * FROM match_results WHERE user_id = $1 AND job_id = $2",
        )
        .bind(result.user_id)
        .bind(result.job_id)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn replace_result(&self, result: MatchResult) -> Result<MatchResult, AppError> {
        Ok(sqlx::query_as::<_, MatchResult>(
            r#"
            INSERT INTO match_results
                (user_id, job_id, overall, skills, experience, education, keyword,
                 fingerprint, computed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (user_id, job_id) DO UPDATE SET
                overall = EXCLUDED.overall,
                skills = EXCLUDED.skills,
                experience = EXCLUDED.experience,
                education = EXCLUDED.education,
                keyword = EXCLUDED.keyword,
                fingerprint = EXCLUDED.fingerprint,
                computed_at = EXCLUDED.computed_at
            RETURNING *
            "#,
        )
        .bind(result.user_id)
        .bind(result.job_id)
        .bind(result.overall)
        .bind(result.skills)
        .bind(result.experience)
        .bind(result.education)
        .bind(result.keyword)
        .bind(&result.fingerprint)
        .bind(result.computed_at)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn delete_result(&self, user_id: Uuid, job_id: Uuid) -> Result<bool, AppError> {
        let outcome = sqlx::query("DELETE FROM match_results WHERE user_id = $1 AND job_id = $2")
            .bind(user_id)
            .bind(job_id)
            .execute(&self.pool)
            .await?;
        Ok(outcome.rows_affected() > 0)
    }

    async fn top_results(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> Result<Vec<MatchResult>, AppError> {
        Ok(sqlx::query_as::<_, MatchResult>(
            r#"
            SELECT * FROM match_results
            WHERE user_id = $1
            ORDER BY overall DESC, computed_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?)
    }
}
