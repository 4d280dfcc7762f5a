use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::store::{JobStore, MatchResultStore, UserStore};
use crate::models::job::JobRow;
use crate::models::match_result::MatchResult;
use crate::models::user::UserRow;

/// In-process stores for local runs (`STORAGE_BACKEND=memory`) and tests.
/// Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, UserRow>>,
    jobs: RwLock<HashMap<Uuid, JobRow>>,
    results: RwLock<HashMap<(Uuid, Uuid), MatchResult>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding one demo user and one demo job, for local runs.
    pub async fn with_demo_data() -> Self {
        let store = Self::new();
        let user = store
            .insert_user(
                "demo_user@example.com",
                Some("AWS Certified Solutions Architect. Built serverless APIs with Lambda, API Gateway and DynamoDB; managed EC2 fleets inside a VPC with Terraform."),
            )
            .await;
        let job = store
            .insert_job(
                "Cloud Engineer",
                "Example Corp",
                Some("Design and operate serverless workloads on AWS Lambda and EC2, with infrastructure managed in Terraform."),
                &["Lambda", "EC2", "S3"],
            )
            .await;
        tracing::info!(user_id = %user.id, job_id = %job.id, "Seeded in-memory demo data");
        store
    }

    pub async fn insert_user(&self, email: &str, resume_text: Option<&str>) -> UserRow {
        let row = UserRow {
            id: Uuid::new_v4(),
            email: email.to_string(),
            resume_text: resume_text.map(str::to_string),
            resume_skills: vec![],
            resume_updated_at: resume_text.map(|_| Utc::now()),
            created_at: Utc::now(),
        };
        self.users.write().await.insert(row.id, row.clone());
        row
    }

    pub async fn insert_job(
        &self,
        title: &str,
        company: &str,
        description: Option<&str>,
        aws_services: &[&str],
    ) -> JobRow {
        let row = JobRow {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: company.to_string(),
            description: description.map(str::to_string),
            aws_services: aws_services.iter().map(|s| s.to_string()).collect(),
            created_at: Utc::now(),
        };
        self.jobs.write().await.insert(row.id, row.clone());
        row
    }
}

#[cfg(test)]
impl MemoryStore {
    pub async fn set_job_description(&self, job_id: Uuid, description: Option<&str>) -> bool {
        match self.jobs.write().await.get_mut(&job_id) {
            Some(job) => {
                job.description = description.map(str::to_string);
                true
            }
            None => false,
        }
    }

    pub async fn result_count(&self) -> usize {
        self.results.read().await.len()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<UserRow>, AppError> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }

    async fn save_resume(
        &self,
        user_id: Uuid,
        resume_text: Option<&str>,
        skills: &[String],
    ) -> Result<Option<UserRow>, AppError> {
        let mut users = self.users.write().await;
        let Some(user) = users.get_mut(&user_id) else {
            return Ok(None);
        };
        user.resume_text = resume_text.map(str::to_string);
        user.resume_skills = skills.to_vec();
        user.resume_updated_at = Some(Utc::now());
        Ok(Some(user.clone()))
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn get_job(&self, job_id: Uuid) -> Result<Option<JobRow>, AppError> {
        Ok(self.jobs.read().await.get(&job_id).cloned())
    }
}

#[async_trait]
impl MatchResultStore for MemoryStore {
    async fn get_result(
        &self,
        user_id: Uuid,
        job_id: Uuid,
    ) -> Result<Option<MatchResult>, AppError> {
        Ok(self.results.read().await.get(&(user_id, job_id)).cloned())
    }

    async fn put_result(&self, result: MatchResult) -> Result<MatchResult, AppError> {
        let mut results = self.results.write().await;
        let stored = results
            .entry((result.user_id, result.job_id))
            .or_insert(result);
        Ok(stored.clone())
    }

    async fn replace_result(&self, result: MatchResult) -> Result<MatchResult, AppError> {
        self.results
            .write()
            .await
            .insert((result.user_id, result.job_id), result.clone());
        Ok(result)
    }

    async fn delete_result(&self, user_id: Uuid, job_id: Uuid) -> Result<bool, AppError> {
        Ok(self.results.write().await.remove(&(user_id, job_id)).is_some())
    }

    async fn top_results(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> Result<Vec<MatchResult>, AppError> {
        let mut rows: Vec<MatchResult> = self
            .results
            .read()
            .await
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.overall
                .total_cmp(&a.overall)
                .then_with(|| b.computed_at.cmp(&a.computed_at))
        });
        rows.truncate(limit);
        Ok(rows)
    }
}
