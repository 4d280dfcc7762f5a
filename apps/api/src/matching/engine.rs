//! Match engine — scores a user's resume against a job and memoizes the result
//! per (user, job) pair.
//!
//! `AppState` holds an `Arc<MatchEngine>`; the stores and tunables are injected
//! at construction so tests can substitute both.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::bail;
use chrono::{SubsecRound, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::background::{BackgroundScorer, FixedBackgroundScorer};
use crate::matching::fingerprint::input_fingerprint;
use crate::matching::keyword::keyword_score;
use crate::matching::profile::{JobRequirement, ResumeProfile};
use crate::matching::skills::{extract_skills, profile_skills_score, SkillSet};
use crate::matching::store::{JobStore, MatchResultStore, UserStore};
use crate::matching::vocabulary::SkillVocabulary;
use crate::matching::weights::MatchWeights;
use crate::matching::MAX_SCORE;
use crate::models::match_result::MatchResult;

/// When a stored result is considered stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FreshnessPolicy {
    /// A stored result is returned as-is forever; only an explicit
    /// `invalidate`/`recompute` replaces it.
    #[default]
    Forever,
    /// A stored result is recomputed when the resume text, job description,
    /// required services, weights or vocabulary no longer hash to its
    /// fingerprint.
    Fingerprint,
}

impl FromStr for FreshnessPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forever" => Ok(Self::Forever),
            "fingerprint" => Ok(Self::Fingerprint),
            other => bail!("unknown freshness policy '{other}' (expected forever|fingerprint)"),
        }
    }
}

/// Immutable engine tunables.
#[derive(Clone)]
pub struct MatchConfig {
    pub vocabulary: SkillVocabulary,
    pub weights: MatchWeights,
    pub freshness: FreshnessPolicy,
    pub background: Arc<dyn BackgroundScorer>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            vocabulary: SkillVocabulary::default(),
            weights: MatchWeights::default(),
            freshness: FreshnessPolicy::default(),
            background: Arc::new(FixedBackgroundScorer::default()),
        }
    }
}

pub struct MatchEngine {
    users: Arc<dyn UserStore>,
    jobs: Arc<dyn JobStore>,
    results: Arc<dyn MatchResultStore>,
    config: MatchConfig,
}

impl MatchEngine {
    pub fn new(
        users: Arc<dyn UserStore>,
        jobs: Arc<dyn JobStore>,
        results: Arc<dyn MatchResultStore>,
        config: MatchConfig,
    ) -> Self {
        Self {
            users,
            jobs,
            results,
            config,
        }
    }

    /// Engine over a single backend implementing all three stores.
    pub fn with_store<S>(store: Arc<S>, config: MatchConfig) -> Self
    where
        S: UserStore + JobStore + MatchResultStore + 'static,
    {
        Self::new(store.clone(), store.clone(), store, config)
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn extract_skills(&self, text: Option<&str>) -> SkillSet {
        extract_skills(text, &self.config.vocabulary)
    }

    /// Runs the four matchers and blends them. Pure apart from the timestamp.
    pub fn score(&self, profile: &ResumeProfile, job: &JobRequirement) -> MatchResult {
        let skills = profile_skills_score(profile, job);
        let experience = bounded(self.config.background.experience_score(profile, job));
        let education = bounded(self.config.background.education_score(profile, job));
        let keyword = keyword_score(profile.resume_text(), job.description());
        let overall = self
            .config
            .weights
            .combine(skills, experience, education, keyword);

        MatchResult {
            user_id: profile.user_id(),
            job_id: job.job_id(),
            overall,
            skills,
            experience,
            education,
            keyword,
            fingerprint: self.fingerprint(profile, job),
            // Postgres keeps microseconds; truncate so a re-read is bit-identical.
            computed_at: Utc::now().trunc_subsecs(6),
        }
    }

    fn fingerprint(&self, profile: &ResumeProfile, job: &JobRequirement) -> String {
        input_fingerprint(profile, job, &self.config.weights, &self.config.vocabulary)
    }

    /// Returns the stored result for the pair, computing and persisting it on
    /// first request.
    pub async fn compute_or_cached(
        &self,
        user_id: Uuid,
        job_id: Uuid,
    ) -> Result<MatchResult, AppError> {
        if let Some(existing) = self.results.get_result(user_id, job_id).await? {
            match self.config.freshness {
                FreshnessPolicy::Forever => {
                    debug!(%user_id, %job_id, "match result cache hit");
                    return Ok(existing);
                }
                FreshnessPolicy::Fingerprint => {
                    let (profile, job) = self.load_inputs(user_id, job_id).await?;
                    if self.fingerprint(&profile, &job) == existing.fingerprint {
                        debug!(%user_id, %job_id, "match result cache hit (fingerprint current)");
                        return Ok(existing);
                    }
                    info!(%user_id, %job_id, "inputs changed since last match; recomputing");
                    let result = self.score(&profile, &job);
                    return self.results.replace_result(result).await;
                }
            }
        }

        let (profile, job) = self.load_inputs(user_id, job_id).await?;
        let result = self.results.put_result(self.score(&profile, &job)).await?;
        info!(
            %user_id,
            %job_id,
            overall = result.overall,
            "Created match score {:.2}% for user {user_id} and job {job_id}",
            result.overall
        );
        Ok(result)
    }

    /// Discards any stored result and computes a fresh one.
    pub async fn recompute(&self, user_id: Uuid, job_id: Uuid) -> Result<MatchResult, AppError> {
        let (profile, job) = self.load_inputs(user_id, job_id).await?;
        let result = self.results.replace_result(self.score(&profile, &job)).await?;
        info!(%user_id, %job_id, overall = result.overall, "match result recomputed");
        Ok(result)
    }

    /// Drops the stored result for the pair. The next `compute_or_cached`
    /// computes it again.
    pub async fn invalidate(&self, user_id: Uuid, job_id: Uuid) -> Result<bool, AppError> {
        let removed = self.results.delete_result(user_id, job_id).await?;
        if removed {
            info!(%user_id, %job_id, "match result invalidated");
        }
        Ok(removed)
    }

    /// `compute_or_cached` for every job of a listing, in input order.
    pub async fn compute_for_jobs(
        &self,
        user_id: Uuid,
        job_ids: &[Uuid],
    ) -> Result<Vec<MatchResult>, AppError> {
        let mut results = Vec::with_capacity(job_ids.len());
        for &job_id in job_ids {
            results.push(self.compute_or_cached(user_id, job_id).await?);
        }
        Ok(results)
    }

    /// The user's best stored matches, highest overall first.
    pub async fn top_matches(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> Result<Vec<MatchResult>, AppError> {
        if self.users.get_user(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {user_id} not found")));
        }
        self.results.top_results(user_id, limit).await
    }

    /// Stores new resume text together with its refreshed skill tags.
    pub async fn update_resume(
        &self,
        user_id: Uuid,
        resume_text: Option<String>,
    ) -> Result<ResumeProfile, AppError> {
        let profile = ResumeProfile::new(user_id, resume_text, &self.config.vocabulary);
        let skills: Vec<String> = profile.skills().iter().cloned().collect();

        self.users
            .save_resume(user_id, profile.resume_text(), &skills)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

        info!(%user_id, skill_count = skills.len(), "resume profile updated");
        Ok(profile)
    }

    async fn load_inputs(
        &self,
        user_id: Uuid,
        job_id: Uuid,
    ) -> Result<(ResumeProfile, JobRequirement), AppError> {
        let Some(user) = self.users.get_user(user_id).await? else {
            warn!(%user_id, %job_id, "match requested for unknown user");
            return Err(AppError::NotFound(format!("User {user_id} not found")));
        };
        let Some(job) = self.jobs.get_job(job_id).await? else {
            warn!(%user_id, %job_id, "match requested for unknown job");
            return Err(AppError::NotFound(format!("Job {job_id} not found")));
        };

        Ok((
            ResumeProfile::from_row(user, &self.config.vocabulary),
            JobRequirement::from(job),
        ))
    }
}

/// Injected scorers are not trusted to stay within 0–100.
fn bounded(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, MAX_SCORE)
}
