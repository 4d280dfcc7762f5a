//! Axum route handlers for the Match API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::profile::ResumeProfile;
use crate::matching::skills::SkillSet;
use crate::models::match_result::MatchResult;
use crate::state::AppState;

const DEFAULT_RECOMMENDATIONS: usize = 3;
const MAX_RECOMMENDATIONS: usize = 50;
const MAX_BATCH_JOBS: usize = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BatchMatchRequest {
    pub user_id: Uuid,
    pub job_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub matches: Vec<MatchResult>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateResumeRequest {
    pub resume_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: SkillSet,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/matches/:user_id/:job_id
///
/// Returns the stored match for the pair, computing it on first request.
pub async fn handle_get_match(
    State(state): State<AppState>,
    Path((user_id, job_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MatchResult>, AppError> {
    let result = state.engine.compute_or_cached(user_id, job_id).await?;
    Ok(Json(result))
}

/// POST /api/v1/matches/:user_id/:job_id/recompute
pub async fn handle_recompute_match(
    State(state): State<AppState>,
    Path((user_id, job_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MatchResult>, AppError> {
    let result = state.engine.recompute(user_id, job_id).await?;
    Ok(Json(result))
}

/// DELETE /api/v1/matches/:user_id/:job_id
pub async fn handle_invalidate_match(
    State(state): State<AppState>,
    Path((user_id, job_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    if state.engine.invalidate(user_id, job_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "No match stored for user {user_id} and job {job_id}"
        )))
    }
}

/// POST /api/v1/matches/batch
///
/// Scores every job of a listing for one user, in request order.
pub async fn handle_batch_matches(
    State(state): State<AppState>,
    Json(request): Json<BatchMatchRequest>,
) -> Result<Json<MatchListResponse>, AppError> {
    if request.job_ids.is_empty() {
        return Err(AppError::Validation("job_ids cannot be empty".to_string()));
    }
    if request.job_ids.len() > MAX_BATCH_JOBS {
        return Err(AppError::Validation(format!(
            "at most {MAX_BATCH_JOBS} job_ids per request"
        )));
    }

    let matches = state
        .engine
        .compute_for_jobs(request.user_id, &request.job_ids)
        .await?;
    Ok(Json(MatchListResponse { matches }))
}

/// GET /api/v1/users/:user_id/recommendations?limit=N
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<MatchListResponse>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_RECOMMENDATIONS);
    if !(1..=MAX_RECOMMENDATIONS).contains(&limit) {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_RECOMMENDATIONS}"
        )));
    }

    let matches = state.engine.top_matches(user_id, limit).await?;
    Ok(Json(MatchListResponse { matches }))
}

/// PUT /api/v1/users/:user_id/resume
///
/// Saves resume text and refreshes the stored skill tags.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<UpdateResumeRequest>,
) -> Result<Json<ResumeProfile>, AppError> {
    let profile = state
        .engine
        .update_resume(user_id, request.resume_text)
        .await?;
    Ok(Json(profile))
}

/// POST /api/v1/skills/extract
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Json<ExtractSkillsResponse> {
    Json(ExtractSkillsResponse {
        skills: state.engine.extract_skills(request.text.as_deref()),
    })
}
