//! Axum route handlers for the Summaries API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cache;
use crate::errors::AppError;
use crate::extract::fetch_and_extract_text;
use crate::models::summary::SummaryRow;
use crate::quota::check_quota;
use crate::state::AppState;
use crate::summaries::pipeline::generate_summary;
use crate::summaries::store;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub user_id: String,
    /// Account email; resolves the subscription tier for the quota check.
    #[serde(default)]
    pub email: String,
    pub file_url: String,
    pub file_name: String,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub id: Uuid,
    pub title: String,
    pub summary_text: String,
    pub status: String,
    pub used: i64,
    pub limit: i64,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub file_url: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub user_id: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/summaries
///
/// One full pipeline run: quota gate → text extraction → summary generation
/// with provider fallback → persist → cache invalidation. Stages run
/// sequentially; a failure at any stage aborts the run with no resumption.
pub async fn handle_create_summary(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    if request.user_id.trim().is_empty() {
        return Err(AppError::Unauthorized);
    }
    if request.file_url.trim().is_empty() {
        return Err(AppError::Validation("File URL is required".to_string()));
    }
    if request.file_name.trim().is_empty() {
        return Err(AppError::Validation("File name is required".to_string()));
    }

    // Point-in-time admission check; the soft-quota race across concurrent
    // uploads from one user is accepted.
    let quota = check_quota(&state.db, &state.plans, &request.user_id, &request.email).await?;
    if !quota.admitted {
        return Err(AppError::QuotaExceeded {
            used: quota.used,
            limit: quota.limit,
        });
    }

    let text = fetch_and_extract_text(&state.http, &request.file_url).await?;

    let result = generate_summary(
        state.primary.as_ref(),
        state.secondary.as_ref(),
        &text,
        &request.file_name,
    )
    .await?;

    let id = store::insert_summary(
        &state.db,
        &request.user_id,
        &request.file_url,
        &request.file_name,
        &result,
    )
    .await?;

    cache::invalidate_summary_views(&state.redis, &request.user_id, Some(id)).await;

    Ok(Json(SummarizeResponse {
        id,
        title: result.title,
        summary_text: result.summary_text,
        status: "completed".to_string(),
        used: quota.used + 1,
        limit: quota.limit,
    }))
}

/// POST /api/v1/summaries/extract
///
/// Extraction preview: fetches and decodes the PDF without calling any
/// summarization backend. Does not count against the quota.
pub async fn handle_extract_text(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.file_url.trim().is_empty() {
        return Err(AppError::Validation("File URL is required".to_string()));
    }

    let text = fetch_and_extract_text(&state.http, &request.file_url).await?;
    Ok(Json(ExtractResponse { text }))
}

/// GET /api/v1/summaries?user_id=
pub async fn handle_list_summaries(
    State(state): State<AppState>,
    Query(params): Query<OwnerQuery>,
) -> Result<Json<Vec<SummaryRow>>, AppError> {
    if params.user_id.trim().is_empty() {
        return Err(AppError::Unauthorized);
    }

    let summaries = store::list_summaries(&state.db, &params.user_id).await?;
    Ok(Json(summaries))
}

/// GET /api/v1/summaries/:id?user_id=
pub async fn handle_get_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<OwnerQuery>,
) -> Result<Json<SummaryRow>, AppError> {
    if params.user_id.trim().is_empty() {
        return Err(AppError::Unauthorized);
    }

    let summary = store::get_summary(&state.db, id, &params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Summary {id} not found")))?;

    Ok(Json(summary))
}

/// DELETE /api/v1/summaries/:id?user_id=
pub async fn handle_delete_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<OwnerQuery>,
) -> Result<StatusCode, AppError> {
    if params.user_id.trim().is_empty() {
        return Err(AppError::Unauthorized);
    }

    let deleted = store::delete_summary(&state.db, id, &params.user_id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Summary {id} not found")));
    }

    cache::invalidate_summary_views(&state.redis, &params.user_id, Some(id)).await;

    Ok(StatusCode::NO_CONTENT)
}
