//! Quota Gate — compares a user's upload count against their plan-derived
//! limit before a pipeline run is admitted.
//!
//! The check is point-in-time with no locking: two concurrent uploads from
//! one user can both observe `used < limit` and both be admitted. That
//! one-request overshoot is accepted for this soft quota.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::plan::PlanCatalog;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct QuotaStatus {
    pub admitted: bool,
    pub used: i64,
    pub limit: i64,
    pub plan_id: &'static str,
    pub plan_name: &'static str,
}

/// Computes the user's current usage and plan-derived limit.
/// `used` counts existing summary rows; the tier comes from the active
/// subscription's price id for the account email, defaulting to free.
pub async fn check_quota(
    db: &PgPool,
    plans: &PlanCatalog,
    user_id: &str,
    email: &str,
) -> Result<QuotaStatus, sqlx::Error> {
    let used = upload_count(db, user_id).await?;
    let price_id = active_price_id(db, email).await?;
    let plan = plans.resolve(price_id.as_deref());

    Ok(QuotaStatus {
        admitted: admits(used, plan.upload_limit),
        used,
        limit: plan.upload_limit,
        plan_id: plan.id,
        plan_name: plan.name,
    })
}

fn admits(used: i64, limit: i64) -> bool {
    used < limit
}

async fn upload_count(db: &PgPool, user_id: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pdf_summaries WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(db)
        .await
}

/// Price id of the most recently updated active subscription, if any.
async fn active_price_id(db: &PgPool, email: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT price_id FROM users
        WHERE email = $1 AND status = 'active' AND price_id IS NOT NULL
        ORDER BY updated_at DESC
        LIMIT 1
        "#,
    )
    .bind(email)
    .fetch_optional(db)
    .await
}

// ────────────────────────────────────────────────────────────────────────────
// Plan/quota endpoint
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    pub user_id: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan_id: &'static str,
    pub plan: &'static str,
    pub used: i64,
    pub limit: i64,
    pub has_reached_limit: bool,
}

/// GET /api/v1/plan?user_id=&email=
///
/// Current plan name plus quota usage, as shown on the dashboard.
pub async fn handle_get_plan(
    State(state): State<AppState>,
    Query(params): Query<PlanQuery>,
) -> Result<Json<PlanResponse>, AppError> {
    if params.user_id.trim().is_empty() {
        return Err(AppError::Unauthorized);
    }

    let quota = check_quota(&state.db, &state.plans, &params.user_id, &params.email).await?;

    Ok(Json(PlanResponse {
        plan_id: quota.plan_id,
        plan: quota.plan_name,
        used: quota.used,
        limit: quota.limit,
        has_reached_limit: !quota.admitted,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_limit_is_rejected() {
        assert!(!admits(5, 5));
    }

    #[test]
    fn test_below_limit_is_admitted() {
        assert!(admits(4, 5));
    }

    #[test]
    fn test_over_limit_is_rejected() {
        // Possible after a soft-quota overshoot; must still be rejected.
        assert!(!admits(6, 5));
    }

    #[test]
    fn test_zero_usage_is_admitted_on_any_plan() {
        assert!(admits(0, 5));
        assert!(admits(0, 1000));
    }

    #[test]
    fn test_pro_limit_admits_heavy_usage() {
        assert!(admits(999, 1000));
        assert!(!admits(1000, 1000));
    }
}
