use std::sync::Arc;

use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::models::plan::PlanCatalog;
use crate::providers::SummaryProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Redis client used to drop cached summary list/detail views after writes.
    pub redis: RedisClient,
    /// Shared HTTP client for PDF fetches.
    pub http: reqwest::Client,
    /// Preferred summarization backend, tried first on every run.
    pub primary: Arc<dyn SummaryProvider>,
    /// Fallback backend, called exactly once if the primary fails.
    pub secondary: Arc<dyn SummaryProvider>,
    /// Pricing plans resolved from config at startup.
    pub plans: Arc<PlanCatalog>,
}
