pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::billing;
use crate::quota;
use crate::state::AppState;
use crate::summaries::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Summaries API
        .route(
            "/api/v1/summaries",
            post(handlers::handle_create_summary).get(handlers::handle_list_summaries),
        )
        .route(
            "/api/v1/summaries/extract",
            post(handlers::handle_extract_text),
        )
        .route(
            "/api/v1/summaries/:id",
            get(handlers::handle_get_summary).delete(handlers::handle_delete_summary),
        )
        // Plan / quota status
        .route("/api/v1/plan", get(quota::handle_get_plan))
        // Billing webhooks
        .route(
            "/api/v1/payments/webhook",
            post(billing::handlers::handle_payment_webhook),
        )
        .with_state(state)
}
