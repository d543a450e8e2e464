//! Axum route handler for payment-processor webhooks.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::billing::events::{
    BillingEvent, CheckoutSession, SubscriptionEvent, CHECKOUT_COMPLETED, SUBSCRIPTION_DELETED,
};
use crate::billing::store;
use crate::cache;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/payments/webhook
///
/// Applies subscription-affecting events to the `users` table. The payload
/// arrives already verified upstream; unrecognized event types are
/// acknowledged without action so the processor stops retrying them.
pub async fn handle_payment_webhook(
    State(state): State<AppState>,
    Json(event): Json<BillingEvent>,
) -> Result<Json<Value>, AppError> {
    match event.event_type.as_str() {
        CHECKOUT_COMPLETED => {
            let session: CheckoutSession = serde_json::from_value(event.data.object)
                .map_err(|e| AppError::Validation(format!("Malformed checkout session: {e}")))?;

            let (Some(email), Some(price_id)) = (session.email(), session.price_id()) else {
                warn!(
                    "Checkout session {} missing email or price id; skipping",
                    session.id
                );
                return Ok(Json(json!({ "received": true })));
            };

            store::activate_subscription(
                &state.db,
                email,
                session.full_name(),
                session.customer.as_deref(),
                price_id,
            )
            .await?;
            cache::invalidate_plan_view(&state.redis, email).await;

            info!("Subscription activated for {email} on {price_id}");
        }

        SUBSCRIPTION_DELETED => {
            let subscription: SubscriptionEvent = serde_json::from_value(event.data.object)
                .map_err(|e| AppError::Validation(format!("Malformed subscription event: {e}")))?;

            match store::cancel_subscription(&state.db, &subscription.customer).await? {
                Some(email) => {
                    cache::invalidate_plan_view(&state.redis, &email).await;
                    info!("Subscription {} cancelled for {email}", subscription.id);
                }
                None => warn!(
                    "Subscription {} deleted for unknown customer {}",
                    subscription.id, subscription.customer
                ),
            }
        }

        other => debug!("Unhandled event type: {other}"),
    }

    Ok(Json(json!({ "received": true })))
}
