//! Payment-processor webhook event payloads.
//!
//! Signature verification and full event parsing are the processor's
//! contract; this module only deserializes the two event shapes that drive
//! subscription state. Unknown event types are acknowledged and ignored.

use serde::Deserialize;
use serde_json::Value;

pub const CHECKOUT_COMPLETED: &str = "checkout.session.completed";
pub const SUBSCRIPTION_DELETED: &str = "customer.subscription.deleted";

/// Outer webhook envelope. `data.object` stays untyped until the event type
/// is known.
#[derive(Debug, Deserialize)]
pub struct BillingEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: EventData,
}

#[derive(Debug, Deserialize)]
pub struct EventData {
    pub object: Value,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub customer: Option<String>,
    pub customer_details: Option<CustomerDetails>,
    pub line_items: Option<LineItems>,
    #[serde(default)]
    pub metadata: Value,
}

#[derive(Debug, Deserialize)]
pub struct CustomerDetails {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LineItems {
    #[serde(default)]
    pub data: Vec<LineItem>,
}

#[derive(Debug, Deserialize)]
pub struct LineItem {
    pub price: Option<Price>,
}

#[derive(Debug, Deserialize)]
pub struct Price {
    pub id: String,
}

impl CheckoutSession {
    pub fn email(&self) -> Option<&str> {
        self.customer_details.as_ref()?.email.as_deref()
    }

    pub fn full_name(&self) -> Option<&str> {
        self.customer_details.as_ref()?.name.as_deref()
    }

    /// Purchased price id: the expanded line items when present, else the
    /// `price_id` metadata key set at checkout creation.
    pub fn price_id(&self) -> Option<&str> {
        if let Some(item) = self.line_items.as_ref().and_then(|li| li.data.first()) {
            if let Some(price) = &item.price {
                return Some(&price.id);
            }
        }
        self.metadata.get("price_id").and_then(|v| v.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct SubscriptionEvent {
    pub id: String,
    pub customer: String,
}
