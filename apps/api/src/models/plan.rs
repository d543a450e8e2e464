//! Pricing plans and the tier → upload-limit mapping.
//!
//! The catalog is built from `Config` at startup and carried in `AppState`,
//! so tests can construct arbitrary catalogs without touching the environment.

use serde::Serialize;

use crate::config::Config;

/// Uploads allowed on the free tier (no active subscription).
pub const FREE_UPLOAD_LIMIT: i64 = 5;
/// Uploads allowed on the Pro tier.
pub const PRO_UPLOAD_LIMIT: i64 = 1000;

#[derive(Debug, Clone, Serialize)]
pub struct PricingPlan {
    pub id: &'static str,
    pub name: &'static str,
    /// Stripe price id that resolves to this plan.
    pub price_id: String,
    pub upload_limit: i64,
}

#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: Vec<PricingPlan>,
    free: PricingPlan,
}

impl PlanCatalog {
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.basic_price_id.clone(), config.pro_price_id.clone())
    }

    pub fn new(basic_price_id: String, pro_price_id: String) -> Self {
        Self {
            plans: vec![
                PricingPlan {
                    id: "basic",
                    name: "Basic",
                    price_id: basic_price_id,
                    upload_limit: FREE_UPLOAD_LIMIT,
                },
                PricingPlan {
                    id: "pro",
                    name: "Pro",
                    price_id: pro_price_id,
                    upload_limit: PRO_UPLOAD_LIMIT,
                },
            ],
            free: PricingPlan {
                id: "free",
                name: "Free",
                price_id: String::new(),
                upload_limit: FREE_UPLOAD_LIMIT,
            },
        }
    }

    /// Resolves a subscription price id to its plan. No subscription or an
    /// unknown price id falls back to the free tier.
    pub fn resolve(&self, price_id: Option<&str>) -> &PricingPlan {
        price_id
            .and_then(|pid| self.plans.iter().find(|p| p.price_id == pid))
            .unwrap_or(&self.free)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PlanCatalog {
        PlanCatalog::new("price_basic_123".to_string(), "price_pro_456".to_string())
    }

    #[test]
    fn test_no_subscription_resolves_to_free() {
        let catalog = catalog();
        let plan = catalog.resolve(None);
        assert_eq!(plan.id, "free");
        assert_eq!(plan.upload_limit, FREE_UPLOAD_LIMIT);
    }

    #[test]
    fn test_unknown_price_id_resolves_to_free() {
        let catalog = catalog();
        let plan = catalog.resolve(Some("price_from_another_product"));
        assert_eq!(plan.id, "free");
    }

    #[test]
    fn test_pro_price_id_resolves_to_pro_limit() {
        let catalog = catalog();
        let plan = catalog.resolve(Some("price_pro_456"));
        assert_eq!(plan.id, "pro");
        assert_eq!(plan.upload_limit, PRO_UPLOAD_LIMIT);
    }

    #[test]
    fn test_basic_price_id_keeps_default_limit() {
        let catalog = catalog();
        let plan = catalog.resolve(Some("price_basic_123"));
        assert_eq!(plan.id, "basic");
        assert_eq!(plan.upload_limit, FREE_UPLOAD_LIMIT);
    }
}
