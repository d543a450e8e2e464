use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub gemini_api_key: String,
    pub openai_api_key: String,
    /// Stripe price id that maps to the Basic plan.
    pub basic_price_id: String,
    /// Stripe price id that maps to the Pro plan.
    pub pro_price_id: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: require_env("REDIS_URL")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            basic_price_id: std::env::var("STRIPE_BASIC_PRICE_ID")
                .unwrap_or_else(|_| "price_1RlYrtFtYF2CBkIYFI8l4Ewy".to_string()),
            pro_price_id: std::env::var("STRIPE_PRO_PRICE_ID")
                .unwrap_or_else(|_| "price_1RlYrtFtYF2CBkIYfVOApxhk".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
