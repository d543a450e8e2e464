use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted summary row. Created exactly once per successful pipeline run
/// and never mutated afterwards; deletion is a separate owner-scoped operation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SummaryRow {
    pub id: Uuid,
    /// External auth-provider user id; the row's owner.
    pub user_id: String,
    pub original_file_url: String,
    pub summary_text: String,
    pub title: Option<String>,
    pub file_name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
