//! Cached-view invalidation after writes.
//!
//! List/detail/plan views are cached downstream of this service; after a
//! summary insert/delete or a billing update the matching keys are dropped.
//! Invalidation is best-effort: failures are logged, never surfaced.

use redis::AsyncCommands;
use tracing::warn;
use uuid::Uuid;

fn summary_list_key(user_id: &str) -> String {
    format!("summaries:{user_id}")
}

fn summary_detail_key(id: Uuid) -> String {
    format!("summary:{id}")
}

fn plan_key(email: &str) -> String {
    format!("plan:{email}")
}

/// Drops the owner's cached summary list and, when given, one detail view.
pub async fn invalidate_summary_views(
    client: &redis::Client,
    user_id: &str,
    summary_id: Option<Uuid>,
) {
    let mut keys = vec![summary_list_key(user_id)];
    if let Some(id) = summary_id {
        keys.push(summary_detail_key(id));
    }
    delete_keys(client, keys).await;
}

/// Drops the cached plan view for an account after a billing update.
pub async fn invalidate_plan_view(client: &redis::Client, email: &str) {
    delete_keys(client, vec![plan_key(email)]).await;
}

async fn delete_keys(client: &redis::Client, keys: Vec<String>) {
    let result: redis::RedisResult<()> = async {
        let mut conn = client.get_multiplexed_async_connection().await?;
        conn.del(keys).await
    }
    .await;

    if let Err(e) = result {
        warn!("Cache invalidation failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_scoped_per_owner_and_record() {
        let id = Uuid::nil();
        assert_eq!(summary_list_key("user_abc"), "summaries:user_abc");
        assert_eq!(
            summary_detail_key(id),
            "summary:00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(plan_key("a@b.test"), "plan:a@b.test");
    }
}
