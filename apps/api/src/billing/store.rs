//! Subscription state in the `users` table, written by webhook handlers
//! and read by the quota gate.

use sqlx::PgPool;

/// Records a completed checkout: the account becomes (or stays) active on
/// the purchased price id. Keyed by email; repeat checkouts update in place.
pub async fn activate_subscription(
    pool: &PgPool,
    email: &str,
    full_name: Option<&str>,
    customer_id: Option<&str>,
    price_id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO users (email, full_name, customer_id, price_id, status)
        VALUES ($1, $2, $3, $4, 'active')
        ON CONFLICT (email) DO UPDATE
        SET full_name = COALESCE(EXCLUDED.full_name, users.full_name),
            customer_id = EXCLUDED.customer_id,
            price_id = EXCLUDED.price_id,
            status = 'active',
            updated_at = now()
        "#,
    )
    .bind(email)
    .bind(full_name)
    .bind(customer_id)
    .bind(price_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Marks the account behind a deleted subscription as cancelled.
/// Returns the account email so callers can invalidate its plan view,
/// or None when the customer id is unknown.
pub async fn cancel_subscription(
    pool: &PgPool,
    customer_id: &str,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"
        UPDATE users
        SET status = 'cancelled', updated_at = now()
        WHERE customer_id = $1
        RETURNING email
        "#,
    )
    .bind(customer_id)
    .fetch_optional(pool)
    .await
}
