//! Badge award queries

use common::models::BadgeAward;
use sqlx::{PgPool, Row};

/// Check if user already holds a badge
pub async fn has_badge(
    pool: &PgPool,
    user_id: i64,
    badge_type: &str,
) -> Result<bool, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM badge_awards
            WHERE user_id = $1 AND badge_type = $2
        ) as exists
        "#,
    )
    .bind(user_id)
    .bind(badge_type)
    .fetch_one(pool)
    .await?;

    Ok(row.get::<bool, _>("exists"))
}

/// Award a badge to a user, returning whether a new row was created.
///
/// The unique constraint on (user_id, badge_type) makes this safe against
/// concurrent identical calls; the conflict path is a no-op.
pub async fn award(
    pool: &PgPool,
    user_id: i64,
    badge_type: &str,
    description: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO badge_awards (user_id, badge_type, description, earned_at)
        VALUES ($1, $2, $3, NOW())
        ON CONFLICT (user_id, badge_type) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(badge_type)
    .bind(description)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Get all badges for a user, newest first
pub async fn list_for_user(pool: &PgPool, user_id: i64) -> Result<Vec<BadgeAward>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT user_id, badge_type, description, earned_at
        FROM badge_awards
        WHERE user_id = $1
        ORDER BY earned_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| BadgeAward {
            user_id: r.get("user_id"),
            badge_type: r.get("badge_type"),
            description: r.get("description"),
            earned_at: r.get("earned_at"),
        })
        .collect())
}
