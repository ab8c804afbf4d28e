//! User progression queries

use common::models::UserProgression;
use sqlx::{PgPool, Row};

fn map_progression(row: &sqlx::postgres::PgRow) -> UserProgression {
    UserProgression {
        user_id: row.get("user_id"),
        level: row.get("level"),
        experience: row.get("experience"),
        current_streak: row.get("current_streak"),
        longest_streak: row.get("longest_streak"),
        last_activity_date: row.get("last_activity_date"),
        updated_at: row.get("updated_at"),
    }
}

/// Get a user's progression row, if it exists
pub async fn get(pool: &PgPool, user_id: i64) -> Result<Option<UserProgression>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT user_id, level, experience, current_streak, longest_streak,
               last_activity_date, updated_at
        FROM user_progression
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(map_progression))
}

/// Create the default progression row for a user.
///
/// Creation is kept explicit in the write path; readers never create rows.
pub async fn create_default(pool: &PgPool, user_id: i64) -> Result<UserProgression, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO user_progression
            (user_id, level, experience, current_streak, longest_streak, last_activity_date, updated_at)
        VALUES ($1, 1, 0, 0, 0, NULL, NOW())
        ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
        RETURNING user_id, level, experience, current_streak, longest_streak,
                  last_activity_date, updated_at
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(map_progression(&row))
}

/// Persist an updated progression row
pub async fn update(pool: &PgPool, prog: &UserProgression) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE user_progression
        SET level = $2,
            experience = $3,
            current_streak = $4,
            longest_streak = $5,
            last_activity_date = $6,
            updated_at = NOW()
        WHERE user_id = $1
        "#,
    )
    .bind(prog.user_id)
    .bind(prog.level)
    .bind(prog.experience)
    .bind(prog.current_streak)
    .bind(prog.longest_streak)
    .bind(prog.last_activity_date)
    .execute(pool)
    .await?;

    Ok(())
}
