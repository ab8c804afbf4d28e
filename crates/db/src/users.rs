//! User queries

use common::models::{User, UserRole};
use sqlx::{PgPool, Row};

fn role_from_str(role: &str) -> UserRole {
    match role {
        "INSTRUCTOR" => UserRole::Instructor,
        _ => UserRole::Student,
    }
}

fn map_user(row: &sqlx::postgres::PgRow) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        nickname: row.get("nickname"),
        profile_image: row.get("profile_image"),
        role: role_from_str(row.get::<String, _>("role").as_str()),
        created_at: row.get("created_at"),
    }
}

/// Get user by ID
pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, name, nickname, profile_image, role, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(map_user))
}
