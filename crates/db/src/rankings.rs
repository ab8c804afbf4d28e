//! Ranking score-source queries
//!
//! These return raw per-user activity counts; scoring, ordering, and the
//! top-50 cap live in the engine so the formulas stay in one place.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

/// Windowed activity counts for one student
#[derive(Debug, Clone)]
pub struct StudentActivityRow {
    pub user_id: i64,
    pub name: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub level: i32,
    pub feedback_count: i64,
    pub post_count: i64,
    pub comment_count: i64,
    pub like_count: i64,
}

/// Per-student activity counts over the trailing window
pub async fn student_activity(
    pool: &PgPool,
    since: DateTime<Utc>,
) -> Result<Vec<StudentActivityRow>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT u.id as user_id, u.name, u.nickname, u.profile_image,
               COALESCE(prog.level, 1) as level,
               (SELECT COUNT(*) FROM feedbacks f
                WHERE f.student_id = u.id AND f.created_at >= $1) as feedback_count,
               (SELECT COUNT(*) FROM posts p
                WHERE p.author_id = u.id AND p.created_at >= $1) as post_count,
               (SELECT COUNT(*) FROM comments c
                WHERE c.author_id = u.id AND c.created_at >= $1) as comment_count,
               (SELECT COUNT(*) FROM post_likes pl
                JOIN posts p ON p.id = pl.post_id
                WHERE p.author_id = u.id AND pl.created_at >= $1) as like_count
        FROM users u
        LEFT JOIN user_progression prog ON prog.user_id = u.id
        WHERE u.role = 'STUDENT'
        ORDER BY u.id
        "#,
    )
    .bind(since)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| StudentActivityRow {
            user_id: r.get("user_id"),
            name: r.get("name"),
            nickname: r.get("nickname"),
            profile_image: r.get("profile_image"),
            level: r.get("level"),
            feedback_count: r.get("feedback_count"),
            post_count: r.get("post_count"),
            comment_count: r.get("comment_count"),
            like_count: r.get("like_count"),
        })
        .collect())
}

/// Activity counts for one instructor; student_count is all-time, the rest
/// are windowed
#[derive(Debug, Clone)]
pub struct InstructorActivityRow {
    pub user_id: i64,
    pub name: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub level: i32,
    pub student_count: i64,
    pub feedback_count: i64,
    pub post_count: i64,
    pub like_count: i64,
}

/// Per-instructor activity counts over the trailing window.
///
/// student_count deliberately ignores the window to reward sustained reach
/// over recent volume.
pub async fn instructor_activity(
    pool: &PgPool,
    since: DateTime<Utc>,
) -> Result<Vec<InstructorActivityRow>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT u.id as user_id, u.name, u.nickname, u.profile_image,
               COALESCE(prog.level, 1) as level,
               (SELECT COUNT(DISTINCT lm.user_id) FROM lecture_members lm
                JOIN lectures l ON l.id = lm.lecture_id
                WHERE l.instructor_id = u.id AND lm.deleted_at IS NULL) as student_count,
               (SELECT COUNT(*) FROM feedbacks f
                WHERE f.instructor_id = u.id AND f.created_at >= $1) as feedback_count,
               (SELECT COUNT(*) FROM posts p
                WHERE p.author_id = u.id AND p.created_at >= $1) as post_count,
               (SELECT COUNT(*) FROM post_likes pl
                JOIN posts p ON p.id = pl.post_id
                WHERE p.author_id = u.id AND pl.created_at >= $1) as like_count
        FROM users u
        LEFT JOIN user_progression prog ON prog.user_id = u.id
        WHERE u.role = 'INSTRUCTOR'
        ORDER BY u.id
        "#,
    )
    .bind(since)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| InstructorActivityRow {
            user_id: r.get("user_id"),
            name: r.get("name"),
            nickname: r.get("nickname"),
            profile_image: r.get("profile_image"),
            level: r.get("level"),
            student_count: r.get("student_count"),
            feedback_count: r.get("feedback_count"),
            post_count: r.get("post_count"),
            like_count: r.get("like_count"),
        })
        .collect())
}
