//! Feedback aggregation queries

use chrono::{DateTime, Utc};
use common::models::MonthlyCount;
use sqlx::{PgPool, Row};

/// Raw feedback counts split by type plus a recent-window count
#[derive(Debug, Clone, Default)]
pub struct FeedbackCounts {
    pub total: i64,
    pub personal: i64,
    pub group: i64,
    pub recent: i64,
}

fn map_counts(row: &sqlx::postgres::PgRow) -> FeedbackCounts {
    FeedbackCounts {
        total: row.get("total"),
        personal: row.get("personal"),
        group: row.get("group_count"),
        recent: row.get("recent"),
    }
}

/// Feedback received by a student
pub async fn counts_received(
    pool: &PgPool,
    student_id: i64,
    recent_since: DateTime<Utc>,
) -> Result<FeedbackCounts, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) as total,
               COUNT(*) FILTER (WHERE feedback_type = 'PERSONAL') as personal,
               COUNT(*) FILTER (WHERE feedback_type = 'GROUP') as group_count,
               COUNT(*) FILTER (WHERE created_at >= $2) as recent
        FROM feedbacks
        WHERE student_id = $1
        "#,
    )
    .bind(student_id)
    .bind(recent_since)
    .fetch_one(pool)
    .await?;

    Ok(map_counts(&row))
}

/// Feedback given by an instructor
pub async fn counts_given(
    pool: &PgPool,
    instructor_id: i64,
    recent_since: DateTime<Utc>,
) -> Result<FeedbackCounts, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) as total,
               COUNT(*) FILTER (WHERE feedback_type = 'PERSONAL') as personal,
               COUNT(*) FILTER (WHERE feedback_type = 'GROUP') as group_count,
               COUNT(*) FILTER (WHERE created_at >= $2) as recent
        FROM feedbacks
        WHERE instructor_id = $1
        "#,
    )
    .bind(instructor_id)
    .bind(recent_since)
    .fetch_one(pool)
    .await?;

    Ok(map_counts(&row))
}

async fn monthly_by(
    pool: &PgPool,
    column: &str,
    user_id: i64,
) -> Result<Vec<MonthlyCount>, sqlx::Error> {
    // column is one of two fixed identifiers, never caller input
    let sql = format!(
        r#"
        SELECT to_char(created_at, 'YYYY-MM') as month, COUNT(*) as count
        FROM feedbacks
        WHERE {column} = $1
        GROUP BY 1
        ORDER BY 1
        "#
    );

    let rows = sqlx::query(&sql).bind(user_id).fetch_all(pool).await?;

    Ok(rows
        .into_iter()
        .map(|r| MonthlyCount {
            month: r.get("month"),
            count: r.get("count"),
        })
        .collect())
}

/// Month histogram of feedback received by a student, ascending by month
pub async fn monthly_received(
    pool: &PgPool,
    student_id: i64,
) -> Result<Vec<MonthlyCount>, sqlx::Error> {
    monthly_by(pool, "student_id", student_id).await
}

/// Month histogram of feedback given by an instructor, ascending by month
pub async fn monthly_given(
    pool: &PgPool,
    instructor_id: i64,
) -> Result<Vec<MonthlyCount>, sqlx::Error> {
    monthly_by(pool, "instructor_id", instructor_id).await
}

/// Feedback count and most recent feedback date from one instructor to one student
pub async fn student_summary_for_instructor(
    pool: &PgPool,
    instructor_id: i64,
    student_id: i64,
) -> Result<(i64, Option<DateTime<Utc>>), sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) as count, MAX(created_at) as last_at
        FROM feedbacks
        WHERE instructor_id = $1 AND student_id = $2
        "#,
    )
    .bind(instructor_id)
    .bind(student_id)
    .fetch_one(pool)
    .await?;

    Ok((row.get("count"), row.get("last_at")))
}

/// Total feedback received by a student, all time
pub async fn count_received(pool: &PgPool, student_id: i64) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) as count FROM feedbacks WHERE student_id = $1")
        .bind(student_id)
        .fetch_one(pool)
        .await?;

    Ok(row.get("count"))
}
