//! Lecture and enrollment queries

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Row};

/// A student's enrollment joined with lecture and instructor data
#[derive(Debug, Clone)]
pub struct EnrollmentRow {
    pub lecture_id: i64,
    pub title: String,
    pub instructor_name: String,
    pub end_date: Option<NaiveDate>,
    pub joined_at: DateTime<Utc>,
}

/// Non-deleted enrollments for a student, oldest first
pub async fn enrollments_for_student(
    pool: &PgPool,
    student_id: i64,
) -> Result<Vec<EnrollmentRow>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT l.id as lecture_id, l.title, l.end_date, lm.joined_at,
               u.name as instructor_name
        FROM lecture_members lm
        JOIN lectures l ON l.id = lm.lecture_id
        JOIN users u ON u.id = l.instructor_id
        WHERE lm.user_id = $1 AND lm.deleted_at IS NULL
        ORDER BY lm.joined_at
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| EnrollmentRow {
            lecture_id: r.get("lecture_id"),
            title: r.get("title"),
            instructor_name: r.get("instructor_name"),
            end_date: r.get("end_date"),
            joined_at: r.get("joined_at"),
        })
        .collect())
}

/// An instructor's lecture with its non-deleted member count
#[derive(Debug, Clone)]
pub struct InstructorLectureRow {
    pub lecture_id: i64,
    pub title: String,
    pub member_count: i64,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Lectures owned by an instructor, oldest first
pub async fn lectures_for_instructor(
    pool: &PgPool,
    instructor_id: i64,
) -> Result<Vec<InstructorLectureRow>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT l.id as lecture_id, l.title, l.end_date, l.created_at,
               (SELECT COUNT(*) FROM lecture_members lm
                WHERE lm.lecture_id = l.id AND lm.deleted_at IS NULL) as member_count
        FROM lectures l
        WHERE l.instructor_id = $1
        ORDER BY l.created_at
        "#,
    )
    .bind(instructor_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| InstructorLectureRow {
            lecture_id: r.get("lecture_id"),
            title: r.get("title"),
            member_count: r.get("member_count"),
            end_date: r.get("end_date"),
            created_at: r.get("created_at"),
        })
        .collect())
}

/// Distinct students across an instructor's lectures: (total, active).
///
/// A student is active if enrolled in at least one currently-active lecture.
pub async fn distinct_student_counts(
    pool: &PgPool,
    instructor_id: i64,
    today: NaiveDate,
) -> Result<(i64, i64), sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(DISTINCT lm.user_id) as total,
               COUNT(DISTINCT lm.user_id)
                   FILTER (WHERE l.end_date IS NULL OR l.end_date >= $2) as active
        FROM lecture_members lm
        JOIN lectures l ON l.id = lm.lecture_id
        WHERE l.instructor_id = $1 AND lm.deleted_at IS NULL
        "#,
    )
    .bind(instructor_id)
    .bind(today)
    .fetch_one(pool)
    .await?;

    Ok((row.get("total"), row.get("active")))
}

/// A distinct student of an instructor, with their earliest enrollment
#[derive(Debug, Clone)]
pub struct InstructorStudentRow {
    pub user_id: i64,
    pub name: String,
    pub joined_at: DateTime<Utc>,
    pub lecture_title: String,
}

/// Distinct students across an instructor's lectures, each reported with the
/// join date and title of their earliest enrollment
pub async fn distinct_students(
    pool: &PgPool,
    instructor_id: i64,
) -> Result<Vec<InstructorStudentRow>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT DISTINCT ON (lm.user_id)
               lm.user_id, u.name, lm.joined_at, l.title as lecture_title
        FROM lecture_members lm
        JOIN lectures l ON l.id = lm.lecture_id
        JOIN users u ON u.id = lm.user_id
        WHERE l.instructor_id = $1 AND lm.deleted_at IS NULL
        ORDER BY lm.user_id, lm.joined_at
        "#,
    )
    .bind(instructor_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| InstructorStudentRow {
            user_id: r.get("user_id"),
            name: r.get("name"),
            joined_at: r.get("joined_at"),
            lecture_title: r.get("lecture_title"),
        })
        .collect())
}
