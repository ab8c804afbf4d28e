//! Community activity queries (posts, comments, likes, bookmarks)

use common::models::CategoryCount;
use sqlx::{PgPool, Row};

/// Raw community activity counts for one user
#[derive(Debug, Clone, Default)]
pub struct CommunityCounts {
    pub posts: i64,
    pub comments: i64,
    pub likes_received: i64,
    pub comments_received: i64,
    pub bookmarks_received: i64,
}

/// Post/comment totals plus likes and bookmarks received across the user's posts
pub async fn counts_for_user(
    pool: &PgPool,
    user_id: i64,
) -> Result<CommunityCounts, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT
            (SELECT COUNT(*) FROM posts WHERE author_id = $1) as posts,
            (SELECT COUNT(*) FROM comments WHERE author_id = $1) as comments,
            (SELECT COUNT(*) FROM post_likes pl
             JOIN posts p ON p.id = pl.post_id
             WHERE p.author_id = $1) as likes_received,
            (SELECT COUNT(*) FROM comments c
             JOIN posts p ON p.id = c.post_id
             WHERE p.author_id = $1) as comments_received,
            (SELECT COUNT(*) FROM post_bookmarks pb
             JOIN posts p ON p.id = pb.post_id
             WHERE p.author_id = $1) as bookmarks_received
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(CommunityCounts {
        posts: row.get("posts"),
        comments: row.get("comments"),
        likes_received: row.get("likes_received"),
        comments_received: row.get("comments_received"),
        bookmarks_received: row.get("bookmarks_received"),
    })
}

/// Post counts grouped by category
pub async fn posts_by_category(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<CategoryCount>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT category, COUNT(*) as count
        FROM posts
        WHERE author_id = $1
        GROUP BY category
        ORDER BY category
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| CategoryCount {
            category: r.get("category"),
            count: r.get("count"),
        })
        .collect())
}

/// Aggregated workout data over WORKOUT_RECORD posts
#[derive(Debug, Clone)]
pub struct WorkoutTotals {
    pub records: i64,
    pub total_count: i64,
    pub total_distance: i64,
    pub total_duration: i64,
}

/// Sum workout data across a user's WORKOUT_RECORD posts
pub async fn workout_totals(pool: &PgPool, user_id: i64) -> Result<WorkoutTotals, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) as records,
               COALESCE(SUM(workout_count), 0)::bigint as total_count,
               COALESCE(SUM(workout_distance), 0)::bigint as total_distance,
               COALESCE(SUM(workout_duration), 0)::bigint as total_duration
        FROM posts
        WHERE author_id = $1 AND category = 'WORKOUT_RECORD'
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(WorkoutTotals {
        records: row.get("records"),
        total_count: row.get("total_count"),
        total_distance: row.get("total_distance"),
        total_duration: row.get("total_duration"),
    })
}

/// Count of a user's posts in a single category
pub async fn count_posts_in_category(
    pool: &PgPool,
    user_id: i64,
    category: &str,
) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        "SELECT COUNT(*) as count FROM posts WHERE author_id = $1 AND category = $2",
    )
    .bind(user_id)
    .bind(category)
    .fetch_one(pool)
    .await?;

    Ok(row.get("count"))
}

/// A post with its like count
#[derive(Debug, Clone)]
pub struct PostLikeRow {
    pub post_id: i64,
    pub title: String,
    pub like_count: i64,
}

/// All posts by an author with per-post like counts, in post id order
pub async fn posts_with_like_counts(
    pool: &PgPool,
    author_id: i64,
) -> Result<Vec<PostLikeRow>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p.id as post_id, p.title,
               (SELECT COUNT(*) FROM post_likes pl WHERE pl.post_id = p.id) as like_count
        FROM posts p
        WHERE p.author_id = $1
        ORDER BY p.id
        "#,
    )
    .bind(author_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| PostLikeRow {
            post_id: r.get("post_id"),
            title: r.get("title"),
            like_count: r.get("like_count"),
        })
        .collect())
}
