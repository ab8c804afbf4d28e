//! Ranking score formulas

/// Student score over the trailing window:
/// feedback weighs heaviest, likes lightest.
pub fn student_score(feedback: i64, posts: i64, comments: i64, likes: i64) -> i64 {
    feedback * 10 + posts * 5 + comments * 2 + likes
}

/// Instructor score: student reach (all-time) dominates the windowed terms.
pub fn instructor_score(students: i64, feedback: i64, posts: i64, likes: i64) -> i64 {
    students * 15 + feedback * 5 + posts * 3 + likes
}
