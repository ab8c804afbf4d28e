#[cfg(test)]
mod tests {
    use crate::rankings::*;
    use db::rankings::{InstructorActivityRow, StudentActivityRow};

    fn student_row(user_id: i64, feedback: i64, posts: i64, comments: i64, likes: i64) -> StudentActivityRow {
        StudentActivityRow {
            user_id,
            name: format!("student-{}", user_id),
            nickname: format!("nick-{}", user_id),
            profile_image: None,
            level: 1,
            feedback_count: feedback,
            post_count: posts,
            comment_count: comments,
            like_count: likes,
        }
    }

    fn instructor_row(user_id: i64, students: i64, feedback: i64) -> InstructorActivityRow {
        InstructorActivityRow {
            user_id,
            name: format!("instructor-{}", user_id),
            nickname: format!("coach-{}", user_id),
            profile_image: None,
            level: 1,
            student_count: students,
            feedback_count: feedback,
            post_count: 0,
            like_count: 0,
        }
    }

    #[test]
    fn test_entries_ordered_descending_with_one_based_ranks() {
        let entries = compose_student_entries(vec![
            student_row(1, 1, 0, 0, 0),  // 10
            student_row(2, 10, 5, 20, 30), // 195
            student_row(3, 2, 0, 0, 0),  // 20
        ]);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].user_id, 2);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].score, 195);
        assert_eq!(entries[1].user_id, 3);
        assert_eq!(entries[1].rank, 2);
        assert_eq!(entries[2].user_id, 1);
        assert_eq!(entries[2].rank, 3);
    }

    #[test]
    fn test_zero_scorers_are_dropped() {
        let entries = compose_student_entries(vec![
            student_row(1, 0, 0, 0, 0),
            student_row(2, 1, 0, 0, 0),
        ]);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user_id, 2);
    }

    #[test]
    fn test_ties_keep_storage_order() {
        let entries = compose_student_entries(vec![
            student_row(1, 1, 0, 0, 0),
            student_row(2, 0, 2, 0, 0),
            student_row(3, 0, 0, 5, 0),
        ]);

        // All score 10; stable sort keeps user id order
        assert_eq!(
            entries.iter().map(|e| e.user_id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_capped_at_fifty_entries() {
        let rows: Vec<_> = (1..=60).map(|id| student_row(id, id, 0, 0, 0)).collect();
        let entries = compose_student_entries(rows);

        assert_eq!(entries.len(), RANKING_CAP);
        assert_eq!(entries[0].user_id, 60);
        assert_eq!(entries.last().unwrap().rank, 50);
        // user 11 scores 110, rank 50; users 1..=10 fall outside the cap
        assert_eq!(entries.last().unwrap().user_id, 11);
    }

    #[test]
    fn test_student_details_have_comment_count_not_student_count() {
        let entries = compose_student_entries(vec![student_row(1, 1, 2, 3, 4)]);
        assert_eq!(entries[0].details.comment_count, Some(3));
        assert_eq!(entries[0].details.student_count, None);
    }

    #[test]
    fn test_instructor_score_and_details() {
        let entries = compose_instructor_entries(vec![instructor_row(1, 4, 3)]);
        assert_eq!(entries[0].score, 4 * 15 + 3 * 5);
        assert_eq!(entries[0].details.student_count, Some(4));
        assert_eq!(entries[0].details.comment_count, None);
    }

    #[test]
    fn test_my_ranking_found_within_cap() {
        let entries = compose_student_entries(vec![
            student_row(1, 1, 0, 0, 0),
            student_row(2, 2, 0, 0, 0),
        ]);

        let mine = find_my_ranking(&entries, Some(1)).unwrap();
        assert_eq!(mine.user_id, 1);
        assert_eq!(mine.rank, 2);
    }

    #[test]
    fn test_my_ranking_absent_outside_cap() {
        // User 7 scores lowest of 60 students and falls outside the top 50
        let mut rows: Vec<_> = (8..=67).map(|id| student_row(id, id, 0, 0, 0)).collect();
        rows.push(student_row(7, 0, 0, 0, 1));
        let entries = compose_student_entries(rows);

        assert_eq!(entries.len(), RANKING_CAP);
        assert!(find_my_ranking(&entries, Some(7)).is_none());
    }

    #[test]
    fn test_my_ranking_none_without_caller() {
        let entries = compose_student_entries(vec![student_row(1, 1, 0, 0, 0)]);
        assert!(find_my_ranking(&entries, None).is_none());
    }
}
