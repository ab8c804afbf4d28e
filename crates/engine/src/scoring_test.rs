#[cfg(test)]
mod tests {
    use crate::scoring::*;

    #[test]
    fn test_student_score_weighted_sum() {
        // 10*10 + 5*5 + 20*2 + 30*1
        assert_eq!(student_score(10, 5, 20, 30), 195);
    }

    #[test]
    fn test_student_score_zero_activity() {
        assert_eq!(student_score(0, 0, 0, 0), 0);
    }

    #[test]
    fn test_student_score_feedback_dominates() {
        assert!(student_score(1, 0, 0, 0) > student_score(0, 1, 0, 0));
        assert!(student_score(0, 1, 0, 0) > student_score(0, 0, 1, 0));
        assert!(student_score(0, 0, 1, 0) > student_score(0, 0, 0, 1));
    }

    #[test]
    fn test_instructor_score_weighted_sum() {
        // 4*15 + 3*5 + 2*3 + 7*1
        assert_eq!(instructor_score(4, 3, 2, 7), 88);
    }

    #[test]
    fn test_instructor_score_students_dominate() {
        assert!(instructor_score(1, 0, 0, 0) > instructor_score(0, 2, 0, 0));
    }
}
