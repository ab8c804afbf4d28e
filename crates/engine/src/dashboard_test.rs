#[cfg(test)]
mod tests {
    use crate::dashboard::*;
    use chrono::NaiveDate;
    use db::community::PostLikeRow;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_lecture_without_end_date_is_active() {
        assert!(is_lecture_active(None, date(2026, 3, 10)));
    }

    #[test]
    fn test_lecture_ending_today_is_active() {
        assert!(is_lecture_active(Some(date(2026, 3, 10)), date(2026, 3, 10)));
    }

    #[test]
    fn test_lecture_ended_yesterday_is_inactive() {
        assert!(!is_lecture_active(Some(date(2026, 3, 9)), date(2026, 3, 10)));
    }

    #[test]
    fn test_avg_per_month_integer_division() {
        assert_eq!(avg_per_month(10, 3), 3);
    }

    #[test]
    fn test_avg_per_month_zero_months() {
        assert_eq!(avg_per_month(0, 0), 0);
        assert_eq!(avg_per_month(42, 0), 0);
    }

    #[test]
    fn test_popular_posts_filter_then_take_five_in_input_order() {
        let rows: Vec<_> = (1..=10)
            .map(|id| PostLikeRow {
                post_id: id,
                title: format!("post-{}", id),
                // Odd ids qualify, with likes increasing by id
                like_count: if id % 2 == 1 { 10 + id } else { 3 },
            })
            .collect();

        let popular = select_popular_posts(rows);
        assert_eq!(
            popular.iter().map(|p| p.post_id).collect::<Vec<_>>(),
            vec![1, 3, 5, 7, 9]
        );
        // Input order kept, not re-sorted by like count
        assert!(popular[0].like_count < popular[4].like_count);
    }
}
