#[cfg(test)]
mod tests {
    use crate::progression::{try_award, BadgeStore};
    use common::models::BadgeType;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// In-memory award store with insert-on-conflict semantics matching the
    /// unique constraint on (user_id, badge_type)
    #[derive(Default)]
    struct MemoryStore {
        rows: Mutex<HashSet<(i64, String)>>,
        // When set, the existence check always reports "not held",
        // simulating the race window between check and insert
        stale_check: bool,
    }

    impl BadgeStore for MemoryStore {
        async fn has_badge(&self, user_id: i64, badge_type: &str) -> Result<bool, common::Error> {
            if self.stale_check {
                return Ok(false);
            }
            let rows = self.rows.lock().unwrap();
            Ok(rows.contains(&(user_id, badge_type.to_string())))
        }

        async fn award(
            &self,
            user_id: i64,
            badge_type: &str,
            _description: &str,
        ) -> Result<bool, common::Error> {
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.insert((user_id, badge_type.to_string())))
        }
    }

    #[tokio::test]
    async fn test_double_award_creates_one_row() {
        let store = MemoryStore::default();

        let first = try_award(&store, 1, BadgeType::Streak7).await.unwrap();
        let second = try_award(&store, 1, BadgeType::Streak7).await.unwrap();

        assert!(first);
        assert!(!second);
        assert_eq!(store.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_conflict_backstop_when_existence_check_misses() {
        let store = MemoryStore {
            stale_check: true,
            ..Default::default()
        };

        let first = try_award(&store, 1, BadgeType::Legend).await.unwrap();
        let second = try_award(&store, 1, BadgeType::Legend).await.unwrap();

        assert!(first);
        assert!(!second);
        assert_eq!(store.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_distinct_badges_and_users_award_independently() {
        let store = MemoryStore::default();

        assert!(try_award(&store, 1, BadgeType::Streak7).await.unwrap());
        assert!(try_award(&store, 1, BadgeType::Streak30).await.unwrap());
        assert!(try_award(&store, 2, BadgeType::Streak7).await.unwrap());
        assert_eq!(store.rows.lock().unwrap().len(), 3);
    }
}
