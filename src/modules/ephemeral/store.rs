use super::model::User;
use crate::di::{Container, Injectable, Result};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct Users {
    next_id: u64,
    users: Vec<User>,
}

/// Ordered in-memory user sequence
///
/// Ids come from a counter that only moves forward, so with no removal the
/// id of a user is also its position in the sequence.
#[derive(Default)]
pub struct EphemeralUserStore {
    inner: Mutex<Users>,
}

impl EphemeralUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Users> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(&self, name: String) -> User {
        let mut inner = self.lock();
        let user = User {
            name,
            id: inner.next_id,
        };
        inner.next_id += 1;
        inner.users.push(user.clone());
        tracing::debug!(user_id = user.id, "ephemeral user created");
        user
    }

    pub fn list(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    /// Negative and out-of-range ids are misses
    pub fn get(&self, id: i64) -> Option<User> {
        let index = usize::try_from(id).ok()?;
        self.lock().users.get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Injectable for EphemeralUserStore {
    fn inject(_container: &Container) -> Result<Self> {
        Ok(Self::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_ids_follow_insertion_order() {
        let store = EphemeralUserStore::new();
        let names = ["ada", "grace", "edsger"];
        for name in names {
            store.create(name.to_string());
        }

        let users = store.list();
        assert_eq!(users.len(), 3);
        for (i, (user, name)) in users.iter().zip(names).enumerate() {
            assert_eq!(user.id, i as u64);
            assert_eq!(user.name, name);
        }
    }

    #[test]
    fn test_empty_name_is_accepted() {
        let store = EphemeralUserStore::new();
        let user = store.create(String::new());
        assert_eq!(user, User { name: String::new(), id: 0 });
    }

    #[test]
    fn test_get_out_of_bounds() {
        let store = EphemeralUserStore::new();
        assert!(store.is_empty());
        store.create("ada".to_string());

        assert_eq!(store.get(0).map(|u| u.name), Some("ada".to_string()));
        assert_eq!(store.get(1), None);
        assert_eq!(store.get(-1), None);
        assert_eq!(store.get(i64::MAX), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_assign_unique_ids() {
        let store = Arc::new(EphemeralUserStore::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(format!("user-{i}")).id })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }

        assert_eq!(ids, (0..64).collect::<HashSet<u64>>());
        assert_eq!(store.len(), 64);
    }
}
