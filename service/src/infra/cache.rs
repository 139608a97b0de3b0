//! [`InterestCache`] implementation.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::domain::{customer, Interest};

/// Cache of the [`Interest`]s loaded per customer.
///
/// Shared between clones. An entry goes stale once a schedule is created for
/// its customer, and is loaded again on the next lookup.
#[derive(Clone, Debug, Default)]
pub struct InterestCache {
    /// Cached entries.
    entries: Arc<RwLock<HashMap<customer::Id, Entry>>>,
}

/// Single entry of an [`InterestCache`].
#[derive(Clone, Debug)]
struct Entry {
    /// Cached [`Interest`]s.
    interests: Vec<Interest>,

    /// Whether these `interests` must be loaded again.
    stale: bool,
}

impl InterestCache {
    /// Returns the fresh [`Interest`]s of the provided customer, if cached.
    pub async fn get(&self, customer_id: customer::Id) -> Option<Vec<Interest>> {
        self.entries
            .read()
            .await
            .get(&customer_id)
            .filter(|e| !e.stale)
            .map(|e| e.interests.clone())
    }

    /// Stores the freshly loaded [`Interest`]s of the provided customer.
    pub async fn put(&self, customer_id: customer::Id, interests: Vec<Interest>) {
        drop(self.entries.write().await.insert(
            customer_id,
            Entry {
                interests,
                stale: false,
            },
        ));
    }

    /// Marks the [`Interest`]s of the provided customer as stale.
    ///
    /// Returns `false` if nothing is cached for the customer.
    pub async fn invalidate(&self, customer_id: customer::Id) -> bool {
        self.entries
            .write()
            .await
            .get_mut(&customer_id)
            .map(|e| e.stale = true)
            .is_some()
    }

    /// Indicates whether the [`Interest`]s of the provided customer are
    /// cached but stale.
    pub async fn is_stale(&self, customer_id: customer::Id) -> bool {
        self.entries
            .read()
            .await
            .get(&customer_id)
            .is_some_and(|e| e.stale)
    }
}

#[cfg(test)]
mod spec {
    use super::InterestCache;
    use crate::domain::{property::Property, Interest, Status};

    fn interest() -> Interest {
        Interest {
            id: 1.into(),
            customer_id: 3.into(),
            property: Property {
                id: 7.into(),
                uid: "RS-007".into(),
                status: Status::Available,
            },
        }
    }

    #[tokio::test]
    async fn serves_fresh_entries() {
        let cache = InterestCache::default();
        assert_eq!(cache.get(3.into()).await, None);

        cache.put(3.into(), vec![interest()]).await;

        assert_eq!(cache.get(3.into()).await, Some(vec![interest()]));
        assert_eq!(cache.get(4.into()).await, None);
    }

    #[tokio::test]
    async fn hides_stale_entries() {
        let cache = InterestCache::default();
        cache.put(3.into(), vec![interest()]).await;

        assert!(cache.invalidate(3.into()).await);

        assert!(cache.is_stale(3.into()).await);
        assert_eq!(cache.get(3.into()).await, None);

        cache.put(3.into(), vec![]).await;
        assert!(!cache.is_stale(3.into()).await);
        assert_eq!(cache.get(3.into()).await, Some(vec![]));
    }

    #[tokio::test]
    async fn shared_between_clones() {
        let cache = InterestCache::default();
        let other = cache.clone();

        cache.put(3.into(), vec![interest()]).await;

        assert!(other.get(3.into()).await.is_some());
        assert!(!other.invalidate(4.into()).await);
    }
}
