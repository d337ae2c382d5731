use std::sync::Arc;

use storage::repository::KeyValueStore;
use storage::{PROGRESS_KEY, decode_progress, encode_progress};
use yixiang_core::model::{Catalog, Progress};

use crate::Clock;

/// Loads and saves quiz progress through the key-value store.
///
/// Persistence is best-effort: every failure is logged and the in-memory state stays
/// authoritative, so the quiz keeps working without saved progress.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            clock,
            store,
            key: PROGRESS_KEY.to_owned(),
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load saved progress aligned with `catalog`.
    ///
    /// Missing, unreadable or malformed data yields the default state for the catalog.
    pub async fn load(&self, catalog: &Catalog) -> Progress {
        let blob = match self.store.get(&self.key).await {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no saved progress");
                return Progress::for_catalog(catalog);
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to read saved progress");
                return Progress::for_catalog(catalog);
            }
        };

        let record = match decode_progress(&blob) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "ignoring malformed saved progress");
                return Progress::for_catalog(catalog);
            }
        };

        let mut progress = record.into_progress();
        let corrected = progress.reconcile(catalog);
        if corrected > 0 {
            tracing::warn!(corrected, "saved qualification flags disagreed with answers");
        }
        tracing::debug!(completed = progress.completed_count(), "loaded saved progress");
        progress
    }

    /// Persist progress, stamping it with the current time on success.
    ///
    /// Returns `false` if the write failed; the failure is logged, never propagated.
    pub async fn save(&self, progress: &mut Progress) -> bool {
        let now = self.clock.now();
        let blob = match encode_progress(progress, now) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode progress");
                return false;
            }
        };
        match self.store.set(&self.key, &blob).await {
            Ok(()) => {
                progress.set_saved_at(now);
                true
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to save progress");
                false
            }
        }
    }

    /// Remove saved progress. Returns `false` if the removal failed.
    pub async fn clear(&self) -> bool {
        match self.store.remove(&self.key).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to remove saved progress");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use storage::InMemoryStore;
    use yixiang_core::model::{Category, DimensionStatus};
    use yixiang_core::time::{fixed_clock, fixed_now};

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[tokio::test]
    async fn absent_blob_loads_defaults() {
        let svc = ProgressService::new(fixed_clock(), Arc::new(InMemoryStore::new()));
        let catalog = catalog();
        assert_eq!(svc.load(&catalog).await, Progress::for_catalog(&catalog));
    }

    #[tokio::test]
    async fn corrupted_blob_loads_defaults() {
        let store = InMemoryStore::new();
        store.set(PROGRESS_KEY, "{not json").await.unwrap();
        let svc = ProgressService::new(fixed_clock(), Arc::new(store));
        let catalog = catalog();
        assert_eq!(svc.load(&catalog).await, Progress::for_catalog(&catalog));
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let store = Arc::new(InMemoryStore::new());
        let svc = ProgressService::new(fixed_clock(), store.clone());
        let catalog = catalog();
        let mut progress = Progress::for_catalog(&catalog);
        progress.record_verdict(Category::Nature, "紫薇", vec![Some(true); 9]);
        progress.record_verdict(Category::Personality, "君主", vec![Some(false); 9]);

        assert!(svc.save(&mut progress).await);
        assert_eq!(progress.saved_at(), Some(fixed_now()));

        let loaded = svc.load(&catalog).await;
        assert_eq!(loaded, progress);
        assert_eq!(
            loaded.status(Category::Nature, "紫薇"),
            DimensionStatus::Qualified
        );
        assert_eq!(
            loaded.status(Category::Personality, "君主"),
            DimensionStatus::CompletedUnqualified
        );
    }

    #[tokio::test]
    async fn clear_removes_blob() {
        let store = Arc::new(InMemoryStore::new());
        let svc = ProgressService::new(fixed_clock(), store.clone());
        let catalog = catalog();
        let mut progress = Progress::for_catalog(&catalog);
        assert!(svc.save(&mut progress).await);

        assert!(svc.clear().await);
        assert_eq!(store.get(PROGRESS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn custom_key_is_used() {
        let store = Arc::new(InMemoryStore::new());
        let svc = ProgressService::new(fixed_clock(), store.clone()).with_key("other");
        let mut progress = Progress::for_catalog(&catalog());
        assert!(svc.save(&mut progress).await);
        assert!(store.get("other").await.unwrap().is_some());
        assert!(store.get(PROGRESS_KEY).await.unwrap().is_none());
    }
}
