use std::sync::Arc;

use storage::repository::{KeyValueStore, Storage};
use yixiang_core::model::Catalog;
use yixiang_core::narrative::NarrativeTable;

use crate::Clock;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::quiz::QuizWorkflow;

/// `SQLite` URL that selects the process-local store instead of a pooled connection.
pub const MEMORY_DB_URL: &str = "sqlite::memory:";

/// Where saved progress lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    InMemory,
    Sqlite(String),
}

impl StorageBackend {
    #[must_use]
    pub fn from_db_url(db_url: &str) -> Self {
        if db_url.trim() == MEMORY_DB_URL {
            Self::InMemory
        } else {
            Self::Sqlite(db_url.to_owned())
        }
    }
}

/// Assembles app-facing services around the built-in catalog.
#[derive(Clone)]
pub struct AppServices {
    workflow: Arc<QuizWorkflow>,
    progress: ProgressService,
}

impl AppServices {
    /// Build services for the given backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the built-in catalog
    /// is invalid.
    pub async fn open(
        backend: &StorageBackend,
        clock: Clock,
        narratives: NarrativeTable,
    ) -> Result<Self, AppServicesError> {
        match backend {
            StorageBackend::InMemory => Self::in_memory(clock, narratives),
            StorageBackend::Sqlite(db_url) => Self::new_sqlite(db_url, clock, narratives).await,
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the built-in catalog
    /// is invalid.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        narratives: NarrativeTable,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_store(storage.kv, clock, narratives)
    }

    /// Build services over a process-local store. Nothing survives a restart.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Core` if the built-in catalog is invalid.
    pub fn in_memory(clock: Clock, narratives: NarrativeTable) -> Result<Self, AppServicesError> {
        Self::from_store(Storage::in_memory().kv, clock, narratives)
    }

    /// Build services over any key-value store.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Core` if the built-in catalog is invalid.
    pub fn from_store(
        store: Arc<dyn KeyValueStore>,
        clock: Clock,
        narratives: NarrativeTable,
    ) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(Catalog::builtin()?);
        tracing::debug!(
            dimensions = catalog.total_dimensions(),
            narratives = narratives.len(),
            "assembled quiz services"
        );
        let progress = ProgressService::new(clock, store);
        let workflow = Arc::new(QuizWorkflow::new(
            catalog,
            Arc::new(narratives),
            progress.clone(),
        ));
        Ok(Self { workflow, progress })
    }

    #[must_use]
    pub fn workflow(&self) -> Arc<QuizWorkflow> {
        Arc::clone(&self.workflow)
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressService {
        &self.progress
    }
}
