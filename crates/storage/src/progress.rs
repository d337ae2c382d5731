//! Persisted blob shape for quiz progress.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use yixiang_core::model::{Category, DimensionTestState, Progress};

use crate::repository::StorageError;

/// Key under which the progress blob is stored.
pub const PROGRESS_KEY: &str = "yixiang_test_progress";

/// Serialized form of `Progress`: category → dimension name → state, plus a timestamp.
///
/// This mirrors the domain `Progress` so the blob format stays independent from
/// in-memory representation changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgressRecord {
    pub nature: BTreeMap<String, DimensionTestState>,
    pub personality: BTreeMap<String, DimensionTestState>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    #[must_use]
    pub fn from_progress(progress: &Progress, saved_at: DateTime<Utc>) -> Self {
        Self {
            nature: progress.states(Category::Nature).clone(),
            personality: progress.states(Category::Personality).clone(),
            timestamp: Some(saved_at),
        }
    }

    /// Convert back into domain progress. Catalog alignment is left to the caller.
    #[must_use]
    pub fn into_progress(self) -> Progress {
        Progress::from_persisted(self.nature, self.personality, self.timestamp)
    }
}

/// Encode progress into the stored blob.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_progress(progress: &Progress, saved_at: DateTime<Utc>) -> Result<String, StorageError> {
    serde_json::to_string(&ProgressRecord::from_progress(progress, saved_at))
        .map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Decode a stored blob.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON or an unexpected shape.
pub fn decode_progress(blob: &str) -> Result<ProgressRecord, StorageError> {
    serde_json::from_str(blob).map_err(|e| StorageError::Serialization(e.to_string()))
}
