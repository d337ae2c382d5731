#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress_service;
pub mod quiz;

pub use yixiang_core::Clock;

pub use app_services::{AppServices, MEMORY_DB_URL, StorageBackend};
pub use error::{AppServicesError, WorkflowError};
pub use progress_service::ProgressService;
pub use quiz::{
    CardSnapshot, DimensionCard, IndexItem, QuestionSnapshot, QuizContext, QuizSnapshot,
    QuizWorkflow, RestartOutcome, ResultsSnapshot, ResultsState, Screen,
};
