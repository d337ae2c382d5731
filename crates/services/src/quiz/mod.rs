//! Quiz orchestration: session transitions, persistence and results browsing.

mod context;
mod view;
mod workflow;

pub use context::{QuizContext, ResultsState, Screen};
pub use view::{CardSnapshot, DimensionCard, IndexItem, QuestionSnapshot, QuizSnapshot, ResultsSnapshot};
pub use workflow::{QuizWorkflow, RestartOutcome};
