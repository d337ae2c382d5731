mod confirm;
mod question;
mod quiz;
mod results;
mod selection;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use confirm::ConfirmModal;
pub use question::QuestionPage;
pub use quiz::QuizView;
pub use results::{ResultCardView, ResultsPage};
pub use selection::SelectionPage;
pub use state::{ViewState, view_state_from_resource};
