use yixiang_core::browser::ResultBrowser;
use yixiang_core::model::Progress;
use yixiang_core::quiz::QuizSession;
use yixiang_core::scoring::ResultSummary;

/// Page the user is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Selection,
    Question,
    Results,
}

/// Computed results plus the browsing cursor over them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsState {
    pub summary: ResultSummary,
    pub browser: ResultBrowser,
}

impl ResultsState {
    #[must_use]
    pub fn new(summary: ResultSummary) -> Self {
        let browser = ResultBrowser::new(summary.combinations.clone());
        Self { summary, browser }
    }
}

/// The single mutable state of a quiz run.
///
/// Owned by the caller and passed by `&mut` into `QuizWorkflow`; there is no ambient
/// global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizContext {
    pub(crate) progress: Progress,
    pub(crate) session: QuizSession,
    pub(crate) screen: Screen,
    pub(crate) results: Option<ResultsState>,
    pub(crate) restart_pending: bool,
}

impl QuizContext {
    #[must_use]
    pub fn new(progress: Progress) -> Self {
        Self {
            progress,
            session: QuizSession::new(),
            screen: Screen::Selection,
            results: None,
            restart_pending: false,
        }
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn results(&self) -> Option<&ResultsState> {
        self.results.as_ref()
    }

    #[must_use]
    pub fn restart_pending(&self) -> bool {
        self.restart_pending
    }
}
