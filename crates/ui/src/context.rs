use std::sync::Arc;

use services::QuizWorkflow;

pub trait UiApp: Send + Sync {
    fn workflow(&self) -> Arc<QuizWorkflow>;
}

#[derive(Clone)]
pub struct AppContext {
    workflow: Arc<QuizWorkflow>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            workflow: app.workflow(),
        }
    }

    #[must_use]
    pub fn workflow(&self) -> Arc<QuizWorkflow> {
        Arc::clone(&self.workflow)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(&app)
}
