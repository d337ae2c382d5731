use std::sync::Arc;

use yixiang_core::model::{Catalog, Category};
use yixiang_core::narrative::NarrativeTable;
use yixiang_core::quiz::AnswerOutcome;
use yixiang_core::scoring::ResultSummary;

use super::context::{QuizContext, ResultsState, Screen};
use super::view::QuizSnapshot;
use crate::error::WorkflowError;
use crate::progress_service::ProgressService;

/// Outcome of answering the restart confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartOutcome {
    /// No prompt was pending; nothing changed.
    NotRequested,
    /// The user declined; nothing changed.
    Cancelled,
    /// All progress was reset. `persisted` is false if the saved blob could not be removed.
    Reset { persisted: bool },
}

/// Orchestrates the quiz: session transitions, best-effort persistence, results and the
/// restart gate.
///
/// Holds only immutable collaborators; all mutable state lives in the caller-owned
/// `QuizContext`.
#[derive(Clone)]
pub struct QuizWorkflow {
    catalog: Arc<Catalog>,
    narratives: Arc<NarrativeTable>,
    progress: ProgressService,
}

impl QuizWorkflow {
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        narratives: Arc<NarrativeTable>,
        progress: ProgressService,
    ) -> Self {
        Self {
            catalog,
            narratives,
            progress,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn narratives(&self) -> &NarrativeTable {
        &self.narratives
    }

    /// Build a fresh context from saved progress (defaults if none is usable).
    pub async fn load(&self) -> QuizContext {
        QuizContext::new(self.progress.load(&self.catalog).await)
    }

    #[must_use]
    pub fn snapshot(&self, ctx: &QuizContext) -> QuizSnapshot {
        QuizSnapshot::capture(ctx, &self.catalog, &self.narratives)
    }

    /// Begin testing a dimension from its first question.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Quiz` if the dimension is not in the catalog.
    pub fn start_dimension(
        &self,
        ctx: &mut QuizContext,
        category: Category,
        name: &str,
    ) -> Result<(), WorkflowError> {
        ctx.session.start_dimension(&self.catalog, category, name)?;
        ctx.screen = Screen::Question;
        tracing::debug!(%category, dimension = name, "started dimension");
        Ok(())
    }

    /// Answer the current question; the ninth answer finalizes and saves.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Quiz` when no dimension is under test.
    pub async fn answer(
        &self,
        ctx: &mut QuizContext,
        value: bool,
    ) -> Result<AnswerOutcome, WorkflowError> {
        let outcome = ctx.session.submit_answer(&mut ctx.progress, value)?;
        if let AnswerOutcome::Finished(verdict) = &outcome {
            tracing::info!(
                category = %verdict.category,
                dimension = %verdict.dimension,
                yes = verdict.yes_count,
                qualified = verdict.qualified,
                "dimension finalized"
            );
            ctx.screen = Screen::Selection;
            ctx.results = None;
            self.progress.save(&mut ctx.progress).await;
        }
        Ok(outcome)
    }

    /// Step back one question. Returns `false` at the first question.
    pub fn previous_question(&self, ctx: &mut QuizContext) -> bool {
        ctx.session.go_to_previous_question()
    }

    /// Return to the dimension selection page, abandoning any unfinished dimension.
    pub fn back_to_selection(&self, ctx: &mut QuizContext) {
        if !ctx.session.is_idle() {
            tracing::debug!("abandoned unfinished dimension");
        }
        ctx.session.abandon();
        ctx.screen = Screen::Selection;
    }

    /// Compute combinations from the current progress and show the first one.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::QuizInProgress` while a dimension is under test.
    pub fn view_results<'a>(
        &self,
        ctx: &'a mut QuizContext,
    ) -> Result<&'a ResultsState, WorkflowError> {
        if !ctx.session.is_idle() {
            return Err(WorkflowError::QuizInProgress);
        }
        let summary = ResultSummary::compute(&self.catalog, &ctx.progress);
        tracing::debug!(matches = summary.match_count, "computed results");
        ctx.screen = Screen::Results;
        Ok(ctx.results.insert(ResultsState::new(summary)))
    }

    pub fn next_result(&self, ctx: &mut QuizContext) -> bool {
        ctx.results.as_mut().is_some_and(|r| r.browser.next())
    }

    pub fn previous_result(&self, ctx: &mut QuizContext) -> bool {
        ctx.results.as_mut().is_some_and(|r| r.browser.previous())
    }

    /// Jump to a result by index. `index` must come from the rendered index list.
    pub fn jump_to_result(&self, ctx: &mut QuizContext, index: usize) {
        if let Some(results) = ctx.results.as_mut() {
            results.browser.jump_to(index);
        }
    }

    /// Raise the restart confirmation prompt. Nothing is changed yet.
    pub fn request_restart(&self, ctx: &mut QuizContext) {
        ctx.restart_pending = true;
    }

    /// Resolve the restart prompt.
    ///
    /// Declining leaves all state and the saved blob untouched. Confirming resets every
    /// dimension, removes the saved blob and returns to the selection page.
    pub async fn resolve_restart(&self, ctx: &mut QuizContext, confirmed: bool) -> RestartOutcome {
        if !std::mem::take(&mut ctx.restart_pending) {
            return RestartOutcome::NotRequested;
        }
        if !confirmed {
            tracing::debug!("restart cancelled");
            return RestartOutcome::Cancelled;
        }

        ctx.progress.reset();
        ctx.session.abandon();
        ctx.results = None;
        ctx.screen = Screen::Selection;
        let persisted = self.progress.clear().await;
        tracing::info!(persisted, "progress reset");
        RestartOutcome::Reset { persisted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use storage::repository::{InMemoryStore, KeyValueStore};
    use storage::PROGRESS_KEY;
    use yixiang_core::model::{DimensionStatus, Progress};
    use yixiang_core::scoring::NO_COMBINATION;
    use yixiang_core::time::fixed_clock;

    fn workflow(store: Arc<InMemoryStore>) -> QuizWorkflow {
        QuizWorkflow::new(
            Arc::new(Catalog::builtin().unwrap()),
            Arc::new(NarrativeTable::empty()),
            ProgressService::new(fixed_clock(), store),
        )
    }

    async fn answer_dimension(
        wf: &QuizWorkflow,
        ctx: &mut QuizContext,
        category: Category,
        name: &str,
        yes: usize,
    ) {
        wf.start_dimension(ctx, category, name).unwrap();
        for i in 0..9 {
            wf.answer(ctx, i < yes).await.unwrap();
        }
    }

    #[tokio::test]
    async fn finalizing_saves_progress() {
        let store = Arc::new(InMemoryStore::new());
        let wf = workflow(store.clone());
        let mut ctx = wf.load().await;

        answer_dimension(&wf, &mut ctx, Category::Nature, "紫薇", 7).await;

        assert_eq!(ctx.screen(), Screen::Selection);
        assert_eq!(
            ctx.progress().status(Category::Nature, "紫薇"),
            DimensionStatus::Qualified
        );
        assert!(store.get(PROGRESS_KEY).await.unwrap().is_some());

        let reloaded = wf.load().await;
        assert_eq!(
            reloaded.progress().status(Category::Nature, "紫薇"),
            DimensionStatus::Qualified
        );
    }

    #[tokio::test]
    async fn unfinished_dimension_is_not_saved() {
        let store = Arc::new(InMemoryStore::new());
        let wf = workflow(store.clone());
        let mut ctx = wf.load().await;

        wf.start_dimension(&mut ctx, Category::Nature, "天机").unwrap();
        for _ in 0..4 {
            wf.answer(&mut ctx, true).await.unwrap();
        }
        wf.back_to_selection(&mut ctx);

        assert_eq!(ctx.screen(), Screen::Selection);
        assert!(store.get(PROGRESS_KEY).await.unwrap().is_none());
        assert_eq!(
            ctx.progress().status(Category::Nature, "天机"),
            DimensionStatus::Untested
        );
    }

    #[tokio::test]
    async fn results_reset_cursor_on_each_view() {
        let wf = workflow(Arc::new(InMemoryStore::new()));
        let mut ctx = wf.load().await;
        answer_dimension(&wf, &mut ctx, Category::Nature, "紫薇", 9).await;
        answer_dimension(&wf, &mut ctx, Category::Nature, "天机", 8).await;
        answer_dimension(&wf, &mut ctx, Category::Personality, "君主", 7).await;

        let results = wf.view_results(&mut ctx).unwrap();
        assert_eq!(results.summary.match_count, 2);
        assert!(wf.next_result(&mut ctx));
        assert!(!wf.next_result(&mut ctx));

        wf.back_to_selection(&mut ctx);
        let results = wf.view_results(&mut ctx).unwrap();
        assert_eq!(results.browser.cursor(), 0);
        assert_eq!(ctx.screen(), Screen::Results);
    }

    #[tokio::test]
    async fn results_borrow_follows_context_not_workflow() {
        let store = Arc::new(InMemoryStore::new());
        let mut ctx = workflow(store.clone()).load().await;

        let results = {
            let short_lived = workflow(store);
            short_lived.view_results(&mut ctx).unwrap()
        };

        assert_eq!(results.browser.cursor(), 0);
        assert_eq!(results.summary.match_count, 0);
    }

    #[tokio::test]
    async fn empty_results_show_placeholder() {
        let wf = workflow(Arc::new(InMemoryStore::new()));
        let mut ctx = wf.load().await;
        let results = wf.view_results(&mut ctx).unwrap();
        assert_eq!(results.summary.combinations.len(), 1);
        assert_eq!(results.summary.combinations[0].full_name, NO_COMBINATION);
        assert!(!wf.snapshot(&ctx).results_available);
    }

    #[tokio::test]
    async fn results_blocked_during_question() {
        let wf = workflow(Arc::new(InMemoryStore::new()));
        let mut ctx = wf.load().await;
        wf.start_dimension(&mut ctx, Category::Nature, "紫薇").unwrap();
        assert!(matches!(
            wf.view_results(&mut ctx),
            Err(WorkflowError::QuizInProgress)
        ));
    }

    #[tokio::test]
    async fn restart_declined_changes_nothing() {
        let store = Arc::new(InMemoryStore::new());
        let wf = workflow(store.clone());
        let mut ctx = wf.load().await;
        answer_dimension(&wf, &mut ctx, Category::Nature, "紫薇", 9).await;
        let blob_before = store.get(PROGRESS_KEY).await.unwrap();
        let progress_before = ctx.progress().clone();

        wf.request_restart(&mut ctx);
        assert!(ctx.restart_pending());
        let outcome = wf.resolve_restart(&mut ctx, false).await;

        assert_eq!(outcome, RestartOutcome::Cancelled);
        assert!(!ctx.restart_pending());
        assert_eq!(ctx.progress(), &progress_before);
        assert_eq!(store.get(PROGRESS_KEY).await.unwrap(), blob_before);
    }

    #[tokio::test]
    async fn restart_confirmed_clears_state_and_blob() {
        let store = Arc::new(InMemoryStore::new());
        let wf = workflow(store.clone());
        let mut ctx = wf.load().await;
        answer_dimension(&wf, &mut ctx, Category::Nature, "紫薇", 9).await;
        answer_dimension(&wf, &mut ctx, Category::Personality, "君主", 9).await;
        wf.view_results(&mut ctx).unwrap();

        wf.request_restart(&mut ctx);
        let outcome = wf.resolve_restart(&mut ctx, true).await;

        assert_eq!(outcome, RestartOutcome::Reset { persisted: true });
        assert_eq!(ctx.progress(), &Progress::for_catalog(wf.catalog()));
        assert!(ctx.results().is_none());
        assert_eq!(ctx.screen(), Screen::Selection);
        assert!(store.get(PROGRESS_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn resolve_without_request_is_noop() {
        let wf = workflow(Arc::new(InMemoryStore::new()));
        let mut ctx = wf.load().await;
        answer_dimension(&wf, &mut ctx, Category::Nature, "紫薇", 9).await;
        let before = ctx.clone();
        assert_eq!(
            wf.resolve_restart(&mut ctx, true).await,
            RestartOutcome::NotRequested
        );
        assert_eq!(ctx, before);
    }
}
