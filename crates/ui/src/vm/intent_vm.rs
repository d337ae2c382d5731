use services::{QuizContext, QuizWorkflow, WorkflowError};
use yixiang_core::model::Category;

/// User actions the quiz pages can raise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start { category: Category, name: String },
    Answer(bool),
    PreviousQuestion,
    BackToSelection,
    ViewResults,
    NextResult,
    PreviousResult,
    JumpTo(usize),
    RequestRestart,
    ConfirmRestart,
    CancelRestart,
}

/// Apply one intent to the quiz context.
///
/// # Errors
///
/// Returns `WorkflowError` when the workflow rejects the transition.
pub async fn apply_intent(
    workflow: &QuizWorkflow,
    ctx: &mut QuizContext,
    intent: QuizIntent,
) -> Result<(), WorkflowError> {
    match intent {
        QuizIntent::Start { category, name } => workflow.start_dimension(ctx, category, &name)?,
        QuizIntent::Answer(value) => {
            workflow.answer(ctx, value).await?;
        }
        QuizIntent::PreviousQuestion => {
            workflow.previous_question(ctx);
        }
        QuizIntent::BackToSelection => workflow.back_to_selection(ctx),
        QuizIntent::ViewResults => {
            workflow.view_results(ctx)?;
        }
        QuizIntent::NextResult => {
            workflow.next_result(ctx);
        }
        QuizIntent::PreviousResult => {
            workflow.previous_result(ctx);
        }
        QuizIntent::JumpTo(index) => workflow.jump_to_result(ctx, index),
        QuizIntent::RequestRestart => workflow.request_restart(ctx),
        QuizIntent::ConfirmRestart => {
            workflow.resolve_restart(ctx, true).await;
        }
        QuizIntent::CancelRestart => {
            workflow.resolve_restart(ctx, false).await;
        }
    }
    Ok(())
}
