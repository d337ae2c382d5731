use dioxus::prelude::*;

use services::{QuizContext, QuizSnapshot, Screen};

use crate::context::AppContext;
use crate::views::{
    ConfirmModal, QuestionPage, ResultsPage, SelectionPage, ViewState,
    view_state_from_resource,
};
use crate::vm::{QuizIntent, apply_intent, map_question, map_results, map_selection};

fn render_screen(snapshot: &QuizSnapshot, on_intent: EventHandler<QuizIntent>) -> Element {
    let selection = || rsx! { SelectionPage { vm: map_selection(snapshot), on_intent } };

    match snapshot.screen {
        Screen::Selection => selection(),
        Screen::Question => match snapshot.question.as_ref() {
            Some(question) => rsx! { QuestionPage { vm: map_question(question), on_intent } },
            None => selection(),
        },
        Screen::Results => match snapshot.results.as_ref() {
            Some(results) => rsx! { ResultsPage { vm: map_results(results), on_intent } },
            None => selection(),
        },
    }
}

/// Root of the quiz: loads saved progress once, then routes intents through the workflow.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let workflow = ctx.workflow();

    let mut quiz = use_signal(|| None::<QuizContext>);
    let mut busy = use_signal(|| false);

    let resource = {
        let workflow = workflow.clone();
        use_resource(move || {
            let workflow = workflow.clone();
            async move {
                let loaded = workflow.load().await;
                quiz.set(Some(loaded));
            }
        })
    };
    let state = view_state_from_resource(&resource);

    let on_intent = {
        let workflow = workflow.clone();
        use_callback(move |intent: QuizIntent| {
            if *busy.peek() {
                return;
            }
            let Some(mut current) = quiz.peek().as_ref().cloned() else {
                return;
            };
            busy.set(true);
            let workflow = workflow.clone();
            spawn(async move {
                if let Err(err) = apply_intent(&workflow, &mut current, intent).await {
                    tracing::warn!(error = %err, "quiz action rejected");
                }
                quiz.set(Some(current));
                busy.set(false);
            });
        })
    };

    let snapshot = quiz.read().as_ref().map(|current| workflow.snapshot(current));

    rsx! {
        div { class: "quiz",
            match (state, snapshot) {
                (ViewState::Ready(()), Some(snapshot)) => rsx! {
                    {render_screen(&snapshot, on_intent)}
                    if snapshot.restart_pending {
                        ConfirmModal { on_intent }
                    }
                },
                _ => rsx! {
                    p { class: "loading", "加载中..." }
                },
            }
        }
    }
}
