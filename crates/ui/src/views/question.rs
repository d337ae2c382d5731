use dioxus::prelude::*;

use crate::vm::{QuestionVm, QuizIntent};

fn answer_class(selected: bool) -> &'static str {
    if selected {
        "btn btn-answer selected"
    } else {
        "btn btn-answer"
    }
}

#[component]
pub fn QuestionPage(vm: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let yes_class = answer_class(vm.previous_answer == Some(true));
    let no_class = answer_class(vm.previous_answer == Some(false));

    rsx! {
        section { class: "page question-page",
            div { class: "question-progress",
                p { class: "phase-text", "{vm.phase_label}" }
                div { class: "progress-bar",
                    div { class: "progress-fill", style: "width: {vm.progress_percent}%" }
                }
                p { class: "progress-text", "{vm.counter_label}" }
            }

            div { class: "group-header",
                span { class: "group-symbol", "{vm.symbol}" }
                h2 { class: "group-name", "{vm.name}" }
                p { class: "group-description", "{vm.description}" }
            }

            div { class: "question-card",
                p { class: "question-text", "{vm.text}" }
                div { class: "answer-buttons",
                    button {
                        id: "answer-yes",
                        class: yes_class,
                        onclick: move |_| on_intent.call(QuizIntent::Answer(true)),
                        "是"
                    }
                    button {
                        id: "answer-no",
                        class: no_class,
                        onclick: move |_| on_intent.call(QuizIntent::Answer(false)),
                        "否"
                    }
                }
            }

            div { class: "page-actions",
                button {
                    id: "question-prev",
                    class: "btn btn-secondary",
                    disabled: !vm.can_go_back,
                    onclick: move |_| on_intent.call(QuizIntent::PreviousQuestion),
                    "上一题"
                }
                button {
                    class: "btn btn-link",
                    onclick: move |_| on_intent.call(QuizIntent::BackToSelection),
                    "返回选择"
                }
            }
        }
    }
}
