use dioxus::prelude::*;

use crate::vm::QuizIntent;

#[component]
pub fn ConfirmModal(on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                h3 { "重新开始" }
                p { "确定要重新开始吗?所有测试进度将被清除。" }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_intent.call(QuizIntent::CancelRestart),
                        "取消"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_intent.call(QuizIntent::ConfirmRestart),
                        "确定"
                    }
                }
            }
        }
    }
}
