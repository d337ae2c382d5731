use dioxus::prelude::*;

use crate::vm::{DimensionCardVm, DimensionGroupVm, QuizIntent, SelectionVm};

#[component]
pub fn SelectionPage(vm: SelectionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "page selection-page",
            header { class: "page-header",
                h1 { "易象心学测评" }
                p { class: "subtitle", "每组 9 题,7 题及以上回答「是」即为达标" }
            }

            div { class: "overall-progress",
                div { class: "progress-bar",
                    div { class: "progress-fill", style: "width: {vm.progress_percent}%" }
                }
                p { class: "progress-text", "{vm.progress_label}" }
            }

            for group in vm.groups.iter() {
                DimensionGroup { key: "{group.title}", group: group.clone(), on_intent }
            }

            div { class: "page-actions",
                button {
                    class: "btn btn-primary",
                    disabled: !vm.can_view_results,
                    onclick: move |_| on_intent.call(QuizIntent::ViewResults),
                    "查看结果"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_intent.call(QuizIntent::RequestRestart),
                    "重新开始"
                }
            }
        }
    }
}

#[component]
fn DimensionGroup(group: DimensionGroupVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "dimension-group",
            h2 { "{group.title}" }
            div { class: "dimension-grid",
                for card in group.cards.iter() {
                    DimensionCardView { key: "{card.name}", card: card.clone(), on_intent }
                }
            }
        }
    }
}

#[component]
fn DimensionCardView(card: DimensionCardVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let category = card.category;
    let name = card.name.clone();

    rsx! {
        button {
            class: "dimension-card {card.status_class}",
            onclick: move |_| {
                on_intent.call(QuizIntent::Start {
                    category,
                    name: name.clone(),
                });
            },
            span { class: "dimension-symbol", "{card.symbol}" }
            span { class: "dimension-name", "{card.name}" }
            span { class: "dimension-description", "{card.description}" }
            span { class: "status-badge", "{card.status_label}" }
        }
    }
}
