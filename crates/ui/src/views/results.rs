use dioxus::prelude::*;

use crate::vm::{IndexItemVm, QuizIntent, ResultCardVm, ResultsVm};

#[component]
pub fn ResultsPage(vm: ResultsVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let card = vm.card.clone().map(|card| rsx! { ResultCardView { card } });

    rsx! {
        section { class: "page results-page",
            h1 { "测评结果" }

            div { class: "result-summary",
                p {
                    strong { "达标的先天人性:" }
                    span { id: "result-natures", "{vm.natures_text}" }
                }
                p {
                    strong { "达标的后天人格:" }
                    span { id: "result-personalities", "{vm.personalities_text}" }
                }
                p {
                    strong { "性格组合:" }
                    span { id: "result-count", "{vm.count_label}" }
                }
            }

            div { class: "result-layout",
                nav { class: "result-index",
                    for item in vm.index.iter() {
                        IndexEntry { key: "{item.index}", item: item.clone(), on_intent }
                    }
                }

                div { class: "result-main",
                    {card}

                    div { class: "pagination",
                        button {
                            id: "result-prev",
                            class: "btn btn-secondary",
                            disabled: !vm.has_previous,
                            onclick: move |_| on_intent.call(QuizIntent::PreviousResult),
                            "上一个"
                        }
                        span { class: "pagination-info", "{vm.page_label}" }
                        button {
                            id: "result-next",
                            class: "btn btn-secondary",
                            disabled: !vm.has_next,
                            onclick: move |_| on_intent.call(QuizIntent::NextResult),
                            "下一个"
                        }
                    }
                }
            }

            div { class: "page-actions",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_intent.call(QuizIntent::BackToSelection),
                    "返回选择"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_intent.call(QuizIntent::RequestRestart),
                    "重新开始"
                }
            }
        }
    }
}

#[component]
fn IndexEntry(item: IndexItemVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = item.index;

    rsx! {
        div {
            class: item.class(),
            onclick: move |_| on_intent.call(QuizIntent::JumpTo(index)),
            "{item.label}"
        }
    }
}

#[component]
pub fn ResultCardView(card: ResultCardVm) -> Element {
    match card {
        ResultCardVm::Detailed {
            hexagram,
            title,
            category,
            sections,
        } => rsx! {
            article { class: "result-card",
                div { class: "card-header",
                    div { class: "card-hexagram", "{hexagram}" }
                    h2 { class: "card-title", "{title}" }
                    p { class: "card-category", "{category}" }
                }
                for section in sections.iter() {
                    div { key: "{section.heading}", class: "card-section",
                        h3 { class: "section-title", "{section.heading}" }
                        div {
                            class: section.body_class(),
                            dangerous_inner_html: "{section.body_html}",
                        }
                    }
                }
            }
        },
        ResultCardVm::Basic {
            title,
            nature,
            personality,
            note,
        } => rsx! {
            article { class: "result-card",
                div { class: "card-header",
                    h2 { class: "card-title", "{title}" }
                }
                div { class: "card-section",
                    p { class: "section-content",
                        strong { "先天人性:" }
                        " {nature}"
                        br {}
                        strong { "后天人格:" }
                        " {personality}"
                        br {}
                        br {}
                        em { "{note}" }
                    }
                }
            }
        },
    }
}
