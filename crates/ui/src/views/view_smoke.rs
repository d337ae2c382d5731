use std::sync::Arc;

use dioxus::prelude::*;
use storage::repository::InMemoryStore;
use yixiang_core::model::{Category, Progress};

use super::test_harness::{render_once, setup_in_memory_harness, setup_quiz_harness};
use crate::views::{ConfirmModal, QuestionPage, ResultsPage, SelectionPage};
use crate::vm::test_support::{
    SAMPLE_NARRATIVES, context_with, snapshot_with, workflow, workflow_with_narratives,
};
use crate::vm::{
    QuestionVm, QuizIntent, ResultsVm, SelectionVm, map_question, map_results, map_selection,
};

#[component]
fn SelectionHarness(vm: SelectionVm) -> Element {
    let on_intent = use_callback(|_: QuizIntent| {});
    rsx! { SelectionPage { vm, on_intent } }
}

#[component]
fn QuestionHarness(vm: QuestionVm) -> Element {
    let on_intent = use_callback(|_: QuizIntent| {});
    rsx! { QuestionPage { vm, on_intent } }
}

#[component]
fn ResultsHarness(vm: ResultsVm) -> Element {
    let on_intent = use_callback(|_: QuizIntent| {});
    rsx! { ResultsPage { vm, on_intent } }
}

#[component]
fn ConfirmHarness() -> Element {
    let on_intent = use_callback(|_: QuizIntent| {});
    rsx! { ConfirmModal { on_intent } }
}

fn first_question_vm() -> QuestionVm {
    let wf = workflow();
    let mut ctx = context_with(&wf, &[]);
    wf.start_dimension(&mut ctx, Category::Nature, "紫薇")
        .unwrap();
    map_question(wf.snapshot(&ctx).question.as_ref().unwrap())
}

#[test]
fn selection_page_smoke_renders_groups_and_badges() {
    let vm = map_selection(&snapshot_with(&[(Category::Nature, "紫薇", 7)]));
    let html = render_once(VirtualDom::new_with_props(
        SelectionHarness,
        SelectionHarnessProps { vm },
    ));

    assert!(html.contains("先天人性"), "missing nature group in {html}");
    assert!(html.contains("后天人格"), "missing personality group in {html}");
    assert!(html.contains("已达标"), "missing qualified badge in {html}");
    assert!(html.contains("status-qualified"), "missing badge class in {html}");
    assert!(html.contains("已完成 1 / 共 16 组"), "missing progress in {html}");
}

#[test]
fn question_page_smoke_renders_counter_and_answers() {
    let vm = first_question_vm();
    let html = render_once(VirtualDom::new_with_props(
        QuestionHarness,
        QuestionHarnessProps { vm: vm.clone() },
    ));
    assert!(html.contains("第 1 题 / 共 9 题"), "missing counter in {html}");
    assert!(html.contains(&vm.text), "missing question text in {html}");
    assert!(html.contains("disabled"), "previous should be disabled in {html}");

    let later = QuestionVm {
        can_go_back: true,
        previous_answer: Some(true),
        ..vm
    };
    let html = render_once(VirtualDom::new_with_props(
        QuestionHarness,
        QuestionHarnessProps { vm: later },
    ));
    assert!(html.contains("selected"), "missing earlier answer highlight in {html}");
}

#[test]
fn results_page_smoke_renders_sanitized_narrative() {
    let wf = workflow_with_narratives(SAMPLE_NARRATIVES);
    let mut ctx = context_with(
        &wf,
        &[(Category::Nature, "紫薇", 9), (Category::Personality, "君主", 9)],
    );
    wf.view_results(&mut ctx).unwrap();
    let vm = map_results(wf.snapshot(&ctx).results.as_ref().unwrap());

    let html = render_once(VirtualDom::new_with_props(
        ResultsHarness,
        ResultsHarnessProps { vm },
    ));
    assert!(html.contains("紫薇·君主"), "missing title in {html}");
    assert!(html.contains("<strong>统御</strong>"), "missing markdown in {html}");
    assert!(html.contains("1 / 1"), "missing pagination in {html}");
    assert!(!html.contains("<script"), "unsanitized narrative in {html}");
}

#[test]
fn results_page_smoke_renders_basic_card() {
    let wf = workflow();
    let mut ctx = context_with(
        &wf,
        &[(Category::Nature, "天机", 8), (Category::Personality, "谋士", 7)],
    );
    wf.view_results(&mut ctx).unwrap();
    let vm = map_results(wf.snapshot(&ctx).results.as_ref().unwrap());

    let html = render_once(VirtualDom::new_with_props(
        ResultsHarness,
        ResultsHarnessProps { vm },
    ));
    assert!(html.contains("天机·谋士"), "missing title in {html}");
    assert!(html.contains("详细解析数据正在补充中..."), "missing note in {html}");
}

#[test]
fn confirm_modal_smoke_renders_actions() {
    let html = render_once(VirtualDom::new(ConfirmHarness));
    assert!(html.contains("确定要重新开始吗"), "missing prompt in {html}");
    assert!(html.contains("取消"), "missing cancel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_selection_after_load() {
    let mut harness = setup_in_memory_harness();
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("易象心学测评"), "missing heading in {html}");
    assert!(html.contains("未测试"), "missing untested badge in {html}");
    assert!(!html.contains("确定要重新开始吗"), "modal should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_restores_saved_progress() {
    let store = Arc::new(InMemoryStore::new());
    let mut harness = setup_quiz_harness(store);

    let mut progress = Progress::for_catalog(&harness.catalog);
    progress.record_verdict(Category::Personality, "君主", vec![Some(true); 9]);
    assert!(harness.progress.save(&mut progress).await);

    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("已达标"), "missing restored badge in {html}");
    assert!(html.contains("已完成 1 / 共 16 组"), "missing progress in {html}");
}
