use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{Clock, ProgressService, QuizWorkflow};
use storage::repository::{InMemoryStore, KeyValueStore};
use yixiang_core::model::Catalog;
use yixiang_core::narrative::NarrativeTable;
use yixiang_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;

struct TestApp {
    workflow: Arc<QuizWorkflow>,
}

impl UiApp for TestApp {
    fn workflow(&self) -> Arc<QuizWorkflow> {
        Arc::clone(&self.workflow)
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(app));
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub progress: ProgressService,
    pub catalog: Arc<Catalog>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending tasks until the initial progress load has rendered.
    pub async fn settle(&mut self) {
        for _ in 0..5 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness(store: Arc<dyn KeyValueStore>) -> ViewHarness {
    let catalog = Arc::new(Catalog::builtin().expect("builtin catalog"));
    let progress = ProgressService::new(Clock::fixed(fixed_now()), store);
    let workflow = Arc::new(QuizWorkflow::new(
        Arc::clone(&catalog),
        Arc::new(NarrativeTable::empty()),
        progress.clone(),
    ));

    let dom = VirtualDom::new_with_props(
        QuizHarness,
        QuizHarnessProps {
            app: Arc::new(TestApp { workflow }),
        },
    );

    ViewHarness {
        dom,
        progress,
        catalog,
    }
}

pub fn setup_in_memory_harness() -> ViewHarness {
    setup_quiz_harness(Arc::new(InMemoryStore::new()))
}

/// Render a component once, without async work.
pub fn render_once(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}
