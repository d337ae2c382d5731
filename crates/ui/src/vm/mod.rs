mod intent_vm;
mod markdown_vm;
mod question_vm;
mod result_vm;
mod selection_vm;

pub use intent_vm::{QuizIntent, apply_intent};
pub use markdown_vm::{inline_markdown_to_html, markdown_to_html, sanitize_html};
pub use question_vm::{QuestionVm, map_question};
pub use result_vm::{IndexItemVm, NarrativeSectionVm, ResultCardVm, ResultsVm, map_results};
pub use selection_vm::{
    DimensionCardVm, DimensionGroupVm, SelectionVm, map_selection, status_label,
};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use services::{Clock, ProgressService, QuizContext, QuizSnapshot, QuizWorkflow};
    use storage::InMemoryStore;
    use yixiang_core::model::{Catalog, Category, Progress};
    use yixiang_core::narrative::NarrativeTable;
    use yixiang_core::time::fixed_now;

    /// One narrative for 紫薇·君主 (lookup key 1).
    pub const SAMPLE_NARRATIVES: &str = r#"{
      "1": {
        "hexagram": "乾",
        "title": "紫薇·君主",
        "category": "天行健",
        "sections": {
          "intro": { "title": "概述", "guaName": "乾为天", "core": "**统御**之象" },
          "nature": { "title": "先天", "content": "紫薇坐命" },
          "personality": { "title": "后天", "content": "君主之风" },
          "dynamics": { "title": "互动", "content": "相生<script>alert(1)</script>" },
          "advantages": { "title": "优势", "content": "- 果断\n- 担当" },
          "challenges": { "title": "挑战", "content": "专断" },
          "meaning": { "title": "启示", "content": "自强不息" },
          "balance": { "title": "平衡", "trend": "上行", "path": "谦和" }
        }
      }
    }"#;

    pub fn workflow_with_narratives(json: &str) -> QuizWorkflow {
        QuizWorkflow::new(
            Arc::new(Catalog::builtin().unwrap()),
            Arc::new(NarrativeTable::from_json(json).unwrap()),
            ProgressService::new(Clock::fixed(fixed_now()), Arc::new(InMemoryStore::new())),
        )
    }

    pub fn workflow() -> QuizWorkflow {
        workflow_with_narratives("{}")
    }

    /// Context where each `(category, name, yes)` dimension is already finalized.
    pub fn context_with(wf: &QuizWorkflow, done: &[(Category, &str, usize)]) -> QuizContext {
        let mut progress = Progress::for_catalog(wf.catalog());
        for (category, name, yes) in done {
            let answers = (0..9).map(|i| Some(i < *yes)).collect();
            progress.record_verdict(*category, name, answers);
        }
        QuizContext::new(progress)
    }

    pub fn snapshot_with(done: &[(Category, &str, usize)]) -> QuizSnapshot {
        let wf = workflow();
        let ctx = context_with(&wf, done);
        wf.snapshot(&ctx)
    }
}
