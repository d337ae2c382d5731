use services::QuestionSnapshot;

use crate::vm::selection_vm::percent;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub phase_label: String,
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub counter_label: String,
    pub progress_percent: u32,
    pub text: String,
    /// Earlier answer at this question, highlighted after navigating back.
    pub previous_answer: Option<bool>,
    pub can_go_back: bool,
}

#[must_use]
pub fn map_question(question: &QuestionSnapshot) -> QuestionVm {
    QuestionVm {
        phase_label: format!("{}测试", question.category.label()),
        name: question.dimension.clone(),
        symbol: question.symbol.clone(),
        description: question.description.clone(),
        counter_label: format!("第 {} 题 / 共 {} 题", question.number, question.total),
        progress_percent: percent(question.number, question.total),
        text: question.text.clone(),
        previous_answer: question.previous_answer,
        can_go_back: question.can_go_back,
    }
}
