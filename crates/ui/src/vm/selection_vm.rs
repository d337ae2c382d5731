use services::{DimensionCard, QuizSnapshot};
use yixiang_core::model::{Category, DimensionStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DimensionCardVm {
    pub category: Category,
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
}

impl From<&DimensionCard> for DimensionCardVm {
    fn from(card: &DimensionCard) -> Self {
        Self {
            category: card.category,
            name: card.name.clone(),
            symbol: card.symbol.clone(),
            description: card.description.clone(),
            status_label: status_label(card.status),
            status_class: status_class(card.status),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DimensionGroupVm {
    pub title: &'static str,
    pub cards: Vec<DimensionCardVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionVm {
    pub progress_label: String,
    pub progress_percent: u32,
    pub groups: Vec<DimensionGroupVm>,
    pub can_view_results: bool,
}

#[must_use]
pub fn status_label(status: DimensionStatus) -> &'static str {
    match status {
        DimensionStatus::Untested => "未测试",
        DimensionStatus::CompletedUnqualified => "已完成",
        DimensionStatus::Qualified => "已达标",
    }
}

fn status_class(status: DimensionStatus) -> &'static str {
    match status {
        DimensionStatus::Untested => "status-untested",
        DimensionStatus::CompletedUnqualified => "status-completed",
        DimensionStatus::Qualified => "status-qualified",
    }
}

#[must_use]
pub fn map_selection(snapshot: &QuizSnapshot) -> SelectionVm {
    let groups = Category::ALL
        .into_iter()
        .map(|category| DimensionGroupVm {
            title: category.label(),
            cards: snapshot.cards(category).map(DimensionCardVm::from).collect(),
        })
        .collect();

    let overall = snapshot.overall;
    SelectionVm {
        progress_label: format!("已完成 {} / 共 {} 组", overall.completed, overall.total),
        progress_percent: percent(overall.completed, overall.total),
        groups,
        can_view_results: snapshot.results_available,
    }
}

pub(crate) fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    u32::try_from(part.min(whole) * 100 / whole).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::test_support::snapshot_with;

    #[test]
    fn groups_follow_category_order() {
        let snapshot = snapshot_with(&[]);
        let vm = map_selection(&snapshot);
        assert_eq!(vm.groups.len(), 2);
        assert_eq!(vm.groups[0].title, "先天人性");
        assert_eq!(vm.groups[0].cards.len(), 8);
        assert_eq!(vm.groups[0].cards[0].name, "紫薇");
        assert_eq!(vm.groups[1].title, "后天人格");
        assert_eq!(vm.progress_label, "已完成 0 / 共 16 组");
        assert_eq!(vm.progress_percent, 0);
        assert!(!vm.can_view_results);
    }

    #[test]
    fn badges_reflect_status() {
        let snapshot = snapshot_with(&[
            (Category::Nature, "紫薇", 7),
            (Category::Nature, "天机", 3),
            (Category::Personality, "君主", 9),
        ]);
        let vm = map_selection(&snapshot);
        let natures = &vm.groups[0].cards;
        assert_eq!(natures[0].status_label, "已达标");
        assert_eq!(natures[0].status_class, "status-qualified");
        assert_eq!(natures[1].status_label, "已完成");
        assert_eq!(natures[2].status_label, "未测试");
        assert_eq!(vm.progress_percent, 18);
        assert!(vm.can_view_results);
    }

    #[test]
    fn percent_handles_empty_catalog() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(16, 16), 100);
    }
}
