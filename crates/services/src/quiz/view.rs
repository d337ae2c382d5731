use yixiang_core::browser::BrowserPage;
use yixiang_core::model::{Catalog, Category, DimensionStatus};
use yixiang_core::narrative::{Narrative, NarrativeTable, ResultCard};
use yixiang_core::quiz::{OverallProgress, overall_progress};
use yixiang_core::scoring::results_available;

use super::context::{QuizContext, ResultsState, Screen};

/// Presentation-agnostic snapshot of everything the view needs to redraw.
///
/// This is intentionally **not** a UI view-model: no markup and no layout decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub screen: Screen,
    pub overall: OverallProgress,
    pub dimensions: Vec<DimensionCard>,
    pub results_available: bool,
    pub question: Option<QuestionSnapshot>,
    pub results: Option<ResultsSnapshot>,
    pub restart_pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionCard {
    pub category: Category,
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub status: DimensionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSnapshot {
    pub category: Category,
    pub dimension: String,
    pub symbol: String,
    pub description: String,
    /// One-based.
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub previous_answer: Option<bool>,
    pub can_go_back: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexItem {
    pub index: usize,
    pub full_name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardSnapshot {
    Detailed(Box<Narrative>),
    Basic {
        full_name: String,
        nature: String,
        personality: String,
        note: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsSnapshot {
    pub natures_text: String,
    pub personalities_text: String,
    pub match_count: usize,
    pub index: Vec<IndexItem>,
    pub page: BrowserPage,
    pub card: Option<CardSnapshot>,
}

impl QuizSnapshot {
    #[must_use]
    pub fn capture(ctx: &QuizContext, catalog: &Catalog, narratives: &NarrativeTable) -> Self {
        let dimensions = Category::ALL
            .iter()
            .copied()
            .flat_map(|category| {
                catalog
                    .dimensions(category)
                    .iter()
                    .map(move |def| DimensionCard {
                        category,
                        name: def.name().to_owned(),
                        symbol: def.symbol().to_owned(),
                        description: def.description().to_owned(),
                        status: ctx.progress.status(category, def.name()),
                    })
            })
            .collect();

        let question = ctx.session.question(catalog).map(|q| QuestionSnapshot {
            category: q.category,
            dimension: q.dimension.name().to_owned(),
            symbol: q.dimension.symbol().to_owned(),
            description: q.dimension.description().to_owned(),
            number: q.number(),
            total: q.total(),
            text: q.text.to_owned(),
            previous_answer: q.previous_answer,
            can_go_back: q.can_go_back(),
        });

        Self {
            screen: ctx.screen,
            overall: overall_progress(catalog, &ctx.progress),
            dimensions,
            results_available: results_available(catalog, &ctx.progress),
            question,
            results: ctx
                .results
                .as_ref()
                .map(|results| ResultsSnapshot::capture(results, narratives)),
            restart_pending: ctx.restart_pending,
        }
    }

    /// Cards of one category in catalog order.
    pub fn cards(&self, category: Category) -> impl Iterator<Item = &DimensionCard> {
        self.dimensions.iter().filter(move |c| c.category == category)
    }
}

impl ResultsSnapshot {
    fn capture(results: &ResultsState, narratives: &NarrativeTable) -> Self {
        let browser = &results.browser;
        let card = browser.current().map(|combination| {
            match ResultCard::for_combination(combination, narratives) {
                ResultCard::Detailed(narrative) => {
                    CardSnapshot::Detailed(Box::new(narrative.clone()))
                }
                ResultCard::Basic {
                    full_name,
                    nature,
                    personality,
                    note,
                } => CardSnapshot::Basic {
                    full_name: full_name.to_owned(),
                    nature: nature.to_owned(),
                    personality: personality.to_owned(),
                    note: note.to_owned(),
                },
            }
        });

        Self {
            natures_text: results.summary.natures_text(),
            personalities_text: results.summary.personalities_text(),
            match_count: results.summary.match_count,
            index: browser
                .entries()
                .map(|entry| IndexItem {
                    index: entry.index,
                    full_name: entry.combination.full_name.clone(),
                    active: entry.active,
                })
                .collect(),
            page: browser.page(),
            card,
        }
    }
}
