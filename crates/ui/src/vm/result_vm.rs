use services::{CardSnapshot, ResultsSnapshot};
use yixiang_core::narrative::Narrative;

use crate::vm::markdown_vm::{inline_markdown_to_html, markdown_to_html};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexItemVm {
    pub index: usize,
    pub label: String,
    pub active: bool,
}

impl IndexItemVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.active {
            "index-item active"
        } else {
            "index-item"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NarrativeSectionVm {
    pub heading: String,
    /// Sanitized HTML.
    pub body_html: String,
    pub highlight: bool,
}

impl NarrativeSectionVm {
    #[must_use]
    pub fn body_class(&self) -> &'static str {
        if self.highlight {
            "section-highlight"
        } else {
            "section-content"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultCardVm {
    Detailed {
        hexagram: String,
        title: String,
        category: String,
        sections: Vec<NarrativeSectionVm>,
    },
    Basic {
        title: String,
        nature: String,
        personality: String,
        note: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub natures_text: String,
    pub personalities_text: String,
    pub count_label: String,
    pub index: Vec<IndexItemVm>,
    pub page_label: String,
    pub has_previous: bool,
    pub has_next: bool,
    pub card: Option<ResultCardVm>,
}

#[must_use]
pub fn map_results(results: &ResultsSnapshot) -> ResultsVm {
    ResultsVm {
        natures_text: results.natures_text.clone(),
        personalities_text: results.personalities_text.clone(),
        count_label: format!("共 {} 种", results.match_count),
        index: results
            .index
            .iter()
            .map(|item| IndexItemVm {
                index: item.index,
                label: item.full_name.clone(),
                active: item.active,
            })
            .collect(),
        page_label: format!("{} / {}", results.page.index + 1, results.page.total),
        has_previous: results.page.has_previous,
        has_next: results.page.has_next,
        card: results.card.as_ref().map(map_card),
    }
}

fn map_card(card: &CardSnapshot) -> ResultCardVm {
    match card {
        CardSnapshot::Detailed(narrative) => map_narrative(narrative),
        CardSnapshot::Basic {
            full_name,
            nature,
            personality,
            note,
        } => ResultCardVm::Basic {
            title: full_name.clone(),
            nature: nature.clone(),
            personality: personality.clone(),
            note: note.clone(),
        },
    }
}

fn map_narrative(narrative: &Narrative) -> ResultCardVm {
    let s = &narrative.sections;
    let intro_body = format!(
        "<p><strong>卦名与结构:</strong> {}</p><p><strong>核心心理意象:</strong> {}</p>",
        inline_markdown_to_html(&s.intro.gua_name),
        inline_markdown_to_html(&s.intro.core),
    );
    let balance_body = format!(
        "<p><strong>命运趋势:</strong> {}</p><div class=\"section-highlight\"><strong>平衡之道:</strong> {}</div>",
        inline_markdown_to_html(&s.balance.trend),
        inline_markdown_to_html(&s.balance.path),
    );

    let plain = [
        (&s.nature, false),
        (&s.personality, false),
        (&s.dynamics, false),
        (&s.advantages, false),
        (&s.challenges, false),
        (&s.meaning, true),
    ];

    let mut bodies = Vec::with_capacity(8);
    bodies.push((s.intro.title.as_str(), intro_body, false));
    bodies.extend(plain.into_iter().map(|(section, highlight)| {
        (
            section.title.as_str(),
            markdown_to_html(&section.content),
            highlight,
        )
    }));
    bodies.push((s.balance.title.as_str(), balance_body, false));

    let sections = bodies
        .into_iter()
        .enumerate()
        .map(|(i, (title, body_html, highlight))| NarrativeSectionVm {
            heading: format!("{}. {}", i + 1, title),
            body_html,
            highlight,
        })
        .collect();

    ResultCardVm::Detailed {
        hexagram: narrative.hexagram.clone(),
        title: narrative.title.clone(),
        category: narrative.category.clone(),
        sections,
    }
}
