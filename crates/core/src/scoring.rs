//! Threshold qualification and nature × personality combinations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Catalog, Category, Progress};

/// Display entry used when a category has no qualified dimension.
pub const THRESHOLD_NOT_REACHED: &str = "未达到阈值";
/// Display name of the placeholder combination.
pub const NO_COMBINATION: &str = "未找到匹配的性格组合";
/// Nature/personality name carried by the placeholder combination.
pub const PLACEHOLDER_NAME: &str = "无";
/// Separator used when listing qualified names.
pub const LIST_SEPARATOR: &str = "、";

/// Lookup key into the narrative content table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CombinationKey(u16);

impl CombinationKey {
    #[must_use]
    pub fn new(value: u16) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for CombinationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name of a nature/personality pairing.
#[must_use]
pub fn full_name(nature: &str, personality: &str) -> String {
    format!("{nature}·{personality}")
}

/// Lookup key of a pairing: `nature_pos * personality_count + personality_pos + 1`.
///
/// `None` when either name is not in the catalog.
#[must_use]
pub fn combination_key(catalog: &Catalog, nature: &str, personality: &str) -> Option<CombinationKey> {
    let n = catalog.position(Category::Nature, nature)?;
    let p = catalog.position(Category::Personality, personality)?;
    let width = catalog.dimensions(Category::Personality).len();
    u16::try_from(n * width + p + 1).ok().map(CombinationKey)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub nature: String,
    pub personality: String,
    pub full_name: String,
    pub key: Option<CombinationKey>,
}

impl Combination {
    #[must_use]
    pub fn new(catalog: &Catalog, nature: &str, personality: &str) -> Self {
        Self {
            nature: nature.to_owned(),
            personality: personality.to_owned(),
            full_name: full_name(nature, personality),
            key: combination_key(catalog, nature, personality),
        }
    }

    /// Stand-in shown when no pairing qualifies.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            nature: PLACEHOLDER_NAME.to_owned(),
            personality: PLACEHOLDER_NAME.to_owned(),
            full_name: NO_COMBINATION.to_owned(),
            key: None,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}

/// Names of completed and qualified dimensions, in catalog order.
#[must_use]
pub fn qualified(catalog: &Catalog, progress: &Progress, category: Category) -> Vec<String> {
    catalog
        .names(category)
        .filter(|name| {
            progress
                .state(category, name)
                .is_some_and(|s| s.completed && s.qualified)
        })
        .map(str::to_owned)
        .collect()
}

/// Nature-major Cartesian product of the qualified dimensions.
#[must_use]
pub fn combinations(catalog: &Catalog, progress: &Progress) -> Vec<Combination> {
    let natures = qualified(catalog, progress, Category::Nature);
    let personalities = qualified(catalog, progress, Category::Personality);
    let mut out = Vec::with_capacity(natures.len() * personalities.len());
    for nature in &natures {
        for personality in &personalities {
            out.push(Combination::new(catalog, nature, personality));
        }
    }
    out
}

/// Whether at least one nature and one personality are qualified.
#[must_use]
pub fn results_available(catalog: &Catalog, progress: &Progress) -> bool {
    Category::ALL
        .iter()
        .all(|c| !qualified(catalog, progress, *c).is_empty())
}

/// Aggregated results ready for display, with placeholders substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub qualified_natures: Vec<String>,
    pub qualified_personalities: Vec<String>,
    pub combinations: Vec<Combination>,
    /// Number of real (non-placeholder) combinations.
    pub match_count: usize,
}

impl ResultSummary {
    #[must_use]
    pub fn compute(catalog: &Catalog, progress: &Progress) -> Self {
        let mut combinations = combinations(catalog, progress);
        let match_count = combinations.len();
        if combinations.is_empty() {
            combinations.push(Combination::placeholder());
        }

        Self {
            qualified_natures: with_placeholder(qualified(catalog, progress, Category::Nature)),
            qualified_personalities: with_placeholder(qualified(
                catalog,
                progress,
                Category::Personality,
            )),
            combinations,
            match_count,
        }
    }

    #[must_use]
    pub fn natures_text(&self) -> String {
        self.qualified_natures.join(LIST_SEPARATOR)
    }

    #[must_use]
    pub fn personalities_text(&self) -> String {
        self.qualified_personalities.join(LIST_SEPARATOR)
    }
}

fn with_placeholder(names: Vec<String>) -> Vec<String> {
    if names.is_empty() {
        vec![THRESHOLD_NOT_REACHED.to_owned()]
    } else {
        names
    }
}
