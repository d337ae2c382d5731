//! Optional long-form narrative content, keyed by combination lookup key.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::{Combination, CombinationKey};

/// Note shown on result cards whose narrative has not been written yet.
pub const PENDING_NOTE: &str = "详细解析数据正在补充中...";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NarrativeError {
    #[error("invalid narrative table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid narrative key: {0}")]
    InvalidKey(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroSection {
    pub title: String,
    pub gua_name: String,
    pub core: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSection {
    pub title: String,
    pub trend: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeSections {
    pub intro: IntroSection,
    pub nature: Section,
    pub personality: Section,
    pub dynamics: Section,
    pub advantages: Section,
    pub challenges: Section,
    pub meaning: Section,
    pub balance: BalanceSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub hexagram: String,
    pub title: String,
    pub category: String,
    pub sections: NarrativeSections,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NarrativeTable {
    entries: HashMap<CombinationKey, Narrative>,
}

impl NarrativeTable {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON object whose keys are decimal lookup keys.
    ///
    /// # Errors
    ///
    /// Returns `NarrativeError::Parse` for malformed JSON and
    /// `NarrativeError::InvalidKey` for keys that are not numbers.
    pub fn from_json(input: &str) -> Result<Self, NarrativeError> {
        let raw: HashMap<String, Narrative> = serde_json::from_str(input)?;
        let mut entries = HashMap::with_capacity(raw.len());
        for (key, narrative) in raw {
            let value: u16 = key
                .trim()
                .parse()
                .map_err(|_| NarrativeError::InvalidKey(key.clone()))?;
            entries.insert(CombinationKey::new(value), narrative);
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn get(&self, key: CombinationKey) -> Option<&Narrative> {
        self.entries.get(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What to render for one combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultCard<'a> {
    Detailed(&'a Narrative),
    Basic {
        full_name: &'a str,
        nature: &'a str,
        personality: &'a str,
        note: &'static str,
    },
}

impl<'a> ResultCard<'a> {
    #[must_use]
    pub fn for_combination(combination: &'a Combination, table: &'a NarrativeTable) -> Self {
        match combination.key.and_then(|key| table.get(key)) {
            Some(narrative) => ResultCard::Detailed(narrative),
            None => ResultCard::Basic {
                full_name: &combination.full_name,
                nature: &combination.nature,
                personality: &combination.personality,
                note: PENDING_NOTE,
            },
        }
    }
}
