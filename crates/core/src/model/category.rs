use serde::{Deserialize, Serialize};
use std::fmt;

/// The two families of dimensions a quiz taker is tested on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Innate nature (先天人性).
    Nature,
    /// Acquired personality (后天人格).
    Personality,
}

impl Category {
    /// Both categories in presentation order.
    pub const ALL: [Category; 2] = [Category::Nature, Category::Personality];

    /// Stable identifier used in persisted data.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Nature => "nature",
            Category::Personality => "personality",
        }
    }

    /// Human-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Nature => "先天人性",
            Category::Personality => "后天人格",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
