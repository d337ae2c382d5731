use thiserror::Error;

/// Number of yes/no questions every dimension carries.
pub const QUESTIONS_PER_DIMENSION: usize = 9;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DimensionError {
    #[error("dimension name cannot be empty")]
    EmptyName,

    #[error("dimension {name} has {len} questions, expected {QUESTIONS_PER_DIMENSION}")]
    QuestionCount { name: String, len: usize },

    #[error("dimension {name} has an empty question at position {index}")]
    EmptyQuestion { name: String, index: usize },
}

/// Immutable definition of a single dimension from the content catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionDef {
    name: String,
    symbol: String,
    description: String,
    questions: Vec<String>,
}

impl DimensionDef {
    /// Build a dimension definition.
    ///
    /// # Errors
    ///
    /// Returns `DimensionError::EmptyName` for a blank name,
    /// `DimensionError::QuestionCount` unless exactly nine questions are given, and
    /// `DimensionError::EmptyQuestion` for blank question text.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<String>,
    ) -> Result<Self, DimensionError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(DimensionError::EmptyName);
        }
        if questions.len() != QUESTIONS_PER_DIMENSION {
            return Err(DimensionError::QuestionCount {
                name,
                len: questions.len(),
            });
        }
        if let Some(index) = questions.iter().position(|q| q.trim().is_empty()) {
            return Err(DimensionError::EmptyQuestion { name, index });
        }

        Ok(Self {
            name,
            symbol: symbol.into(),
            description: description.into(),
            questions,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Question text at `index`, if in range.
    #[must_use]
    pub fn question(&self, index: usize) -> Option<&str> {
        self.questions.get(index).map(String::as_str)
    }
}
