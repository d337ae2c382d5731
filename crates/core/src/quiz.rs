//! Per-dimension quiz flow.
//!
//! A session is either idle (dimension selection) or positioned on one question of one
//! dimension. Answers are collected in a draft log owned by the session and committed to
//! `Progress` only when the ninth answer finalizes the dimension, so abandoning a dimension
//! half-way never leaks partial answers into saved state.

use thiserror::Error;

use crate::model::{
    Catalog, Category, DimensionDef, Progress, QUESTIONS_PER_DIMENSION, yes_count,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("unknown {category} dimension: {name}")]
    UnknownDimension { category: Category, name: String },

    #[error("no dimension is under test")]
    NotInQuestion,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuizState {
    #[default]
    Idle,
    InQuestion {
        category: Category,
        dimension: String,
        index: usize,
    },
}

/// Verdict produced when a dimension is finalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionVerdict {
    pub category: Category,
    pub dimension: String,
    pub yes_count: usize,
    pub qualified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Moved on to the question at `index` of the same dimension.
    Advanced { index: usize },
    /// The dimension was finalized and the session is idle again.
    Finished(DimensionVerdict),
}

/// Everything needed to draw the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'c> {
    pub category: Category,
    pub dimension: &'c DimensionDef,
    pub index: usize,
    pub text: &'c str,
    /// Answer given earlier at this index, if the user navigated back.
    pub previous_answer: Option<bool>,
}

impl QuestionView<'_> {
    /// One-based question number.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    #[must_use]
    pub fn total(&self) -> usize {
        QUESTIONS_PER_DIMENSION
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }
}

/// Completed dimensions against the size of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverallProgress {
    pub completed: usize,
    pub total: usize,
}

#[must_use]
pub fn overall_progress(catalog: &Catalog, progress: &Progress) -> OverallProgress {
    let completed = Category::ALL
        .iter()
        .flat_map(|c| catalog.names(*c).map(move |n| (*c, n)))
        .filter(|(c, n)| progress.state(*c, n).is_some_and(|s| s.completed))
        .count();
    OverallProgress {
        completed,
        total: catalog.total_dimensions(),
    }
}

/// Commit an answer log for a dimension and compute its verdict.
pub fn finalize(
    progress: &mut Progress,
    category: Category,
    dimension: &str,
    answers: Vec<Option<bool>>,
) -> DimensionVerdict {
    let yes = yes_count(&answers);
    let state = progress.record_verdict(category, dimension, answers);
    DimensionVerdict {
        category,
        dimension: dimension.to_owned(),
        yes_count: yes,
        qualified: state.qualified,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    state: QuizState,
    draft: Vec<Option<bool>>,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, QuizState::Idle)
    }

    /// Draft answer log of the dimension under test.
    #[must_use]
    pub fn draft_answers(&self) -> &[Option<bool>] {
        &self.draft
    }

    /// Begin (or restart) a dimension at its first question with an empty answer log.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownDimension` if the catalog has no such dimension.
    pub fn start_dimension(
        &mut self,
        catalog: &Catalog,
        category: Category,
        name: &str,
    ) -> Result<(), QuizError> {
        if catalog.find(category, name).is_none() {
            return Err(QuizError::UnknownDimension {
                category,
                name: name.to_owned(),
            });
        }
        self.draft = vec![None; QUESTIONS_PER_DIMENSION];
        self.state = QuizState::InQuestion {
            category,
            dimension: name.to_owned(),
            index: 0,
        };
        Ok(())
    }

    /// Record an answer for the current question and advance.
    ///
    /// The ninth answer finalizes the dimension into `progress` and returns the session
    /// to idle.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInQuestion` when no dimension is under test.
    pub fn submit_answer(
        &mut self,
        progress: &mut Progress,
        value: bool,
    ) -> Result<AnswerOutcome, QuizError> {
        let QuizState::InQuestion { index, .. } = &mut self.state else {
            return Err(QuizError::NotInQuestion);
        };

        if let Some(slot) = self.draft.get_mut(*index) {
            *slot = Some(value);
        }

        if *index + 1 < QUESTIONS_PER_DIMENSION {
            *index += 1;
            return Ok(AnswerOutcome::Advanced { index: *index });
        }

        let QuizState::InQuestion {
            category,
            dimension,
            ..
        } = std::mem::take(&mut self.state)
        else {
            return Err(QuizError::NotInQuestion);
        };
        let answers = std::mem::take(&mut self.draft);
        Ok(AnswerOutcome::Finished(finalize(
            progress, category, &dimension, answers,
        )))
    }

    /// Step back one question within the current dimension.
    ///
    /// Returns `false` (no-op) at the first question or when idle. The answer given at
    /// the question being left is kept.
    pub fn go_to_previous_question(&mut self) -> bool {
        match &mut self.state {
            QuizState::InQuestion { index, .. } if *index > 0 => {
                *index -= 1;
                true
            }
            _ => false,
        }
    }

    /// Leave the dimension under test without committing anything.
    pub fn abandon(&mut self) {
        self.state = QuizState::Idle;
        self.draft.clear();
    }

    #[must_use]
    pub fn question<'c>(&self, catalog: &'c Catalog) -> Option<QuestionView<'c>> {
        let QuizState::InQuestion {
            category,
            dimension,
            index,
        } = &self.state
        else {
            return None;
        };
        let def = catalog.find(*category, dimension)?;
        Some(QuestionView {
            category: *category,
            dimension: def,
            index: *index,
            text: def.question(*index)?,
            previous_answer: self.draft.get(*index).copied().flatten(),
        })
    }
}
