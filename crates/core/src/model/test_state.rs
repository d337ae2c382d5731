use serde::{Deserialize, Serialize};

use super::QUESTIONS_PER_DIMENSION;

/// Minimum number of "yes" answers for a dimension to qualify.
pub const QUALIFY_THRESHOLD: usize = 7;

/// Count of answers that are explicitly `true`. Unset entries count as not-true.
#[must_use]
pub fn yes_count(answers: &[Option<bool>]) -> usize {
    answers.iter().filter(|a| **a == Some(true)).count()
}

#[must_use]
pub fn is_qualifying(answers: &[Option<bool>]) -> bool {
    yes_count(answers) >= QUALIFY_THRESHOLD
}

/// Card status shown on the dimension selection page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DimensionStatus {
    Untested,
    CompletedUnqualified,
    Qualified,
}

/// Per-dimension completion record.
///
/// `qualified` is derived from `answers` and only meaningful once `completed`.
/// Both flags are stored so persisted blobs can be read without the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionTestState {
    #[serde(default)]
    pub answers: Vec<Option<bool>>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub qualified: bool,
}

impl DimensionTestState {
    /// Finalize a full answer log into a completed state.
    ///
    /// Logs longer than nine entries are truncated.
    #[must_use]
    pub fn from_answers(mut answers: Vec<Option<bool>>) -> Self {
        answers.truncate(QUESTIONS_PER_DIMENSION);
        let qualified = is_qualifying(&answers);
        Self {
            answers,
            completed: true,
            qualified,
        }
    }

    #[must_use]
    pub fn yes_count(&self) -> usize {
        yes_count(&self.answers)
    }

    #[must_use]
    pub fn status(&self) -> DimensionStatus {
        match (self.completed, self.qualified) {
            (false, _) => DimensionStatus::Untested,
            (true, false) => DimensionStatus::CompletedUnqualified,
            (true, true) => DimensionStatus::Qualified,
        }
    }

    /// True when the stored flags disagree with the answer log.
    ///
    /// An empty log on a completed state is treated as "no evidence" rather than drift,
    /// since older blobs may carry only the flags.
    #[must_use]
    pub fn has_drift(&self) -> bool {
        let revalidated = self.clone().revalidated();
        revalidated.completed != self.completed || revalidated.qualified != self.qualified
    }

    /// Recompute derived flags from the answer log where the log is available.
    ///
    /// A non-empty log counts as completed only with all nine questions answered.
    #[must_use]
    pub fn revalidated(mut self) -> Self {
        self.answers.truncate(QUESTIONS_PER_DIMENSION);
        if !self.answers.is_empty() {
            self.completed = self.completed && is_full_log(&self.answers);
        }
        if !self.completed {
            self.qualified = false;
        } else if !self.answers.is_empty() {
            self.qualified = is_qualifying(&self.answers);
        }
        self
    }
}

fn is_full_log(answers: &[Option<bool>]) -> bool {
    answers.len() == QUESTIONS_PER_DIMENSION && answers.iter().all(Option::is_some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(yes: usize, no: usize) -> Vec<Option<bool>> {
        let mut out = vec![Some(true); yes];
        out.extend(std::iter::repeat_n(Some(false), no));
        out
    }

    #[test]
    fn seven_yes_qualifies() {
        let state = DimensionTestState::from_answers(answers(7, 2));
        assert!(state.completed);
        assert!(state.qualified);
        assert_eq!(state.status(), DimensionStatus::Qualified);
    }

    #[test]
    fn six_yes_does_not_qualify() {
        let state = DimensionTestState::from_answers(answers(6, 3));
        assert!(state.completed);
        assert!(!state.qualified);
        assert_eq!(state.status(), DimensionStatus::CompletedUnqualified);
    }

    #[test]
    fn missing_answers_count_as_not_true() {
        let mut log = answers(6, 0);
        log.push(None);
        log.push(None);
        let state = DimensionTestState::from_answers(log);
        assert_eq!(state.yes_count(), 6);
        assert!(!state.qualified);
    }

    #[test]
    fn default_is_untested() {
        assert_eq!(
            DimensionTestState::default().status(),
            DimensionStatus::Untested
        );
    }

    #[test]
    fn revalidation_recomputes_from_answers() {
        let drifted = DimensionTestState {
            answers: answers(2, 7),
            completed: true,
            qualified: true,
        };
        assert!(drifted.has_drift());
        let fixed = drifted.revalidated();
        assert!(!fixed.qualified);
        assert!(!fixed.has_drift());
    }

    #[test]
    fn revalidation_keeps_flags_without_answers() {
        let flags_only = DimensionTestState {
            answers: Vec::new(),
            completed: true,
            qualified: true,
        };
        assert!(!flags_only.has_drift());
        assert!(flags_only.revalidated().qualified);
    }

    #[test]
    fn incomplete_state_cannot_be_qualified() {
        let state = DimensionTestState {
            answers: answers(9, 0),
            completed: false,
            qualified: true,
        };
        assert!(state.has_drift());
        assert!(!state.revalidated().qualified);
    }

    #[test]
    fn partial_log_on_completed_state_is_untested() {
        let partial = DimensionTestState {
            answers: answers(2, 0),
            completed: true,
            qualified: false,
        };
        assert!(partial.has_drift());
        let fixed = partial.revalidated();
        assert!(!fixed.completed);
        assert!(!fixed.qualified);
        assert_eq!(fixed.status(), DimensionStatus::Untested);
    }

    #[test]
    fn unanswered_entry_makes_log_partial() {
        let mut log = answers(8, 0);
        log.push(None);
        let state = DimensionTestState {
            answers: log,
            completed: true,
            qualified: true,
        };
        assert_eq!(state.revalidated().status(), DimensionStatus::Untested);
    }
}
