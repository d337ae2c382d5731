//! Built-in question content.

mod nature;
mod personality;

use crate::error::Error;
use crate::model::{Catalog, DimensionDef, QUESTIONS_PER_DIMENSION};

pub(crate) struct Entry {
    name: &'static str,
    symbol: &'static str,
    description: &'static str,
    questions: [&'static str; QUESTIONS_PER_DIMENSION],
}

impl Entry {
    fn to_def(&self) -> Result<DimensionDef, Error> {
        let questions = self.questions.iter().map(|q| (*q).to_owned()).collect();
        Ok(DimensionDef::new(
            self.name,
            self.symbol,
            self.description,
            questions,
        )?)
    }
}

fn defs(entries: &[Entry]) -> Result<Vec<DimensionDef>, Error> {
    entries.iter().map(Entry::to_def).collect()
}

impl Catalog {
    /// The catalog shipped with the application: eight nature and eight
    /// personality dimensions.
    ///
    /// # Errors
    ///
    /// Returns `Error` if the built-in content fails validation.
    pub fn builtin() -> Result<Self, Error> {
        Ok(Catalog::new(
            defs(&nature::NATURE)?,
            defs(&personality::PERSONALITY)?,
        )?)
    }
}
