use thiserror::Error;

use crate::model::{CatalogError, DimensionError};
use crate::narrative::NarrativeError;
use crate::quiz::QuizError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Narrative(#[from] NarrativeError),
}
