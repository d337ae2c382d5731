mod catalog;
mod category;
mod dimension;
mod progress;
mod test_state;

pub use catalog::{Catalog, CatalogError};
pub use category::Category;
pub use dimension::{DimensionDef, DimensionError, QUESTIONS_PER_DIMENSION};
pub use progress::Progress;
pub use test_state::{
    DimensionStatus, DimensionTestState, QUALIFY_THRESHOLD, is_qualifying, yes_count,
};
