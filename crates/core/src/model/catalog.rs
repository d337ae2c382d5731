use std::collections::HashSet;

use thiserror::Error;

use super::{Category, DimensionDef};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no {0} dimensions")]
    EmptyCategory(Category),

    #[error("duplicate {category} dimension: {name}")]
    DuplicateName { category: Category, name: String },
}

/// Read-only content catalog: the ordered dimension lists for both categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    nature: Vec<DimensionDef>,
    personality: Vec<DimensionDef>,
}

impl Catalog {
    /// Build a catalog from the two ordered dimension lists.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyCategory` if either list is empty and
    /// `CatalogError::DuplicateName` if a name repeats within a category.
    pub fn new(
        nature: Vec<DimensionDef>,
        personality: Vec<DimensionDef>,
    ) -> Result<Self, CatalogError> {
        for (category, dims) in [
            (Category::Nature, &nature),
            (Category::Personality, &personality),
        ] {
            if dims.is_empty() {
                return Err(CatalogError::EmptyCategory(category));
            }
            let mut seen = HashSet::with_capacity(dims.len());
            for dim in dims {
                if !seen.insert(dim.name()) {
                    return Err(CatalogError::DuplicateName {
                        category,
                        name: dim.name().to_owned(),
                    });
                }
            }
        }

        Ok(Self {
            nature,
            personality,
        })
    }

    /// Dimensions of a category, in catalog order.
    #[must_use]
    pub fn dimensions(&self, category: Category) -> &[DimensionDef] {
        match category {
            Category::Nature => &self.nature,
            Category::Personality => &self.personality,
        }
    }

    #[must_use]
    pub fn find(&self, category: Category, name: &str) -> Option<&DimensionDef> {
        self.dimensions(category).iter().find(|d| d.name() == name)
    }

    /// Zero-based catalog position of a dimension.
    #[must_use]
    pub fn position(&self, category: Category, name: &str) -> Option<usize> {
        self.dimensions(category).iter().position(|d| d.name() == name)
    }

    pub fn names(&self, category: Category) -> impl Iterator<Item = &str> {
        self.dimensions(category).iter().map(DimensionDef::name)
    }

    /// Total number of dimensions across both categories.
    #[must_use]
    pub fn total_dimensions(&self) -> usize {
        self.nature.len() + self.personality.len()
    }
}
