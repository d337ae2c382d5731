use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::{Catalog, Category, DimensionStatus, DimensionTestState};

/// Completion state of every dimension in the catalog.
///
/// Iteration order for presentation always comes from the `Catalog`, never from the maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    nature: BTreeMap<String, DimensionTestState>,
    personality: BTreeMap<String, DimensionTestState>,
    saved_at: Option<DateTime<Utc>>,
}

impl Progress {
    /// Default state for every dimension in the catalog.
    #[must_use]
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let mut progress = Self::default();
        for category in Category::ALL {
            let map = progress.map_mut(category);
            for name in catalog.names(category) {
                map.insert(name.to_owned(), DimensionTestState::default());
            }
        }
        progress
    }

    /// Rehydrate from persisted per-category maps.
    ///
    /// Call `reconcile` afterwards to align the maps with the current catalog.
    #[must_use]
    pub fn from_persisted(
        nature: BTreeMap<String, DimensionTestState>,
        personality: BTreeMap<String, DimensionTestState>,
        saved_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            nature,
            personality,
            saved_at,
        }
    }

    fn map(&self, category: Category) -> &BTreeMap<String, DimensionTestState> {
        match category {
            Category::Nature => &self.nature,
            Category::Personality => &self.personality,
        }
    }

    fn map_mut(&mut self, category: Category) -> &mut BTreeMap<String, DimensionTestState> {
        match category {
            Category::Nature => &mut self.nature,
            Category::Personality => &mut self.personality,
        }
    }

    #[must_use]
    pub fn state(&self, category: Category, name: &str) -> Option<&DimensionTestState> {
        self.map(category).get(name)
    }

    /// Status of a dimension; unknown names read as untested.
    #[must_use]
    pub fn status(&self, category: Category, name: &str) -> DimensionStatus {
        self.state(category, name)
            .map_or(DimensionStatus::Untested, DimensionTestState::status)
    }

    /// Raw per-category map, keyed by dimension name.
    #[must_use]
    pub fn states(&self, category: Category) -> &BTreeMap<String, DimensionTestState> {
        self.map(category)
    }

    #[must_use]
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.saved_at
    }

    pub fn set_saved_at(&mut self, at: DateTime<Utc>) {
        self.saved_at = Some(at);
    }

    /// Commit a finalized answer log for one dimension.
    pub fn record_verdict(
        &mut self,
        category: Category,
        name: &str,
        answers: Vec<Option<bool>>,
    ) -> &DimensionTestState {
        let state = DimensionTestState::from_answers(answers);
        let map = self.map_mut(category);
        map.insert(name.to_owned(), state);
        &map[name]
    }

    /// Align with the catalog: add missing names, drop unknown ones and
    /// recompute derived flags from answer logs.
    ///
    /// Returns the number of states whose flags were corrected.
    pub fn reconcile(&mut self, catalog: &Catalog) -> usize {
        let mut corrected = 0;
        for category in Category::ALL {
            let mut stored = std::mem::take(self.map_mut(category));
            let mut aligned = BTreeMap::new();
            for name in catalog.names(category) {
                let state = stored.remove(name).unwrap_or_default();
                if state.has_drift() {
                    corrected += 1;
                }
                aligned.insert(name.to_owned(), state.revalidated());
            }
            *self.map_mut(category) = aligned;
        }
        corrected
    }

    /// Restore every dimension to its default state.
    pub fn reset(&mut self) {
        for category in Category::ALL {
            for state in self.map_mut(category).values_mut() {
                *state = DimensionTestState::default();
            }
        }
        self.saved_at = None;
    }

    /// Number of completed dimensions across both categories.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        Category::ALL
            .iter()
            .flat_map(|c| self.map(*c).values())
            .filter(|s| s.completed)
            .count()
    }
}
