use crate::scoring::Combination;

/// Pagination state of the result browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserPage {
    pub index: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Entry of the jump-to index list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry<'a> {
    pub index: usize,
    pub combination: &'a Combination,
    pub active: bool,
}

/// Linear pager over a freshly computed combination list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultBrowser {
    items: Vec<Combination>,
    cursor: usize,
}

impl ResultBrowser {
    /// Start browsing at the first item.
    #[must_use]
    pub fn new(items: Vec<Combination>) -> Self {
        Self { items, cursor: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn items(&self) -> &[Combination] {
        &self.items
    }

    #[must_use]
    pub fn current(&self) -> Option<&Combination> {
        self.items.get(self.cursor)
    }

    fn last_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }

    /// Advance one item; no-op on the last item.
    pub fn next(&mut self) -> bool {
        if self.cursor < self.last_index() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Go back one item; no-op on the first item.
    pub fn previous(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `index`.
    ///
    /// Callers must pass `index < len()`; index controls only offer valid targets.
    /// Out-of-range requests trip a debug assertion and are ignored in release builds.
    pub fn jump_to(&mut self, index: usize) {
        debug_assert!(
            index < self.items.len(),
            "jump_to({index}) out of range for {} results",
            self.items.len()
        );
        if index < self.items.len() {
            self.cursor = index;
        }
    }

    #[must_use]
    pub fn page(&self) -> BrowserPage {
        BrowserPage {
            index: self.cursor,
            total: self.items.len(),
            has_previous: self.cursor > 0,
            has_next: self.cursor < self.last_index(),
        }
    }

    /// Index list entries; exactly the cursor position is active.
    pub fn entries(&self) -> impl Iterator<Item = IndexEntry<'_>> {
        self.items
            .iter()
            .enumerate()
            .map(move |(index, combination)| IndexEntry {
                index,
                combination,
                active: index == self.cursor,
            })
    }
}
