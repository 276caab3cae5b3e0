//! Per-widget cache of computed month grids.

use std::{collections::HashMap, sync::Arc};

use tracing::{debug, trace};

use crate::{
    anchor::MonthAnchor,
    grid::{MonthGrid, build_month_grid},
};

/// Maps month labels to previously computed grids.
///
/// Entries are never evicted; a month revisited within one widget lifetime
/// is served from memory. The key space is the set of distinct months the
/// user navigates to in a session, so growth stays small in practice.
#[derive(Debug, Default)]
pub struct MonthCache {
    grids: HashMap<String, Arc<MonthGrid>>,
}

impl MonthCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached grid stored under `label`, if any.
    pub fn get(&self, label: &str) -> Option<Arc<MonthGrid>> {
        self.grids.get(label).cloned()
    }

    /// Stores `grid` under `label`, silently replacing any previous entry.
    pub fn put(&mut self, label: String, grid: Arc<MonthGrid>) {
        self.grids.insert(label, grid);
    }

    /// Returns the grid for `anchor`, computing and storing it on first use.
    ///
    /// The cache key is derived from the anchor itself, so key and month can
    /// never disagree. This is the only entry point hosts normally need.
    pub fn resolve(&mut self, anchor: MonthAnchor) -> Arc<MonthGrid> {
        let label = anchor.label();
        if let Some(grid) = self.grids.get(&label) {
            trace!(%label, "month grid served from cache");
            return grid.clone();
        }
        debug!(%label, "computing month grid");
        let grid = Arc::new(build_month_grid(anchor));
        self.grids.insert(label, grid.clone());
        grid
    }

    /// Number of cached months.
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// True when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}
