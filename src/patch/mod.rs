//! Catalog patching: writing registered content into host tables.
//!
//! Each spliced `PatchPhase` maps onto one `CatalogPatcher` operation. All
//! operations follow the same failure rule: a bad item (unresolved symbol,
//! missing overwrite target, name collision) is logged and skipped, and the
//! loop carries on. Nothing is rolled back.

mod patcher;

pub use patcher::CatalogPatcher;

use std::ops::AddAssign;

/// Outcome counts of one patch operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatchReport {
    /// Items written into host tables.
    pub applied: usize,

    /// Items logged and skipped.
    pub skipped: usize,
}

impl PatchReport {
    /// Create a report.
    #[must_use]
    pub const fn new(applied: usize, skipped: usize) -> Self {
        Self { applied, skipped }
    }

    pub(crate) fn apply(&mut self) {
        self.applied += 1;
    }

    pub(crate) fn skip(&mut self) {
        self.skipped += 1;
    }

    /// Were all items applied?
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped == 0
    }
}

impl AddAssign for PatchReport {
    fn add_assign(&mut self, rhs: Self) {
        self.applied += rhs.applied;
        self.skipped += rhs.skipped;
    }
}
