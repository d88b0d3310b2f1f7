//! Splicing patch phases into the host boot plan.
//!
//! The host plan is a queue of named steps. The splicer drains it front to
//! back and, after the step at each boundary position, inserts the patch
//! phase bound to that position. Host steps are never reordered, dropped or
//! duplicated: removing the inserted steps from the output gives back the
//! input exactly.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{ExtenderConfig, SpliceError};

use super::step::{BootQueue, BootStep, PatchPhase};

/// A patch phase bound to the host step it follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpliceBoundary {
    /// 0-based position of the host step the phase runs after.
    pub after: usize,

    /// Phase to insert.
    pub phase: PatchPhase,
}

impl SpliceBoundary {
    /// Create a boundary.
    #[must_use]
    pub const fn new(after: usize, phase: PatchPhase) -> Self {
        Self { after, phase }
    }
}

/// Splice points of the host's boot plan.
///
/// | pos | host step | phase |
/// |---|---|---|
/// | 0 | logic items (cards, enemies, modifiers, ...) | `LogicItems` |
/// | 1 | decks and statuses | `DecksAndStatus` |
/// | 2 | localisations | - |
/// | 3 | platforms | - |
/// | 4 | story | `Story` |
/// | 5 | atlas | `BreakAtlas` |
/// | 6 | fonts | - |
/// | 7 | extra art dictionaries | `ExtraItemSprites` |
/// | 8 | card/artifact metas, story functions | `MetasAndStoryFunctions` |
pub const DEFAULT_BOUNDARIES: [SpliceBoundary; 6] = [
    SpliceBoundary::new(0, PatchPhase::LogicItems),
    SpliceBoundary::new(1, PatchPhase::DecksAndStatus),
    SpliceBoundary::new(4, PatchPhase::Story),
    SpliceBoundary::new(5, PatchPhase::BreakAtlas),
    SpliceBoundary::new(7, PatchPhase::ExtraItemSprites),
    SpliceBoundary::new(8, PatchPhase::MetasAndStoryFunctions),
];

/// Produces the augmented boot plan.
///
/// ## Example
///
/// ```
/// use ccg_splice::boot::{BootQueue, BootSplicer, BootStep};
/// use ccg_splice::host::HostDb;
///
/// let plan: BootQueue = (0..10)
///     .map(|i| BootStep::host(format!("host step {i}"), |_: &mut HostDb| {}))
///     .collect();
///
/// let spliced = BootSplicer::default().splice(plan).unwrap();
///
/// assert_eq!(spliced.len(), 16);
/// assert_eq!(spliced[0].name(), "host step 0");
/// assert!(spliced[1].is_patch());
/// assert_eq!(spliced[15].name(), "host step 9");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootSplicer {
    boundaries: Vec<SpliceBoundary>,
}

impl Default for BootSplicer {
    fn default() -> Self {
        Self::new(DEFAULT_BOUNDARIES.to_vec())
    }
}

impl BootSplicer {
    /// Create a splicer.
    ///
    /// Panics if the boundaries are not sorted by position.
    #[must_use]
    pub fn new(boundaries: Vec<SpliceBoundary>) -> Self {
        assert!(
            boundaries.windows(2).all(|w| w[0].after <= w[1].after),
            "Splice boundaries must be sorted by position"
        );
        Self { boundaries }
    }

    /// Create a splicer with the configured boundaries.
    #[must_use]
    pub fn from_config(config: &ExtenderConfig) -> Self {
        Self::new(config.boundaries.clone())
    }

    /// Boundaries, sorted by position.
    #[must_use]
    pub fn boundaries(&self) -> &[SpliceBoundary] {
        &self.boundaries
    }

    /// Minimum number of host steps a plan needs to be spliced.
    #[must_use]
    pub fn required_steps(&self) -> usize {
        self.boundaries.last().map_or(0, |b| b.after + 1)
    }

    /// Consume the host plan and return it with the patch phases inserted.
    ///
    /// A plan shorter than the last boundary is handed back untouched inside
    /// the error.
    pub fn splice(&self, mut original: BootQueue) -> Result<BootQueue, SpliceError> {
        let required = self.required_steps();
        if original.len() < required {
            warn!(found = original.len(), required, "host boot plan too short to splice");
            return Err(SpliceError::PlanTooShort {
                required,
                found: original.len(),
                plan: original,
            });
        }

        let mut spliced = BootQueue::with_capacity(original.len() + self.boundaries.len());
        let mut boundaries = self.boundaries.iter().peekable();
        let mut position = 0;

        while let Some(step) = original.pop_front() {
            debug!(position, step = step.name(), "host step");
            spliced.push_back(step);

            while let Some(boundary) = boundaries.next_if(|b| b.after == position) {
                debug!(position, phase = %boundary.phase, "spliced patch phase");
                spliced.push_back(BootStep::Patch(boundary.phase));
            }

            position += 1;
        }

        Ok(spliced)
    }
}
