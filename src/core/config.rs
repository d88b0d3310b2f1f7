//! Extender configuration.
//!
//! Hosts configure the extender at startup by providing:
//! - the first auto-assigned deck ID (everything below is reserved for
//!   overwriting built-in decks)
//! - where in the host boot plan the patch phases are spliced in
//! - compatibility switches for host quirks
//!
//! The defaults match the host the extender was built against.

use serde::{Deserialize, Deserializer, Serialize};

use crate::boot::{SpliceBoundary, DEFAULT_BOUNDARIES};

/// First deck ID handed out to newly registered decks.
///
/// IDs in `0..DEFAULT_DECK_ID_OFFSET` address the host's built-in deck slots.
pub const DEFAULT_DECK_ID_OFFSET: u32 = 10_000;

/// Complete extender configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtenderConfig {
    /// First auto-assigned deck ID. Overwrites must target `0..deck_id_offset`.
    pub deck_id_offset: u32,

    /// Splice points, sorted by host step position.
    ///
    /// Deserialized lists are sorted on load; boundaries sharing a position
    /// keep their listed order.
    #[serde(deserialize_with = "sorted_boundaries")]
    pub boundaries: Vec<SpliceBoundary>,

    /// Gate the default card art upsert of a deck on its border-over sprite
    /// resolving, the way the host's own loader does.
    ///
    /// Off by default: the default art is gated on its own resolution.
    pub legacy_default_art_gate: bool,
}

fn sorted_boundaries<'de, D>(deserializer: D) -> Result<Vec<SpliceBoundary>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut boundaries = Vec::<SpliceBoundary>::deserialize(deserializer)?;
    boundaries.sort_by_key(|b| b.after);
    Ok(boundaries)
}

impl Default for ExtenderConfig {
    fn default() -> Self {
        Self {
            deck_id_offset: DEFAULT_DECK_ID_OFFSET,
            boundaries: DEFAULT_BOUNDARIES.to_vec(),
            legacy_default_art_gate: false,
        }
    }
}

impl ExtenderConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first auto-assigned deck ID.
    #[must_use]
    pub fn with_deck_id_offset(mut self, offset: u32) -> Self {
        self.deck_id_offset = offset;
        self
    }

    /// Replace the splice boundaries.
    ///
    /// Panics if the boundaries are not sorted by position.
    #[must_use]
    pub fn with_boundaries(mut self, boundaries: Vec<SpliceBoundary>) -> Self {
        assert!(
            boundaries.windows(2).all(|w| w[0].after <= w[1].after),
            "Splice boundaries must be sorted by position"
        );
        self.boundaries = boundaries;
        self
    }

    /// Enable the host-compatible default art gate.
    #[must_use]
    pub fn with_legacy_default_art_gate(mut self, enabled: bool) -> Self {
        self.legacy_default_art_gate = enabled;
        self
    }

    /// Position of the last boundary, if any.
    #[must_use]
    pub fn last_boundary(&self) -> Option<usize> {
        self.boundaries.last().map(|b| b.after)
    }
}
