//! Partial overwrites of host card metadata.

use serde::{Deserialize, Serialize};

use super::card::DeckRef;

/// A partial overwrite of a host card's metadata record.
///
/// Every field is optional. `None` leaves the host value untouched, so an
/// overwrite that only sets `rarity` changes nothing else.
///
/// ## Example
///
/// ```
/// use ccg_splice::content::CardMetaOverwrite;
///
/// let meta = CardMetaOverwrite::new("demo.cannon.rare").with_rarity(2);
/// assert_eq!(meta.rarity, Some(2));
/// assert_eq!(meta.unreleased, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardMetaOverwrite {
    /// Unique name across all content units.
    pub global_name: String,

    pub unreleased: Option<bool>,
    pub weird_card: Option<bool>,
    pub extra_glossary: Option<Vec<String>>,

    /// Upgrade IDs. Unresolvable entries are dropped at patch time.
    pub upgrades_to: Option<Vec<u32>>,

    pub deck: Option<DeckRef>,
    pub dont_loc: Option<bool>,
    pub dont_offer: Option<bool>,

    /// Rarity ID.
    pub rarity: Option<u32>,
}

impl CardMetaOverwrite {
    /// Create an overwrite that changes nothing.
    pub fn new(global_name: impl Into<String>) -> Self {
        Self {
            global_name: global_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_unreleased(mut self, unreleased: bool) -> Self {
        self.unreleased = Some(unreleased);
        self
    }

    #[must_use]
    pub fn with_weird_card(mut self, weird_card: bool) -> Self {
        self.weird_card = Some(weird_card);
        self
    }

    #[must_use]
    pub fn with_extra_glossary(mut self, keys: Vec<String>) -> Self {
        self.extra_glossary = Some(keys);
        self
    }

    #[must_use]
    pub fn with_upgrades_to(mut self, upgrades: Vec<u32>) -> Self {
        self.upgrades_to = Some(upgrades);
        self
    }

    #[must_use]
    pub fn with_deck(mut self, deck: impl Into<DeckRef>) -> Self {
        self.deck = Some(deck.into());
        self
    }

    #[must_use]
    pub fn with_dont_loc(mut self, dont_loc: bool) -> Self {
        self.dont_loc = Some(dont_loc);
        self
    }

    #[must_use]
    pub fn with_dont_offer(mut self, dont_offer: bool) -> Self {
        self.dont_offer = Some(dont_offer);
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: u32) -> Self {
        self.rarity = Some(rarity);
        self
    }
}
