//! Host content tables.
//!
//! `HostDb` is the set of mutable tables the host exposes to the extender.
//! The host fills them during its own boot steps; the patch phases spliced
//! between those steps add to and overwrite entries.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, FxIndexMap};

use super::class::CardClass;
use super::symbols::{DeckSym, RaritySym, SpriteSym, UpgradeSym};

/// Upgrade paths of a card. Cards rarely have more than a handful.
pub type UpgradeList = SmallVec<[UpgradeSym; 4]>;

/// Per-locale string table: localization key to text.
pub type LocaleStrings = FxIndexMap<String, String>;

/// Localization key of a card's display name.
///
/// ```
/// assert_eq!(ccg_splice::host::card_name_key("Hero"), "card.Hero.name");
/// ```
#[must_use]
pub fn card_name_key(class_name: &str) -> String {
    format!("card.{class_name}.name")
}

/// Host deck definition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDef {
    /// Card frame color.
    pub color: Color,

    /// Deck title color.
    pub title_color: Color,
}

impl DeckDef {
    /// Create a deck definition.
    #[must_use]
    pub const fn new(color: Color, title_color: Color) -> Self {
        Self { color, title_color }
    }
}

/// Host metadata record of a card class.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMeta {
    /// Deck the card belongs to.
    pub deck: DeckSym,

    /// Rarity.
    pub rarity: RaritySym,

    /// Upgrade paths.
    pub upgrades_to: UpgradeList,

    /// Hidden from players.
    pub unreleased: bool,

    /// Excluded from card pools that expect regular cards.
    pub weird_card: bool,

    /// Extra glossary keys shown on the card tooltip.
    pub extra_glossary: Vec<String>,

    /// Name is not localized.
    pub dont_loc: bool,

    /// Never offered as a reward.
    pub dont_offer: bool,
}

impl CardMeta {
    /// Create a record for a card in `deck`.
    #[must_use]
    pub fn new(deck: DeckSym) -> Self {
        Self {
            deck,
            ..Self::default()
        }
    }
}

/// The host's live content tables.
#[derive(Clone, Debug, Default)]
pub struct HostDb {
    /// Class name -> card class.
    pub card_classes: FxIndexMap<String, CardClass>,

    /// Class name -> card art.
    pub card_art: FxIndexMap<String, SpriteSym>,

    /// Deck -> definition.
    pub decks: FxIndexMap<DeckSym, DeckDef>,

    /// Deck -> card border sprite.
    pub deck_borders: FxIndexMap<DeckSym, SpriteSym>,

    /// Deck -> sprite drawn over the border.
    pub deck_borders_over: FxIndexMap<DeckSym, SpriteSym>,

    /// Deck -> art used by cards without their own art.
    pub card_art_deck_default: FxIndexMap<DeckSym, SpriteSym>,

    /// Class name -> metadata record.
    pub card_metas: FxIndexMap<String, CardMeta>,
}

impl HostDb {
    /// Create an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
