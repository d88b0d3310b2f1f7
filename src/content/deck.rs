//! Externally supplied decks.

use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::host::DeckDef;

use super::sprite::ExternalSprite;

/// A deck supplied by a content unit.
///
/// The registry assigns `id` at registration. The patcher stores the host
/// definition it built for the deck in `deck_def`, for later boot phases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalDeck {
    /// Unique name across all content units.
    pub global_name: String,

    /// Card frame color.
    pub color: Color,

    /// Deck title color.
    pub title_color: Color,

    /// Art for cards of this deck that have none of their own.
    pub card_art_default: ExternalSprite,

    /// Card border.
    pub border: ExternalSprite,

    /// Optional sprite drawn over the border.
    #[serde(default)]
    pub border_over: Option<ExternalSprite>,

    #[serde(default)]
    id: Option<u32>,

    #[serde(skip)]
    deck_def: Option<DeckDef>,
}

impl ExternalDeck {
    /// Create an unregistered deck.
    pub fn new(
        global_name: impl Into<String>,
        color: Color,
        title_color: Color,
        card_art_default: ExternalSprite,
        border: ExternalSprite,
    ) -> Self {
        Self {
            global_name: global_name.into(),
            color,
            title_color,
            card_art_default,
            border,
            border_over: None,
            id: None,
            deck_def: None,
        }
    }

    /// Set the border-over sprite (builder pattern).
    #[must_use]
    pub fn with_border_over(mut self, sprite: ExternalSprite) -> Self {
        self.border_over = Some(sprite);
        self
    }

    /// ID assigned at registration.
    #[must_use]
    pub fn id(&self) -> Option<u32> {
        self.id
    }

    /// Host definition built for this deck during boot.
    #[must_use]
    pub fn deck_def(&self) -> Option<&DeckDef> {
        self.deck_def.as_ref()
    }

    pub(crate) fn assign_id(&mut self, id: u32) {
        self.id = Some(id);
    }

    pub(crate) fn set_deck_def(&mut self, deck_def: DeckDef) {
        self.deck_def = Some(deck_def);
    }
}
