//! Externally supplied cards.
//!
//! An `ExternalCard` is registered either under its own global name (a new
//! card) or under the catalog key of a host card it replaces (an overwrite).
//! Either way it never changes after registration.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::host::CardClass;

use super::sprite::ExternalSprite;

/// Reference to a registered deck, by global name.
///
/// Deck IDs only exist after registration, so content refers to decks by
/// name and the patcher resolves the name at boot time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckRef(pub String);

impl DeckRef {
    /// Create a deck reference.
    pub fn new(global_name: impl Into<String>) -> Self {
        Self(global_name.into())
    }

    /// Global name of the referenced deck.
    #[must_use]
    pub fn global_name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DeckRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DeckRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for DeckRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Localized card names, keyed by locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localization {
    names: FxHashMap<String, String>,
}

impl Localization {
    /// Create an empty localization.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name for a locale (builder pattern).
    #[must_use]
    pub fn with_name(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.names.insert(locale.into(), text.into());
        self
    }

    /// Name for `locale`. Empty names count as missing.
    #[must_use]
    pub fn name(&self, locale: &str) -> Option<&str> {
        self.names
            .get(locale)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}

/// A card supplied by a content unit.
///
/// ## Example
///
/// ```
/// use ccg_splice::content::{ExternalCard, ExternalSprite};
/// use ccg_splice::host::CardClass;
///
/// let card = ExternalCard::new(
///     "demo.hero",
///     CardClass::card("Hero"),
///     ExternalSprite::new("demo.hero.art").with_id(1_000_000),
/// )
/// .with_deck("demo.deck")
/// .with_name("en", "Hero");
///
/// assert_eq!(card.localization.name("en"), Some("Hero"));
/// assert!(card.valid_references(|deck| deck == "demo.deck"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalCard {
    /// Unique name across all content units.
    pub global_name: String,

    /// Host class implementing the card.
    pub class: CardClass,

    /// Deck the card is assigned to, if not the one its class declares.
    pub deck: Option<DeckRef>,

    /// Card art.
    pub art: ExternalSprite,

    /// Localized display names.
    #[serde(default)]
    pub localization: Localization,
}

impl ExternalCard {
    /// Create a card with no deck assignment and no localization.
    pub fn new(global_name: impl Into<String>, class: CardClass, art: ExternalSprite) -> Self {
        Self {
            global_name: global_name.into(),
            class,
            deck: None,
            art,
            localization: Localization::default(),
        }
    }

    /// Assign the card to a deck (builder pattern).
    #[must_use]
    pub fn with_deck(mut self, deck: impl Into<DeckRef>) -> Self {
        self.deck = Some(deck.into());
        self
    }

    /// Add a localized name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.localization = self.localization.with_name(locale, text);
        self
    }

    /// Replace the localization table (builder pattern).
    #[must_use]
    pub fn with_localization(mut self, localization: Localization) -> Self {
        self.localization = localization;
        self
    }

    /// Check that everything the card points at has been registered.
    ///
    /// The art must carry a sprite ID and a referenced deck must be known
    /// to `deck_known`.
    pub fn valid_references(&self, deck_known: impl Fn(&str) -> bool) -> bool {
        self.art.is_registered()
            && self
                .deck
                .as_ref()
                .is_none_or(|deck| deck_known(deck.global_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art() -> ExternalSprite {
        ExternalSprite::new("art").with_id(1)
    }

    #[test]
    fn test_localization_ignores_empty_names() {
        let loc = Localization::new().with_name("en", "Hero").with_name("de", "");

        assert_eq!(loc.name("en"), Some("Hero"));
        assert_eq!(loc.name("de"), None);
        assert_eq!(loc.name("fr"), None);
    }

    #[test]
    fn test_valid_references_requires_art_id() {
        let card = ExternalCard::new("c", CardClass::card("C"), ExternalSprite::new("art"));
        assert!(!card.valid_references(|_| true));

        let card = ExternalCard::new("c", CardClass::card("C"), art());
        assert!(card.valid_references(|_| false));
    }

    #[test]
    fn test_valid_references_requires_known_deck() {
        let card = ExternalCard::new("c", CardClass::card("C"), art()).with_deck("alpha");

        assert!(card.valid_references(|deck| deck == "alpha"));
        assert!(!card.valid_references(|deck| deck == "beta"));
    }

    #[test]
    fn test_card_from_json() {
        let card: ExternalCard = serde_json::from_str(
            r#"{
                "global_name": "demo.card",
                "class": { "name": "DemoCard", "kind": "Card" },
                "deck": "demo.deck",
                "art": { "global_name": "demo.art", "id": 1000000 }
            }"#,
        )
        .unwrap();

        assert_eq!(card.deck, Some(DeckRef::new("demo.deck")));
        assert!(card.class.is_card());
        assert!(!card.art.is_original());
        assert_eq!(card.localization, Localization::default());
    }
}
