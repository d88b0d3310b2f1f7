//! Registry state: everything content units registered, keyed for patching.
//!
//! The state is filled while content units boot and read when the spliced
//! boot plan runs. Entries are only ever added or replaced, never removed.
//!
//! ## Collision policy
//!
//! - Global names of cards, decks and metas are unique. A second
//!   registration under a taken name is rejected and the first stays.
//! - Overwrite slots (card overwrite keys, deck overwrite IDs, meta target
//!   keys) are last-write-wins. Every replacement is logged and counted.

use rustc_hash::FxHashSet;
use tracing::{debug, error, info, warn};

use crate::content::{CardMetaOverwrite, ExternalCard, ExternalDeck};
use crate::core::{ContentKind, ExtenderConfig, FxIndexMap, RegisterError, DEFAULT_DECK_ID_OFFSET};

/// Registered content.
///
/// ## Example
///
/// ```
/// use ccg_splice::content::{ExternalDeck, ExternalSprite};
/// use ccg_splice::core::Color;
/// use ccg_splice::registry::RegistryState;
///
/// let mut registry = RegistryState::new();
///
/// let deck = |name: &str| {
///     ExternalDeck::new(
///         name,
///         Color::from_rgb(200, 40, 40),
///         Color::from_rgb(255, 255, 255),
///         ExternalSprite::original(1),
///         ExternalSprite::original(2),
///     )
/// };
///
/// assert_eq!(registry.register_deck(deck("alpha"), None), Ok(10_000));
/// assert_eq!(registry.register_deck(deck("beta"), None), Ok(10_001));
/// assert!(registry.register_deck(deck("alpha"), None).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct RegistryState {
    /// Global name -> new card.
    cards: FxIndexMap<String, ExternalCard>,

    /// Host card key -> replacement card.
    card_overwrites: FxIndexMap<String, ExternalCard>,

    /// Deck global name -> assigned ID.
    deck_lookup: FxIndexMap<String, u32>,

    /// Deck ID -> deck.
    decks: FxIndexMap<u32, ExternalDeck>,

    deck_id_offset: u32,
    next_deck_id: u32,

    /// Global names of every registered meta overwrite.
    meta_names: FxHashSet<String>,

    /// Host card key -> meta overwrite.
    meta_overwrites: FxIndexMap<String, CardMetaOverwrite>,

    overwrite_collisions: usize,
}

impl Default for RegistryState {
    fn default() -> Self {
        Self::with_deck_id_offset(DEFAULT_DECK_ID_OFFSET)
    }
}

impl RegistryState {
    /// Create an empty registry with the default deck ID offset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry configured by `config`.
    #[must_use]
    pub fn from_config(config: &ExtenderConfig) -> Self {
        Self::with_deck_id_offset(config.deck_id_offset)
    }

    /// Create an empty registry handing out deck IDs from `offset`.
    #[must_use]
    pub fn with_deck_id_offset(offset: u32) -> Self {
        Self {
            cards: FxIndexMap::default(),
            card_overwrites: FxIndexMap::default(),
            deck_lookup: FxIndexMap::default(),
            decks: FxIndexMap::default(),
            deck_id_offset: offset,
            next_deck_id: offset,
            meta_names: FxHashSet::default(),
            meta_overwrites: FxIndexMap::default(),
            overwrite_collisions: 0,
        }
    }

    /// Register a card, or a replacement for the host card `overwrite`.
    ///
    /// Rejected when the class is not a card class, the global name is
    /// taken by another new card, or the card references unregistered
    /// assets. A replacement for an already replaced key wins over the
    /// earlier one.
    pub fn register_card(
        &mut self,
        card: ExternalCard,
        overwrite: Option<&str>,
    ) -> Result<(), RegisterError> {
        if !card.class.is_card() {
            error!(
                global_name = %card.global_name,
                class = %card.class.name,
                "external card is not backed by a card class"
            );
            return Err(RegisterError::NotACard {
                global_name: card.global_name,
                class: card.class.name,
            });
        }

        if self.cards.contains_key(&card.global_name) {
            error!(global_name = %card.global_name, "card global name registered twice, rejecting second card");
            return Err(RegisterError::DuplicateCardName(card.global_name));
        }

        if !card.valid_references(|deck| self.deck_lookup.contains_key(deck)) {
            error!(global_name = %card.global_name, "card has unregistered assets");
            return Err(RegisterError::InvalidReferences(card.global_name));
        }

        match overwrite {
            Some(target) => {
                let replacement = card.global_name.clone();
                if let Some(previous) = self.card_overwrites.insert(target.to_string(), card) {
                    self.overwrite_collisions += 1;
                    info!(
                        key = target,
                        previous = %previous.global_name,
                        replacement = %replacement,
                        "card overwrite collision, last registration wins"
                    );
                } else {
                    debug!(key = target, global_name = %replacement, "registered card overwrite");
                }
            }
            None => {
                debug!(global_name = %card.global_name, class = %card.class.name, "registered card");
                self.cards.insert(card.global_name.clone(), card);
            }
        }

        Ok(())
    }

    /// Register a deck and return its ID.
    ///
    /// Without `overwrite` the deck gets the next free ID at or above the
    /// offset. With it, the deck takes over the built-in slot `overwrite`,
    /// which must lie in `0..offset`; an earlier deck in that slot is
    /// replaced. Rejections leave the registry untouched.
    pub fn register_deck(
        &mut self,
        mut deck: ExternalDeck,
        overwrite: Option<i64>,
    ) -> Result<u32, RegisterError> {
        if let Some(id) = deck.id() {
            warn!(global_name = %deck.global_name, id, "deck already has an ID");
            return Err(RegisterError::DeckAlreadyRegistered {
                global_name: deck.global_name,
                id,
            });
        }

        if deck.global_name.trim().is_empty() {
            warn!("deck with empty global name");
            return Err(RegisterError::BlankDeckName);
        }

        if self.deck_lookup.contains_key(&deck.global_name) {
            warn!(global_name = %deck.global_name, "deck global name collision");
            return Err(RegisterError::DuplicateDeckName(deck.global_name));
        }

        let id = match overwrite {
            None => {
                let id = self.next_deck_id;
                let Some(next) = id.checked_add(1) else {
                    error!(global_name = %deck.global_name, id, "deck ID counter exhausted");
                    return Err(RegisterError::DeckIdsExhausted { offset: self.deck_id_offset });
                };
                self.next_deck_id = next;
                id
            }
            Some(requested) => match u32::try_from(requested) {
                Ok(id) if id < self.deck_id_offset => id,
                _ => {
                    error!(
                        global_name = %deck.global_name,
                        requested,
                        limit = self.deck_id_offset,
                        "deck overwrite outside the built-in deck range"
                    );
                    return Err(RegisterError::OverwriteOutOfRange {
                        id: requested,
                        limit: self.deck_id_offset,
                    });
                }
            },
        };

        deck.assign_id(id);
        let global_name = deck.global_name.clone();
        self.deck_lookup.insert(global_name.clone(), id);

        if let Some(previous) = self.decks.insert(id, deck) {
            self.overwrite_collisions += 1;
            warn!(
                id,
                previous = %previous.global_name,
                replacement = %global_name,
                "deck overwrite collision, last registration wins"
            );
        } else {
            debug!(global_name = %global_name, id, "registered deck");
        }

        Ok(id)
    }

    /// Register a partial metadata overwrite for the host card `card_key`.
    ///
    /// The meta's own global name must be non-empty and unused. A later
    /// overwrite for the same card replaces an earlier one.
    pub fn register_card_meta_overwrite(
        &mut self,
        meta: CardMetaOverwrite,
        card_key: &str,
    ) -> Result<(), RegisterError> {
        if meta.global_name.is_empty() {
            warn!(card_key, "card meta without global name rejected");
            return Err(RegisterError::BlankMetaName);
        }

        if !self.meta_names.insert(meta.global_name.clone()) {
            warn!(global_name = %meta.global_name, "card meta global name already registered");
            return Err(RegisterError::DuplicateMetaName(meta.global_name));
        }

        let replacement = meta.global_name.clone();
        if let Some(previous) = self.meta_overwrites.insert(card_key.to_string(), meta) {
            self.overwrite_collisions += 1;
            warn!(
                card_key,
                previous = %previous.global_name,
                replacement = %replacement,
                "card meta overwrite collision, last registration wins"
            );
        } else {
            debug!(card_key, global_name = %replacement, "registered card meta overwrite");
        }

        Ok(())
    }

    /// Refuse a content category the registry cannot handle.
    pub fn reject_unsupported(
        &self,
        kind: ContentKind,
        global_name: &str,
    ) -> Result<(), RegisterError> {
        error!(%kind, global_name, "registration of this content category is not supported");
        Err(RegisterError::Unsupported(kind))
    }

    /// New cards, in registration order.
    pub fn cards(&self) -> impl Iterator<Item = &ExternalCard> {
        self.cards.values()
    }

    /// Get a new card by global name.
    #[must_use]
    pub fn card(&self, global_name: &str) -> Option<&ExternalCard> {
        self.cards.get(global_name)
    }

    /// Card overwrites as `(host card key, replacement)`.
    pub fn card_overwrites(&self) -> impl Iterator<Item = (&str, &ExternalCard)> {
        self.card_overwrites.iter().map(|(key, card)| (key.as_str(), card))
    }

    /// Get the replacement registered for a host card key.
    #[must_use]
    pub fn card_overwrite(&self, key: &str) -> Option<&ExternalCard> {
        self.card_overwrites.get(key)
    }

    /// Registered decks, one per ID.
    pub fn decks(&self) -> impl Iterator<Item = &ExternalDeck> {
        self.decks.values()
    }

    pub(crate) fn decks_mut(&mut self) -> impl Iterator<Item = &mut ExternalDeck> {
        self.decks.values_mut()
    }

    /// Get the deck currently holding an ID.
    #[must_use]
    pub fn deck(&self, id: u32) -> Option<&ExternalDeck> {
        self.decks.get(&id)
    }

    /// ID assigned to a deck global name.
    ///
    /// Still answers for a deck whose overwrite slot was later taken by
    /// another deck.
    #[must_use]
    pub fn deck_id(&self, global_name: &str) -> Option<u32> {
        self.deck_lookup.get(global_name).copied()
    }

    /// Get a deck by global name, if it still holds its ID.
    #[must_use]
    pub fn deck_by_name(&self, global_name: &str) -> Option<&ExternalDeck> {
        self.deck_id(global_name)
            .and_then(|id| self.decks.get(&id))
            .filter(|deck| deck.global_name == global_name)
    }

    /// Meta overwrites as `(host card key, overwrite)`.
    pub fn meta_overwrites(&self) -> impl Iterator<Item = (&str, &CardMetaOverwrite)> {
        self.meta_overwrites.iter().map(|(key, meta)| (key.as_str(), meta))
    }

    /// Get the meta overwrite registered for a host card key.
    #[must_use]
    pub fn meta_overwrite(&self, card_key: &str) -> Option<&CardMetaOverwrite> {
        self.meta_overwrites.get(card_key)
    }

    /// First auto-assigned deck ID.
    #[must_use]
    pub fn deck_id_offset(&self) -> u32 {
        self.deck_id_offset
    }

    /// ID the next auto-assigned deck will get.
    #[must_use]
    pub fn next_deck_id(&self) -> u32 {
        self.next_deck_id
    }

    /// How many overwrite registrations replaced an earlier one.
    #[must_use]
    pub fn overwrite_collisions(&self) -> usize {
        self.overwrite_collisions
    }

    /// Check if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
            && self.card_overwrites.is_empty()
            && self.decks.is_empty()
            && self.meta_overwrites.is_empty()
    }
}
