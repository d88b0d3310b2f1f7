//! The catalog patcher.

use tracing::{debug, error, info, trace, warn};

use crate::boot::PatchPhase;
use crate::content::{CardMetaOverwrite, DeckRef, ExternalCard, ExternalSprite};
use crate::core::ExtenderConfig;
use crate::host::{CardMeta, DeckDef, DeckSym, HostDb, SpriteExtension, SpriteSym, SymbolResolver};
use crate::registry::RegistryState;

use super::PatchReport;

/// Applies registered content to host tables.
///
/// The patcher holds no content itself. It reads a `RegistryState` that is
/// frozen by the time the boot plan runs; the only registry write is the
/// deck definition back-reference stored during deck patching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogPatcher {
    legacy_default_art_gate: bool,
}

impl CatalogPatcher {
    /// Create a patcher with default behavior.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a patcher configured by `config`.
    #[must_use]
    pub fn from_config(config: &ExtenderConfig) -> Self {
        Self {
            legacy_default_art_gate: config.legacy_default_art_gate,
        }
    }

    /// Gate deck default art on the border-over sprite (builder pattern).
    #[must_use]
    pub fn with_legacy_default_art_gate(mut self, enabled: bool) -> Self {
        self.legacy_default_art_gate = enabled;
        self
    }

    /// Run the operation bound to `phase`.
    pub fn apply(
        &self,
        phase: PatchPhase,
        registry: &mut RegistryState,
        db: &mut HostDb,
        resolver: &dyn SymbolResolver,
        sprites: &mut dyn SpriteExtension,
    ) -> PatchReport {
        let report = match phase {
            PatchPhase::LogicItems => self.apply_type_registrations(registry, db),
            PatchPhase::DecksAndStatus => self.apply_deck_definitions(registry, db, resolver),
            PatchPhase::Story => self.patch_story(db),
            PatchPhase::BreakAtlas => self.break_atlas(sprites),
            PatchPhase::ExtraItemSprites => self.apply_extra_sprites(registry, db, resolver),
            PatchPhase::MetasAndStoryFunctions => self.apply_metas(registry, db, resolver),
        };

        info!(%phase, applied = report.applied, skipped = report.skipped, "patch phase finished");
        report
    }

    /// Add new card classes to the card catalog and swap overwritten ones.
    ///
    /// A new card never replaces an existing class of the same name. An
    /// overwrite only replaces an existing class, it never adds one.
    pub fn apply_type_registrations(&self, registry: &RegistryState, db: &mut HostDb) -> PatchReport {
        let mut report = PatchReport::default();

        for card in registry.cards() {
            if db.card_classes.contains_key(&card.class.name) {
                warn!(
                    global_name = %card.global_name,
                    class = %card.class.name,
                    "card class name already in catalog, skipping"
                );
                report.skip();
                continue;
            }
            db.card_classes.insert(card.class.name.clone(), card.class.clone());
            report.apply();
        }

        for (key, card) in registry.card_overwrites() {
            let Some(slot) = db.card_classes.get_mut(key) else {
                warn!(global_name = %card.global_name, key, "card overwrite target not in catalog, skipping");
                report.skip();
                continue;
            };
            *slot = card.class.clone();
            report.apply();
        }

        report
    }

    /// Build host deck definitions for registered decks.
    ///
    /// Existing definitions under the same deck symbol are replaced, which is
    /// how built-in deck slots are overwritten.
    pub fn apply_deck_definitions(
        &self,
        registry: &mut RegistryState,
        db: &mut HostDb,
        resolver: &dyn SymbolResolver,
    ) -> PatchReport {
        let mut report = PatchReport::default();

        for deck in registry.decks_mut() {
            let Some(symbol) = deck.id().and_then(|id| resolver.deck(id)) else {
                error!(global_name = %deck.global_name, id = ?deck.id(), "deck ID does not resolve to a host deck, skipping");
                report.skip();
                continue;
            };

            let deck_def = DeckDef::new(deck.color, deck.title_color);
            deck.set_deck_def(deck_def);
            if db.decks.insert(symbol, deck_def).is_some() {
                debug!(global_name = %deck.global_name, %symbol, "replaced host deck definition");
            }
            report.apply();
        }

        report
    }

    /// Story patches. Nothing to do yet.
    pub fn patch_story(&self, _db: &mut HostDb) -> PatchReport {
        trace!("no story patches");
        PatchReport::default()
    }

    /// Tell the sprite subsystem the atlas is loaded.
    pub fn break_atlas(&self, sprites: &mut dyn SpriteExtension) -> PatchReport {
        sprites.break_atlas();
        PatchReport::new(1, 0)
    }

    /// Register card art and deck sprites.
    pub fn apply_extra_sprites(
        &self,
        registry: &RegistryState,
        db: &mut HostDb,
        resolver: &dyn SymbolResolver,
    ) -> PatchReport {
        let mut report = PatchReport::default();

        for card in registry.cards() {
            let Some(sprite) = resolve_sprite(resolver, &card.art) else {
                error!(global_name = %card.global_name, art = %card.art.global_name, "card art wasn't resolved, skipping");
                report.skip();
                continue;
            };
            if db.card_art.contains_key(&card.class.name) {
                error!(class = %card.class.name, "card art collision, skipping");
                report.skip();
                continue;
            }
            db.card_art.insert(card.class.name.clone(), sprite);
            report.apply();
        }

        for (key, card) in registry.card_overwrites() {
            if !db.card_art.contains_key(key) {
                warn!(key, global_name = %card.global_name, "card art overwrite target unknown, skipping");
                report.skip();
                continue;
            }
            let Some(sprite) = resolve_sprite(resolver, &card.art) else {
                error!(global_name = %card.global_name, "card art overwrite wasn't resolved, skipping");
                report.skip();
                continue;
            };
            db.card_art.insert(key.to_string(), sprite);
            report.apply();
        }

        for deck in registry.decks() {
            let Some(symbol) = deck.id().and_then(|id| resolver.deck(id)) else {
                error!(global_name = %deck.global_name, id = ?deck.id(), "deck ID does not resolve to a host deck, skipping sprites");
                report.skip();
                continue;
            };

            let Some(border) = resolve_sprite(resolver, &deck.border) else {
                error!(global_name = %deck.global_name, sprite = ?deck.border.id, "deck border sprite wasn't resolved, skipping");
                report.skip();
                continue;
            };
            db.deck_borders.insert(symbol, border);

            let border_over = match &deck.border_over {
                Some(sprite) => match resolve_sprite(resolver, sprite) {
                    Some(resolved) => Some(resolved),
                    None => {
                        error!(global_name = %deck.global_name, sprite = ?sprite.id, "deck border-over sprite wasn't resolved, skipping");
                        report.skip();
                        continue;
                    }
                },
                None => None,
            };
            if let Some(over) = border_over {
                db.deck_borders_over.insert(symbol, over);
            }

            let Some(default_art) = resolve_sprite(resolver, &deck.card_art_default) else {
                error!(global_name = %deck.global_name, sprite = ?deck.card_art_default.id, "deck default card art wasn't resolved, skipping");
                report.skip();
                continue;
            };

            if self.legacy_default_art_gate && border_over.is_none() {
                debug!(global_name = %deck.global_name, "deck has no border-over sprite, default card art left to the host");
            } else {
                db.card_art_deck_default.insert(symbol, default_art);
            }
            report.apply();
        }

        report
    }

    /// Assign decks to card metadata and apply metadata overwrites.
    pub fn apply_metas(
        &self,
        registry: &RegistryState,
        db: &mut HostDb,
        resolver: &dyn SymbolResolver,
    ) -> PatchReport {
        let mut report = PatchReport::default();

        let new_cards = registry.cards().map(|card| (card.class.name.as_str(), card));
        let assigned: Vec<(&str, &ExternalCard, &DeckRef)> = new_cards
            .chain(registry.card_overwrites())
            .filter_map(|(key, card)| card.deck.as_ref().map(|deck| (key, card, deck)))
            .collect();

        for (key, card, deck) in assigned {
            let Some(meta) = db.card_metas.get_mut(key) else {
                warn!(global_name = %card.global_name, key, "no metadata record for card, deck not assigned");
                report.skip();
                continue;
            };
            let Some(symbol) = resolve_deck(registry, resolver, deck) else {
                error!(global_name = %card.global_name, %deck, "card deck doesn't resolve, skipping");
                report.skip();
                continue;
            };
            meta.deck = symbol;
            report.apply();
        }

        for (key, overwrite) in registry.meta_overwrites() {
            let Some(meta) = db.card_metas.get_mut(key) else {
                info!(global_name = %overwrite.global_name, key, "card meta overwrite has no target");
                report.skip();
                continue;
            };
            overwrite_meta(meta, overwrite, registry, resolver);
            report.apply();
        }

        report
    }
}

fn resolve_sprite(resolver: &dyn SymbolResolver, sprite: &ExternalSprite) -> Option<SpriteSym> {
    sprite.id.and_then(|id| resolver.sprite(id))
}

fn resolve_deck(
    registry: &RegistryState,
    resolver: &dyn SymbolResolver,
    deck: &DeckRef,
) -> Option<DeckSym> {
    registry
        .deck_id(deck.global_name())
        .and_then(|id| resolver.deck(id))
}

/// Write every field `overwrite` carries into `meta`.
fn overwrite_meta(
    meta: &mut CardMeta,
    overwrite: &CardMetaOverwrite,
    registry: &RegistryState,
    resolver: &dyn SymbolResolver,
) {
    if let Some(unreleased) = overwrite.unreleased {
        meta.unreleased = unreleased;
    }
    if let Some(weird_card) = overwrite.weird_card {
        meta.weird_card = weird_card;
    }
    if let Some(glossary) = &overwrite.extra_glossary {
        meta.extra_glossary.clone_from(glossary);
    }

    if let Some(upgrades) = &overwrite.upgrades_to {
        meta.upgrades_to = upgrades
            .iter()
            .filter_map(|&id| {
                let upgrade = resolver.upgrade(id);
                if upgrade.is_none() {
                    warn!(global_name = %overwrite.global_name, id, "upgrade doesn't resolve, dropped");
                }
                upgrade
            })
            .collect();
    }

    if let Some(deck) = &overwrite.deck {
        match resolve_deck(registry, resolver, deck) {
            Some(symbol) => meta.deck = symbol,
            None => error!(global_name = %overwrite.global_name, %deck, "meta overwrite deck doesn't resolve"),
        }
    }

    if let Some(dont_loc) = overwrite.dont_loc {
        meta.dont_loc = dont_loc;
    }
    if let Some(dont_offer) = overwrite.dont_offer {
        meta.dont_offer = dont_offer;
    }

    if let Some(rarity) = overwrite.rarity {
        match resolver.rarity(rarity) {
            Some(symbol) => meta.rarity = symbol,
            None => error!(global_name = %overwrite.global_name, rarity, "meta overwrite rarity doesn't resolve"),
        }
    }
}
