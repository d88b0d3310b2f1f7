//! A minimal host with a ten-step boot plan.

use crate::boot::{BootQueue, BootStep};
use crate::core::Color;
use crate::extender::DbExtender;
use crate::host::{
    card_name_key, CardClass, CardMeta, DeckDef, DeckSym, HostDb, LocaleStrings, SpriteExtension,
    SpriteSym, SymbolResolver, SymbolTable,
};

/// Host-native card classes loaded by the logic step.
const BUILTIN_CARDS: [&str; 6] = [
    "CannonColorless",
    "DodgeColorless",
    "BasicShieldColorless",
    "DrawCannon",
    "Whiteout",
    "TrashFumes",
];

/// First sprite ID of built-in card art.
const CARD_ART_BASE: u32 = 100;
/// First sprite ID of built-in deck borders.
const DECK_BORDER_BASE: u32 = 200;
/// First sprite ID of built-in default card art.
const DECK_DEFAULT_ART_BASE: u32 = 300;

/// A small stand-in for the host application.
///
/// Its boot plan has the real host's shape: logic types, decks, locales,
/// platforms, story, atlas, fonts, art dictionaries, metas, and a trailing
/// finalize step.
#[derive(Clone, Debug)]
pub struct SimpleHost {
    cards: Vec<String>,
    deck_count: u32,
}

/// Builder for creating a SimpleHost.
#[derive(Clone, Debug)]
pub struct SimpleHostBuilder {
    cards: Vec<String>,
    deck_count: u32,
}

impl Default for SimpleHostBuilder {
    fn default() -> Self {
        Self {
            cards: BUILTIN_CARDS.iter().map(|c| c.to_string()).collect(),
            deck_count: 8,
        }
    }
}

impl SimpleHostBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a built-in card class.
    pub fn card(mut self, class_name: impl Into<String>) -> Self {
        self.cards.push(class_name.into());
        self
    }

    /// Set the number of built-in decks.
    pub fn deck_count(mut self, count: u32) -> Self {
        assert!((1..=100).contains(&count), "Deck count must be 1-100");
        self.deck_count = count;
        self
    }

    pub fn build(self) -> SimpleHost {
        SimpleHost {
            cards: self.cards,
            deck_count: self.deck_count,
        }
    }
}

impl Default for SimpleHost {
    fn default() -> Self {
        SimpleHostBuilder::default().build()
    }
}

impl SimpleHost {
    /// Create a host with the default catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SimpleHostBuilder {
        SimpleHostBuilder::new()
    }

    /// Built-in card class names.
    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    pub fn deck_count(&self) -> u32 {
        self.deck_count
    }

    /// Symbols this host's enumerations define.
    ///
    /// Built-in sprites are `0..500`, content sprites start at one million.
    /// Built-in decks are `0..deck_count`, content decks start at 10000.
    pub fn symbols(&self) -> SymbolTable {
        SymbolTable::new()
            .with_sprites(0..500)
            .with_sprites(1_000_000..1_001_000)
            .with_decks(0..self.deck_count)
            .with_decks(10_000..10_100)
            .with_upgrades(0..4)
            .with_rarities(0..3)
    }

    /// Load a locale: the host's own strings plus the names of cards
    /// registered with `extender`. Host strings win on a key clash.
    pub fn load_locale<R, S>(&self, locale: &str, extender: &DbExtender<R, S>) -> LocaleStrings
    where
        R: SymbolResolver,
        S: SpriteExtension,
    {
        let mut strings = self.locale_strings(locale);
        extender.extend_locale_strings(locale, &mut strings);
        strings
    }

    /// The host's own string table for a locale, without content names.
    pub fn locale_strings(&self, locale: &str) -> LocaleStrings {
        let mut strings = LocaleStrings::default();
        if locale == "en" {
            for class in &self.cards {
                strings.insert(card_name_key(class), class.clone());
            }
        }
        strings
    }

    /// A fresh boot plan. Each boot consumes its own plan.
    pub fn boot_plan(&self) -> BootQueue {
        let cards = self.cards.clone();
        let art_cards = self.cards.clone();
        let deck_count = self.deck_count;

        let mut plan = BootQueue::with_capacity(10);

        plan.push_back(BootStep::host("load logic types", move |db: &mut HostDb| {
            for class in cards {
                db.card_classes.insert(class.clone(), CardClass::card(class));
            }
        }));

        plan.push_back(BootStep::host("load decks and statuses", move |db: &mut HostDb| {
            for id in 0..deck_count {
                let shade = (id * 30 % 256) as u8;
                let def = DeckDef::new(Color::from_rgb(shade, 64, 128), Color::from_rgb(255, 255, 255));
                db.decks.insert(DeckSym::new(id), def);
            }
        }));

        for name in ["load localisations", "load platforms", "load story", "load atlas", "load fonts"] {
            plan.push_back(BootStep::host(name, |_: &mut HostDb| {}));
        }

        plan.push_back(BootStep::host("load art dictionaries", move |db: &mut HostDb| {
            for (i, class) in (0u32..).zip(art_cards) {
                db.card_art.insert(class, SpriteSym::new(CARD_ART_BASE + i));
            }
            for id in 0..deck_count {
                db.deck_borders.insert(DeckSym::new(id), SpriteSym::new(DECK_BORDER_BASE + id));
                db.card_art_deck_default
                    .insert(DeckSym::new(id), SpriteSym::new(DECK_DEFAULT_ART_BASE + id));
            }
        }));

        plan.push_back(BootStep::host("load metas and story functions", |db: &mut HostDb| {
            let missing: Vec<String> = db
                .card_classes
                .keys()
                .filter(|class| !db.card_metas.contains_key(*class))
                .cloned()
                .collect();
            for class in missing {
                db.card_metas.insert(class, CardMeta::new(DeckSym::new(0)));
            }
        }));

        plan.push_back(BootStep::host("finalize", |_: &mut HostDb| {}));

        plan
    }
}
