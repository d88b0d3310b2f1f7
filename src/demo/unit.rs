//! The demo content unit.

use crate::content::{CardMetaOverwrite, ContentUnit, ExternalCard, ExternalDeck};
use crate::core::{Color, RegisterError};
use crate::host::CardClass;
use crate::registry::DbRegistry;

/// Sprite IDs of the host sprites the demo content reuses.
pub(crate) mod sprites {
    pub const DEMO_CARD_ART: u32 = 42;
    pub const DEMO_DECK_BORDER: u32 = 7;
    pub const DEMO_DECK_DEFAULT_ART: u32 = 12;
}

/// Registers a deck "demo.deck", a card "demo.card" in it, and makes the
/// host's colorless cannon rare with two upgrade paths.
#[derive(Clone, Debug)]
pub struct DemoUnit {
    name: String,
}

impl Default for DemoUnit {
    fn default() -> Self {
        Self {
            name: "demo".to_string(),
        }
    }
}

impl DemoUnit {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentUnit for DemoUnit {
    fn name(&self) -> &str {
        &self.name
    }

    fn boot(&mut self, registry: &mut dyn DbRegistry) -> Result<(), RegisterError> {
        let deck = ExternalDeck::new(
            "demo.deck",
            Color::from_rgb(0x4b, 0x2a, 0x8c),
            Color::from_rgb(0xff, 0xff, 0xff),
            registry.get_original_sprite(sprites::DEMO_DECK_DEFAULT_ART),
            registry.get_original_sprite(sprites::DEMO_DECK_BORDER),
        );
        registry.register_deck(deck, None)?;

        let card = ExternalCard::new(
            "demo.card",
            CardClass::card("EWandererDemoCard"),
            registry.get_original_sprite(sprites::DEMO_CARD_ART),
        )
        .with_deck("demo.deck")
        .with_name("en", "EW Demo Card");
        registry.register_card(card, None)?;

        let meta = CardMetaOverwrite::new("demo.cannon_meta")
            .with_rarity(2)
            .with_upgrades_to(vec![1, 2]);
        registry.register_card_meta_overwrite(meta, "CannonColorless")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExtenderConfig;
    use crate::extender::DbExtender;
    use crate::host::{SpriteCatalog, SymbolTable};

    fn extender() -> DbExtender {
        DbExtender::new(ExtenderConfig::default(), SymbolTable::new(), SpriteCatalog::new())
    }

    #[test]
    fn test_demo_unit_registers_content() {
        let mut extender = extender();
        DemoUnit::new().boot(&mut extender).unwrap();

        let registry = extender.registry();
        assert_eq!(registry.deck_id("demo.deck"), Some(10_000));

        let card = registry.card("demo.card").unwrap();
        assert_eq!(card.class.name, "EWandererDemoCard");
        assert_eq!(card.art.id, Some(sprites::DEMO_CARD_ART));

        let meta = registry.meta_overwrite("CannonColorless").unwrap();
        assert_eq!(meta.rarity, Some(2));
        assert_eq!(meta.upgrades_to, Some(vec![1, 2]));
    }

    #[test]
    fn test_demo_unit_boots_once() {
        let mut extender = extender();
        let mut unit = DemoUnit::new();
        unit.boot(&mut extender).unwrap();

        // A second boot collides with its own deck name.
        let err = unit.boot(&mut extender).unwrap_err();
        assert_eq!(err, RegisterError::DuplicateDeckName("demo.deck".into()));
    }
}
