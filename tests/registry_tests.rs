//! Registry behavior through the public contract.
//!
//! These tests verify:
//! - Deck ID allocation above the reserved range
//! - Rejections that leave the registry untouched
//! - Overwrite slots where the last registration wins

use ccg_splice::content::{CardMetaOverwrite, ExternalCard, ExternalDeck, ExternalSprite};
use ccg_splice::core::{Color, ExtenderConfig, RegisterError};
use ccg_splice::extender::DbExtender;
use ccg_splice::host::{CardClass, SpriteCatalog, SymbolTable};
use ccg_splice::registry::{DbRegistry, RegistryState};
use proptest::prelude::*;

fn deck(name: &str) -> ExternalDeck {
    ExternalDeck::new(
        name,
        Color::from_rgb(10, 20, 30),
        Color::from_rgb(255, 255, 255),
        ExternalSprite::original(1),
        ExternalSprite::original(2),
    )
}

fn card(name: &str, class: &str) -> ExternalCard {
    ExternalCard::new(name, CardClass::card(class), ExternalSprite::original(3))
}

fn extender() -> DbExtender {
    DbExtender::new(ExtenderConfig::default(), SymbolTable::new(), SpriteCatalog::new())
}

/// Test that an overwrite outside the reserved range changes nothing.
#[test]
fn test_out_of_range_overwrite_does_not_mutate() {
    let mut extender = extender();
    extender.register_deck(deck("alpha"), None).unwrap();

    for requested in [-1, 10_000, 10_001, i64::MAX] {
        let err = extender.register_deck(deck("beta"), Some(requested)).unwrap_err();
        assert_eq!(err, RegisterError::OverwriteOutOfRange { id: requested, limit: 10_000 });
    }

    let registry = extender.registry();
    assert_eq!(registry.deck_id("beta"), None);
    assert_eq!(registry.decks().count(), 1);
    assert_eq!(registry.next_deck_id(), 10_001);

    // The name is still free for a valid registration.
    assert_eq!(extender.register_deck(deck("beta"), Some(9_999)), Ok(9_999));
}

/// Test that a duplicate card name keeps the first card.
#[test]
fn test_duplicate_card_name() {
    let mut extender = extender();
    extender.register_card(card("mod.hero", "Hero"), None).unwrap();

    let err = extender
        .register_card(card("mod.hero", "OtherHero"), None)
        .unwrap_err();
    assert_eq!(err, RegisterError::DuplicateCardName("mod.hero".into()));
    assert_eq!(extender.registry().card("mod.hero").unwrap().class.name, "Hero");
    assert_eq!(extender.registry().cards().count(), 1);
}

/// Test that overwrite slots are last-write-wins and collisions are counted.
#[test]
fn test_overwrite_collisions() {
    let mut extender = extender();
    extender.register_card(card("mod.a", "CannonA"), Some("Cannon")).unwrap();
    extender.register_card(card("mod.b", "CannonB"), Some("Cannon")).unwrap();
    extender.register_deck(deck("first"), Some(3)).unwrap();
    extender.register_deck(deck("second"), Some(3)).unwrap();
    extender
        .register_card_meta_overwrite(CardMetaOverwrite::new("meta.a").with_rarity(0), "Cannon")
        .unwrap();
    extender
        .register_card_meta_overwrite(CardMetaOverwrite::new("meta.b").with_rarity(1), "Cannon")
        .unwrap();

    let registry = extender.registry();
    assert_eq!(registry.card_overwrite("Cannon").unwrap().global_name, "mod.b");
    assert_eq!(registry.deck(3).unwrap().global_name, "second");
    assert_eq!(registry.deck_by_name("first"), None);
    assert_eq!(registry.meta_overwrite("Cannon").unwrap().rarity, Some(1));
    assert_eq!(registry.overwrite_collisions(), 3);
}

/// Test that a card may only reference decks registered before it.
#[test]
fn test_card_deck_must_be_registered_first() {
    let mut extender = extender();
    let hero = card("mod.hero", "Hero").with_deck("alpha");

    assert_eq!(
        extender.register_card(hero.clone(), None),
        Err(RegisterError::InvalidReferences("mod.hero".into()))
    );

    extender.register_deck(deck("alpha"), None).unwrap();
    assert_eq!(extender.register_card(hero, None), Ok(()));
}

/// Test that the configured offset moves the reserved range.
#[test]
fn test_configured_offset() {
    let mut registry = RegistryState::from_config(&ExtenderConfig::new().with_deck_id_offset(50));

    assert_eq!(registry.register_deck(deck("a"), None), Ok(50));
    assert_eq!(registry.register_deck(deck("b"), Some(49)), Ok(49));
    assert!(registry.register_deck(deck("c"), Some(50)).is_err());
}

proptest! {
    /// Auto-assigned deck IDs start at the offset and strictly increase,
    /// whatever overwrites are interleaved.
    #[test]
    fn prop_deck_ids_strictly_increase(
        offset in 1u32..20_000,
        overwrites in proptest::collection::vec(proptest::option::of(-5i64..25_000), 1..40),
    ) {
        let mut registry = RegistryState::with_deck_id_offset(offset);
        let mut auto_ids = Vec::new();

        for (i, overwrite) in overwrites.into_iter().enumerate() {
            let result = registry.register_deck(deck(&format!("deck.{i}")), overwrite);
            match overwrite {
                None => auto_ids.push(result.unwrap()),
                Some(id) if (0..i64::from(offset)).contains(&id) => {
                    prop_assert_eq!(result, Ok(id as u32));
                }
                Some(_) => prop_assert!(result.is_err()),
            }
        }

        if let Some(first) = auto_ids.first() {
            prop_assert_eq!(*first, offset);
        }
        prop_assert!(auto_ids.windows(2).all(|w| w[0] + 1 == w[1]));
        prop_assert_eq!(registry.next_deck_id(), offset + auto_ids.len() as u32);
    }
}
