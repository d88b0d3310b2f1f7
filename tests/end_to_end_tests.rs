//! End-to-end tests: content units boot, the host plan runs spliced, and
//! the host tables end up patched.

use ccg_splice::content::{
    CardMetaOverwrite, ContentUnit, ExternalArtifact, ExternalCard, ExternalCharacter,
    ExternalDeck, ExternalEnemy, ExternalMidrowItem, ExternalModifier, ExternalSpaceThing,
    ExternalSprite, ExternalStatus,
};
use ccg_splice::core::{Color, ContentKind, ExtenderConfig, RegisterError};
use ccg_splice::demo::{DemoUnit, SimpleHost};
use ccg_splice::extender::DbExtender;
use ccg_splice::host::{
    CardClass, ClassKind, DeckDef, DeckSym, HostDb, RaritySym, SpriteExtension, SpriteSym,
    SymbolTable, UpgradeSym,
};
use ccg_splice::patch::PatchReport;
use ccg_splice::registry::DbRegistry;
use ccg_splice::PatchPhase;

/// Sprite subsystem double that records atlas breaks.
#[derive(Default)]
struct CapturingSprites {
    breaks: usize,
}

impl SpriteExtension for CapturingSprites {
    fn break_atlas(&mut self) {
        self.breaks += 1;
    }

    fn lookup_sprite(&self, global_name: &str) -> Option<ExternalSprite> {
        (global_name == "hero.art").then(|| ExternalSprite::new(global_name).with_id(1_000_000))
    }

    fn original_sprite(&self, id: u32) -> ExternalSprite {
        ExternalSprite::original(id)
    }
}

/// Registers deck Alpha and card Hero in it.
struct AlphaUnit;

impl ContentUnit for AlphaUnit {
    fn name(&self) -> &str {
        "alpha"
    }

    fn boot(&mut self, registry: &mut dyn DbRegistry) -> Result<(), RegisterError> {
        let alpha = ExternalDeck::new(
            "Alpha",
            Color::from_rgb(0xc0, 0x30, 0x30),
            Color::from_rgb(0xff, 0xee, 0xdd),
            registry.get_original_sprite(301),
            registry.get_original_sprite(201),
        );
        registry.register_deck(alpha, None)?;

        let art = registry
            .get_mod_sprite("hero.art")
            .unwrap_or_else(|| registry.get_original_sprite(0));
        let hero = ExternalCard::new("alpha.hero", CardClass::card("Hero"), art)
            .with_deck("Alpha")
            .with_name("en", "Hero")
            .with_name("de", "Held");
        registry.register_card(hero, None)
    }
}

/// Tries every category the registry does not support.
struct EverythingUnit {
    errors: Vec<RegisterError>,
}

impl ContentUnit for EverythingUnit {
    fn name(&self) -> &str {
        "everything"
    }

    fn boot(&mut self, registry: &mut dyn DbRegistry) -> Result<(), RegisterError> {
        let class = |kind| CardClass::new("Thing", kind);
        let results = [
            registry.register_character(ExternalCharacter::new("c", class(ClassKind::Character))),
            registry.register_enemy(ExternalEnemy::new("e", class(ClassKind::Enemy))),
            registry.register_artifact(ExternalArtifact::new("a", class(ClassKind::Artifact))),
            registry.register_modifier(ExternalModifier::new("m", class(ClassKind::Modifier))),
            registry.register_midrow_item(ExternalMidrowItem::new("i", class(ClassKind::MidrowItem))),
            registry.register_status(ExternalStatus::new("s", class(ClassKind::Status))),
            registry.register_space_thing(ExternalSpaceThing::new("t", class(ClassKind::Other))),
        ];
        self.errors = results.into_iter().filter_map(Result::err).collect();
        Ok(())
    }
}

fn units(list: Vec<Box<dyn ContentUnit>>) -> Vec<Box<dyn ContentUnit>> {
    list
}

/// Test the full flow: deck Alpha gets the first content ID, and card Hero
/// ends up in the catalog, the art table and the deck of its metadata.
#[test]
fn test_alpha_hero_flow() {
    let host = SimpleHost::new();
    let mut extender =
        DbExtender::new(ExtenderConfig::default(), host.symbols(), CapturingSprites::default());

    let mut content = units(vec![Box::new(AlphaUnit)]);
    assert!(extender.boot_units(&mut content).is_success());
    assert_eq!(extender.registry().deck_id("Alpha"), Some(10_000));

    let mut db = HostDb::new();
    let executed = extender.run_boot(host.boot_plan(), &mut db).unwrap();
    assert_eq!(executed, 16);

    let alpha = DeckSym::new(10_000);
    assert_eq!(db.card_classes["Hero"], CardClass::card("Hero"));
    assert_eq!(db.card_art["Hero"], SpriteSym::new(1_000_000));
    assert_eq!(
        db.decks[&alpha],
        DeckDef::new(Color::from_rgb(0xc0, 0x30, 0x30), Color::from_rgb(0xff, 0xee, 0xdd))
    );
    assert_eq!(db.deck_borders[&alpha], SpriteSym::new(201));
    assert_eq!(db.card_art_deck_default[&alpha], SpriteSym::new(301));
    assert_eq!(db.card_metas["Hero"].deck, alpha);

    assert_eq!(extender.sprites().breaks, 1);
    assert!(extender.total_report().is_clean());
    assert_eq!(
        extender.registry().deck_by_name("Alpha").unwrap().deck_def(),
        Some(&db.decks[&alpha])
    );
}

/// Test that the locale splice adds names without touching host keys.
#[test]
fn test_locale_splice() {
    let host = SimpleHost::new();
    let mut extender =
        DbExtender::new(ExtenderConfig::default(), host.symbols(), CapturingSprites::default());
    extender.boot_units(&mut units(vec![Box::new(AlphaUnit)]));

    let overwrite = ExternalCard::new(
        "alpha.cannon",
        CardClass::card("CannonColorless"),
        ExternalSprite::original(5),
    )
    .with_name("en", "Shiny Cannon");
    extender.register_card(overwrite, Some("CannonColorless")).unwrap();

    let mut en = host.locale_strings("en");
    let before = en.len();
    assert_eq!(extender.extend_locale_strings("en", &mut en), 1);
    assert_eq!(en.len(), before + 1);
    assert_eq!(en["card.Hero.name"], "Hero");
    assert_eq!(en["card.CannonColorless.name"], "CannonColorless");

    let mut de = host.locale_strings("de");
    assert_eq!(extender.extend_locale_strings("de", &mut de), 1);
    assert_eq!(de["card.Hero.name"], "Held");
}

/// Test the demo unit against the simple host.
#[test]
fn test_demo_unit_on_simple_host() {
    let host = SimpleHost::new();
    let mut extender = DbExtender::new(
        ExtenderConfig::default(),
        host.symbols(),
        ccg_splice::host::SpriteCatalog::new(),
    );
    extender.boot_units(&mut units(vec![Box::new(DemoUnit::new())]));

    let mut db = HostDb::new();
    extender.run_boot(host.boot_plan(), &mut db).unwrap();

    let demo_deck = DeckSym::new(10_000);
    assert!(db.card_classes.contains_key("EWandererDemoCard"));
    assert_eq!(db.card_metas["EWandererDemoCard"].deck, demo_deck);
    assert!(db.decks.contains_key(&demo_deck));

    let cannon = &db.card_metas["CannonColorless"];
    assert_eq!(cannon.rarity, RaritySym::new(2));
    assert_eq!(cannon.upgrades_to.as_slice(), &[UpgradeSym::new(1), UpgradeSym::new(2)]);
    assert_eq!(cannon.deck, DeckSym::new(0));
}

/// Test that every unsupported category reports `Unsupported`.
#[test]
fn test_unsupported_categories() {
    let mut extender = DbExtender::new(
        ExtenderConfig::default(),
        SymbolTable::new(),
        CapturingSprites::default(),
    );
    let mut unit = EverythingUnit { errors: Vec::new() };
    unit.boot(&mut extender).unwrap();

    let kinds: Vec<_> = unit
        .errors
        .iter()
        .map(|err| match err {
            RegisterError::Unsupported(kind) => *kind,
            other => panic!("unexpected error {other}"),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            ContentKind::Character,
            ContentKind::Enemy,
            ContentKind::Artifact,
            ContentKind::Modifier,
            ContentKind::MidrowItem,
            ContentKind::Status,
            ContentKind::SpaceThing,
        ]
    );
    assert!(extender.registry().is_empty());
}

/// Test that a partial meta overwrite only touches the fields it sets.
#[test]
fn test_partial_meta_overwrite_end_to_end() {
    let host = SimpleHost::new();
    let mut extender =
        DbExtender::new(ExtenderConfig::default(), host.symbols(), CapturingSprites::default());
    extender
        .register_card_meta_overwrite(
            CardMetaOverwrite::new("dodge.hidden").with_dont_offer(true),
            "DodgeColorless",
        )
        .unwrap();

    let mut db = HostDb::new();
    extender.run_boot(host.boot_plan(), &mut db).unwrap();

    let dodge = &db.card_metas["DodgeColorless"];
    assert!(dodge.dont_offer);
    assert!(!dodge.unreleased);
    assert_eq!(dodge.deck, DeckSym::new(0));
    assert!(dodge.upgrades_to.is_empty());

    let metas = extender
        .reports()
        .iter()
        .find(|(phase, _)| *phase == PatchPhase::MetasAndStoryFunctions)
        .map(|(_, report)| *report);
    assert_eq!(metas, Some(PatchReport::new(1, 0)));
}
