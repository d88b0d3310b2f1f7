//! Card names in host locale string tables.

use indexmap::map::Entry;
use tracing::{debug, error};

use crate::host::{card_name_key, LocaleStrings, SpriteExtension, SymbolResolver};

use super::DbExtender;

impl<R: SymbolResolver, S: SpriteExtension> DbExtender<R, S> {
    /// Add the names of registered cards to a locale's string table.
    ///
    /// New cards go first, then overwrites, each in registration order.
    /// Keys already in the table are kept; the clashing name is logged and
    /// dropped. Returns the number of keys inserted.
    pub fn extend_locale_strings(&self, locale: &str, strings: &mut LocaleStrings) -> usize {
        let named = self
            .registry
            .cards()
            .chain(self.registry.card_overwrites().map(|(_, card)| card))
            .filter_map(|card| card.localization.name(locale).map(|text| (card, text)));

        let mut inserted = 0;
        for (card, text) in named {
            match strings.entry(card_name_key(&card.class.name)) {
                Entry::Vacant(slot) => {
                    slot.insert(text.to_string());
                    inserted += 1;
                }
                Entry::Occupied(slot) => {
                    error!(
                        locale,
                        key = %slot.key(),
                        global_name = %card.global_name,
                        "localization key already present, card name dropped"
                    );
                }
            }
        }

        debug!(locale, inserted, "extended locale strings");
        inserted
    }
}

#[cfg(test)]
mod tests {
    use crate::content::{ExternalCard, ExternalSprite};
    use crate::core::ExtenderConfig;
    use crate::extender::DbExtender;
    use crate::host::{CardClass, LocaleStrings, SpriteCatalog, SymbolTable};
    use crate::registry::DbRegistry;

    fn card(name: &str, class: &str) -> ExternalCard {
        ExternalCard::new(name, CardClass::card(class), ExternalSprite::original(1))
    }

    fn extender() -> DbExtender {
        DbExtender::new(ExtenderConfig::default(), SymbolTable::new(), SpriteCatalog::new())
    }

    #[test]
    fn test_inserts_names_for_locale() {
        let mut extender = extender();
        extender
            .register_card(card("mod.hero", "Hero").with_name("en", "Hero").with_name("de", "Held"), None)
            .unwrap();
        extender
            .register_card(card("mod.cannon", "BigCannon").with_name("en", "Big Cannon"), Some("Cannon"))
            .unwrap();

        let mut strings = LocaleStrings::default();
        let inserted = extender.extend_locale_strings("en", &mut strings);

        assert_eq!(inserted, 2);
        assert_eq!(strings["card.Hero.name"], "Hero");
        assert_eq!(strings["card.BigCannon.name"], "Big Cannon");
        let keys: Vec<_> = strings.keys().cloned().collect();
        assert_eq!(keys, vec!["card.Hero.name", "card.BigCannon.name"]);
    }

    #[test]
    fn test_same_text_gets_both_keys() {
        let mut extender = extender();
        extender
            .register_card(card("mod.strike", "Strike").with_name("en", "Strike"), None)
            .unwrap();
        extender
            .register_card(card("mod.strike_plus", "StrikePlus").with_name("en", "Strike"), None)
            .unwrap();

        let mut strings = LocaleStrings::default();
        assert_eq!(extender.extend_locale_strings("en", &mut strings), 2);
        assert_eq!(strings["card.Strike.name"], "Strike");
        assert_eq!(strings["card.StrikePlus.name"], "Strike");
    }

    #[test]
    fn test_existing_key_kept() {
        let mut extender = extender();
        extender
            .register_card(card("mod.hero", "Hero").with_name("en", "Modded Hero"), None)
            .unwrap();

        let mut strings = LocaleStrings::default();
        strings.insert("card.Hero.name".into(), "Host Hero".into());

        assert_eq!(extender.extend_locale_strings("en", &mut strings), 0);
        assert_eq!(strings["card.Hero.name"], "Host Hero");
    }

    #[test]
    fn test_missing_and_empty_names_skipped() {
        let mut extender = extender();
        extender
            .register_card(card("mod.a", "A").with_name("en", ""), None)
            .unwrap();
        extender
            .register_card(card("mod.b", "B").with_name("de", "Bee"), None)
            .unwrap();

        let mut strings = LocaleStrings::default();
        assert_eq!(extender.extend_locale_strings("en", &mut strings), 0);
        assert!(strings.is_empty());
    }
}
