//! Host-native symbols and the resolver that produces them.
//!
//! Content refers to sprites, decks, upgrades and rarities by plain numeric
//! IDs. The host keys its tables by its own enumeration values. A
//! `SymbolResolver` translates between the two and answers `None` for IDs
//! the host does not know.

use std::ops::Range;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

macro_rules! host_symbol {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl $name {
            /// Create a symbol from its raw host value.
            #[must_use]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Get the raw host value.
            #[must_use]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($label, "({})"), self.0)
            }
        }
    };
}

host_symbol!(
    /// Host sprite enumeration value.
    SpriteSym,
    "Spr"
);
host_symbol!(
    /// Host deck enumeration value.
    DeckSym,
    "Deck"
);
host_symbol!(
    /// Host card upgrade enumeration value.
    UpgradeSym,
    "Upgrade"
);
host_symbol!(
    /// Host rarity enumeration value.
    RaritySym,
    "Rarity"
);

/// Translates abstract numeric IDs into host symbols.
///
/// Implementations must be pure lookups: the patcher may ask for the same
/// ID several times during one boot.
pub trait SymbolResolver {
    /// Resolve a sprite ID.
    fn sprite(&self, id: u32) -> Option<SpriteSym>;

    /// Resolve a deck ID.
    fn deck(&self, id: u32) -> Option<DeckSym>;

    /// Resolve an upgrade ID.
    fn upgrade(&self, id: u32) -> Option<UpgradeSym>;

    /// Resolve a rarity ID.
    fn rarity(&self, id: u32) -> Option<RaritySym>;
}

/// In-memory resolver backed by sets of known IDs.
///
/// Known IDs map onto the symbol with the same raw value, which is how the
/// host's enumerations behave. Unknown IDs do not resolve.
///
/// ## Example
///
/// ```
/// use ccg_splice::host::{DeckSym, SymbolResolver, SymbolTable};
///
/// let symbols = SymbolTable::new().with_decks(0..8).with_decks(10_000..10_100);
///
/// assert_eq!(symbols.deck(3), Some(DeckSym::new(3)));
/// assert_eq!(symbols.deck(10_000), Some(DeckSym::new(10_000)));
/// assert_eq!(symbols.deck(9), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    sprites: FxHashSet<u32>,
    decks: FxHashSet<u32>,
    upgrades: FxHashSet<u32>,
    rarities: FxHashSet<u32>,
}

impl SymbolTable {
    /// Create an empty table. Nothing resolves.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a range of sprite IDs resolvable.
    #[must_use]
    pub fn with_sprites(mut self, ids: Range<u32>) -> Self {
        self.sprites.extend(ids);
        self
    }

    /// Make a range of deck IDs resolvable.
    #[must_use]
    pub fn with_decks(mut self, ids: Range<u32>) -> Self {
        self.decks.extend(ids);
        self
    }

    /// Make a range of upgrade IDs resolvable.
    #[must_use]
    pub fn with_upgrades(mut self, ids: Range<u32>) -> Self {
        self.upgrades.extend(ids);
        self
    }

    /// Make a range of rarity IDs resolvable.
    #[must_use]
    pub fn with_rarities(mut self, ids: Range<u32>) -> Self {
        self.rarities.extend(ids);
        self
    }
}

impl SymbolResolver for SymbolTable {
    fn sprite(&self, id: u32) -> Option<SpriteSym> {
        self.sprites.contains(&id).then_some(SpriteSym(id))
    }

    fn deck(&self, id: u32) -> Option<DeckSym> {
        self.decks.contains(&id).then_some(DeckSym(id))
    }

    fn upgrade(&self, id: u32) -> Option<UpgradeSym> {
        self.upgrades.contains(&id).then_some(UpgradeSym(id))
    }

    fn rarity(&self, id: u32) -> Option<RaritySym> {
        self.rarities.contains(&id).then_some(RaritySym(id))
    }
}

impl<T: SymbolResolver + ?Sized> SymbolResolver for &T {
    fn sprite(&self, id: u32) -> Option<SpriteSym> {
        (**self).sprite(id)
    }

    fn deck(&self, id: u32) -> Option<DeckSym> {
        (**self).deck(id)
    }

    fn upgrade(&self, id: u32) -> Option<UpgradeSym> {
        (**self).upgrade(id)
    }

    fn rarity(&self, id: u32) -> Option<RaritySym> {
        (**self).rarity(id)
    }
}
