//! The host boundary: everything the extender reads from or writes into the
//! host application.
//!
//! ## Key Types
//!
//! - `HostDb`: the host's mutable content tables
//! - `CardClass`: tagged class descriptor stored in the card catalog
//! - `SymbolResolver`: numeric ID -> host symbol translation
//! - `SpriteExtension`: sprite subsystem hooks
//!
//! `SymbolTable` and `SpriteCatalog` are in-memory implementations of the
//! two collaborator traits.

pub mod class;
pub mod sprites;
pub mod symbols;
pub mod tables;

pub use class::{CardClass, ClassKind};
pub use sprites::{SpriteCatalog, SpriteExtension};
pub use symbols::{DeckSym, RaritySym, SpriteSym, SymbolResolver, SymbolTable, UpgradeSym};
pub use tables::{card_name_key, CardMeta, DeckDef, HostDb, LocaleStrings, UpgradeList};
