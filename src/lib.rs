//! # ccg-splice
//!
//! Content registry and boot-sequence splicing for extending a closed card
//! game host.
//!
//! ## Design Principles
//!
//! 1. **Host Order Is Sacred**: Extra work is inserted between the host's
//!    boot steps, never in place of them. Dropping the inserted steps gives
//!    back the host's plan exactly.
//!
//! 2. **Registration Never Panics**: Rejections are ordinary `Err` values.
//!    Patch-time problems are logged, counted and skipped.
//!
//! 3. **Configuration Over Convention**: Deck ID ranges and splice points
//!    live in `ExtenderConfig`, not in constants spread over the modules.
//!
//! ## Architecture
//!
//! - **Registry**: content units register cards, decks and metadata
//!   overwrites by global name before the host boots.
//!
//! - **Splicer**: the host's boot queue is rewritten once, with patch phases
//!   inserted at fixed boundaries.
//!
//! - **Patcher**: each patch phase writes registered content into the host
//!   tables the preceding host step has just filled.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, colors
//! - `host`: Host tables, class descriptors, symbol resolution, sprites
//! - `content`: Content descriptors and the `ContentUnit` trait
//! - `registry`: Registry state and the `DbRegistry` contract
//! - `boot`: Boot plan steps, splicing and execution
//! - `patch`: Catalog patching
//! - `extender`: The `DbExtender` facade
//! - `demo`: Demo content unit and a minimal host
//! - `logging`: Subscriber setup

pub mod core;
pub mod host;
pub mod content;
pub mod registry;
pub mod boot;
pub mod patch;
pub mod extender;
pub mod demo;
pub mod logging;

// Re-export commonly used types
pub use crate::core::{
    Color, ContentKind, ExtenderConfig, RegisterError, SpliceError, DEFAULT_DECK_ID_OFFSET,
};

pub use crate::host::{
    CardClass, CardMeta, ClassKind, DeckDef, DeckSym, HostDb, LocaleStrings, RaritySym,
    SpriteCatalog, SpriteExtension, SpriteSym, SymbolResolver, SymbolTable, UpgradeSym,
};

pub use crate::content::{
    CardMetaOverwrite, ContentUnit, DeckRef, ExternalCard, ExternalDeck, ExternalSprite,
    Localization,
};

pub use crate::registry::{DbRegistry, RegistryState};

pub use crate::boot::{BootQueue, BootSplicer, BootStep, PatchPhase, SpliceBoundary};

pub use crate::patch::{CatalogPatcher, PatchReport};

pub use crate::extender::{BootSummary, DbExtender};
