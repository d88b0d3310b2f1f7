//! Content supplied by content units.
//!
//! ## Key Types
//!
//! - `ExternalCard`: a new card, or a replacement for a host card
//! - `ExternalDeck`: a new deck, or a replacement for a built-in deck slot
//! - `CardMetaOverwrite`: partial overwrite of a host card metadata record
//! - `ExternalSprite`: sprite reference with its assigned ID
//! - `ContentUnit`: the trait content bundles implement
//!
//! Descriptors are plain data: they never touch host tables themselves.

pub mod card;
pub mod deck;
pub mod meta;
pub mod sprite;
pub mod unit;
pub mod unsupported;

pub use card::{DeckRef, ExternalCard, Localization};
pub use deck::ExternalDeck;
pub use meta::CardMetaOverwrite;
pub use sprite::ExternalSprite;
pub use unit::ContentUnit;
pub use unsupported::{
    ExternalArtifact, ExternalCharacter, ExternalEnemy, ExternalMidrowItem, ExternalModifier,
    ExternalSpaceThing, ExternalStatus,
};
