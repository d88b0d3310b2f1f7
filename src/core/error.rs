//! Error types.
//!
//! Registration rejections are ordinary, expected outcomes: the registry
//! logs them and hands them back so the content unit can surface them.
//! `RegisterError::Unsupported` is the one hard signal, reserved for content
//! categories the extender does not handle yet.
//!
//! Patch-time problems (unresolved symbols, missing overwrite targets) are
//! never errors. They are logged and counted in a `PatchReport`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::boot::BootQueue;

/// Category of externally supplied content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    Card,
    Deck,
    CardMeta,
    Character,
    Enemy,
    Artifact,
    Modifier,
    MidrowItem,
    Status,
    SpaceThing,
}

impl ContentKind {
    /// Lowercase name used in log output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ContentKind::Card => "card",
            ContentKind::Deck => "deck",
            ContentKind::CardMeta => "card meta",
            ContentKind::Character => "character",
            ContentKind::Enemy => "enemy",
            ContentKind::Artifact => "artifact",
            ContentKind::Modifier => "modifier",
            ContentKind::MidrowItem => "midrow item",
            ContentKind::Status => "status",
            ContentKind::SpaceThing => "space thing",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a registration call was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("card {global_name} uses class {class}, which is not a card class")]
    NotACard { global_name: String, class: String },

    #[error("card global name {0} is already registered")]
    DuplicateCardName(String),

    #[error("card {0} references unregistered assets")]
    InvalidReferences(String),

    #[error("deck {global_name} already carries ID {id}")]
    DeckAlreadyRegistered { global_name: String, id: u32 },

    #[error("deck global name is empty")]
    BlankDeckName,

    #[error("deck global name {0} is already registered")]
    DuplicateDeckName(String),

    #[error("no deck IDs left above offset {offset}")]
    DeckIdsExhausted { offset: u32 },

    #[error("deck overwrite ID {id} is outside the reserved range 0..{limit}")]
    OverwriteOutOfRange { id: i64, limit: u32 },

    #[error("card meta global name is empty")]
    BlankMetaName,

    #[error("card meta global name {0} is already registered")]
    DuplicateMetaName(String),

    #[error("registering {0} content is not supported")]
    Unsupported(ContentKind),
}

impl RegisterError {
    /// True for the "not implemented" signal, false for ordinary rejections.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, RegisterError::Unsupported(_))
    }
}

/// Why the host boot plan could not be spliced.
#[derive(Debug, Error)]
pub enum SpliceError {
    /// The plan ends before the last splice boundary. The untouched plan is
    /// handed back so the host can still run it.
    #[error("boot plan has {found} steps but splicing needs at least {required}")]
    PlanTooShort {
        required: usize,
        found: usize,
        plan: BootQueue,
    },
}

impl SpliceError {
    /// Recover the original plan.
    #[must_use]
    pub fn into_plan(self) -> BootQueue {
        match self {
            SpliceError::PlanTooShort { plan, .. } => plan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_is_distinct() {
        assert!(RegisterError::Unsupported(ContentKind::Enemy).is_unsupported());
        assert!(!RegisterError::BlankDeckName.is_unsupported());
    }

    #[test]
    fn test_messages() {
        let err = RegisterError::OverwriteOutOfRange { id: 10_000, limit: 10_000 };
        assert_eq!(
            err.to_string(),
            "deck overwrite ID 10000 is outside the reserved range 0..10000"
        );
        assert_eq!(
            RegisterError::Unsupported(ContentKind::MidrowItem).to_string(),
            "registering midrow item content is not supported"
        );
    }
}
