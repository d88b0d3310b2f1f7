//! Host class descriptors.
//!
//! The host keeps its card catalog as a table from class name to class and
//! builds instances from it by name. Here that table holds tagged
//! descriptors: a class name plus the host base type it derives from.

use serde::{Deserialize, Serialize};

/// Host base type a class derives from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Card,
    Artifact,
    Enemy,
    Modifier,
    MidrowItem,
    Status,
    Character,
    /// Anything else (backgrounds, maps, UI types).
    Other,
}

/// A host class: the unit the card catalog stores and instantiates.
///
/// ## Example
///
/// ```
/// use ccg_splice::host::{CardClass, ClassKind};
///
/// let class = CardClass::card("EWandererDemoCard");
/// assert!(class.is_card());
/// assert!(!CardClass::new("Relic", ClassKind::Artifact).is_card());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardClass {
    /// Class name, also the catalog key and the localization key stem.
    pub name: String,

    /// Base type.
    pub kind: ClassKind,
}

impl CardClass {
    /// Create a class descriptor.
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a descriptor for a card class.
    pub fn card(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::Card)
    }

    /// Does this class derive from the host's card base type?
    #[must_use]
    pub fn is_card(&self) -> bool {
        self.kind == ClassKind::Card
    }
}
