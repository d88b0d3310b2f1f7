//! Sprite references held by content.

use serde::{Deserialize, Serialize};

/// A sprite as content sees it: a global name plus the numeric ID the
/// sprite subsystem assigned, if any.
///
/// Sprites without an ID have not been registered and fail reference
/// validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalSprite {
    /// Unique name across all content units.
    pub global_name: String,

    /// Assigned sprite ID.
    pub id: Option<u32>,

    /// Wraps a sprite the host ships with.
    #[serde(default)]
    pub original: bool,
}

impl ExternalSprite {
    /// Create an unregistered sprite reference.
    pub fn new(global_name: impl Into<String>) -> Self {
        Self {
            global_name: global_name.into(),
            id: None,
            original: false,
        }
    }

    /// Wrap a host sprite ID.
    #[must_use]
    pub fn original(id: u32) -> Self {
        Self {
            global_name: format!("host.spr.{id}"),
            id: Some(id),
            original: true,
        }
    }

    /// Set the assigned ID (builder pattern).
    #[must_use]
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// Has the sprite subsystem assigned an ID?
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.id.is_some()
    }

    /// Is this a wrapper around a host sprite?
    #[must_use]
    pub fn is_original(&self) -> bool {
        self.original
    }
}
