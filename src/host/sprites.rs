//! Sprite substitution subsystem boundary.
//!
//! The extender does not load or pack images. It asks a `SpriteExtension`
//! for sprites registered by content units, for wrappers around host
//! sprites, and tells it when the host atlas is ready to give up the slots
//! that content overwrites.

use tracing::{debug, info, warn};

use crate::content::ExternalSprite;
use crate::core::FxIndexMap;

/// Sprite subsystem hooks used by the registry and the boot splice.
pub trait SpriteExtension {
    /// Release host atlas slots designated for overwrite.
    ///
    /// Called once, right after the host has loaded its atlas.
    fn break_atlas(&mut self);

    /// Look up a sprite registered by a content unit.
    fn lookup_sprite(&self, global_name: &str) -> Option<ExternalSprite>;

    /// Wrap a host sprite ID.
    fn original_sprite(&self, id: u32) -> ExternalSprite;
}

/// In-memory sprite catalog.
///
/// Hands out sprite IDs above the host's own range and tracks which host
/// atlas slots are overwritten.
#[derive(Clone, Debug)]
pub struct SpriteCatalog {
    sprites: FxIndexMap<String, ExternalSprite>,
    next_id: u32,
    pending_overwrites: Vec<u32>,
    released: Vec<u32>,
    atlas_breaks: usize,
}

impl Default for SpriteCatalog {
    fn default() -> Self {
        Self::with_first_id(Self::DEFAULT_FIRST_ID)
    }
}

impl SpriteCatalog {
    /// First ID handed to content sprites unless configured otherwise.
    pub const DEFAULT_FIRST_ID: u32 = 1_000_000;

    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog allocating IDs from `first_id`.
    #[must_use]
    pub fn with_first_id(first_id: u32) -> Self {
        Self {
            sprites: FxIndexMap::default(),
            next_id: first_id,
            pending_overwrites: Vec::new(),
            released: Vec::new(),
            atlas_breaks: 0,
        }
    }

    /// Register a content sprite and assign it an ID.
    ///
    /// Returns `None` if the global name is taken or the ID space is used up.
    pub fn add(&mut self, global_name: impl Into<String>) -> Option<ExternalSprite> {
        let global_name = global_name.into();
        if self.sprites.contains_key(&global_name) {
            warn!(global_name = %global_name, "sprite global name already registered");
            return None;
        }

        let id = self.next_id;
        let Some(next) = id.checked_add(1) else {
            warn!(global_name = %global_name, id, "sprite ID counter exhausted");
            return None;
        };
        self.next_id = next;

        let sprite = ExternalSprite::new(global_name.clone()).with_id(id);
        self.sprites.insert(global_name, sprite.clone());
        Some(sprite)
    }

    /// Mark a host sprite whose atlas slot content will replace.
    pub fn add_overwrite(&mut self, host_id: u32) {
        if !self.pending_overwrites.contains(&host_id) {
            self.pending_overwrites.push(host_id);
        }
    }

    /// Host slots released by `break_atlas`.
    #[must_use]
    pub fn released_slots(&self) -> &[u32] {
        &self.released
    }

    /// How many times the atlas was broken.
    #[must_use]
    pub fn atlas_breaks(&self) -> usize {
        self.atlas_breaks
    }

    /// Number of registered content sprites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Check if no content sprites are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl SpriteExtension for SpriteCatalog {
    fn break_atlas(&mut self) {
        self.atlas_breaks += 1;
        let released = self.pending_overwrites.len();
        self.released.append(&mut self.pending_overwrites);
        info!(released, "released atlas slots for overwrite");
    }

    fn lookup_sprite(&self, global_name: &str) -> Option<ExternalSprite> {
        let found = self.sprites.get(global_name).cloned();
        if found.is_none() {
            debug!(global_name, "sprite lookup missed");
        }
        found
    }

    fn original_sprite(&self, id: u32) -> ExternalSprite {
        ExternalSprite::original(id)
    }
}
