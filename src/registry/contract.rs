//! The registration contract content units program against.

use crate::content::{
    CardMetaOverwrite, ExternalArtifact, ExternalCard, ExternalCharacter, ExternalDeck,
    ExternalEnemy, ExternalMidrowItem, ExternalModifier, ExternalSpaceThing, ExternalSprite,
    ExternalStatus,
};
use crate::core::RegisterError;

/// Registry handle passed to `ContentUnit::boot`.
///
/// Registration calls report expected rejections as `Err` and never panic.
/// Categories that are not supported yet always fail with
/// `RegisterError::Unsupported`, so a unit can tell "refused" apart from
/// "not implemented".
pub trait DbRegistry {
    /// Register a new card, or a replacement for the host card `overwrite`.
    fn register_card(
        &mut self,
        card: ExternalCard,
        overwrite: Option<&str>,
    ) -> Result<(), RegisterError>;

    /// Register a deck, optionally into a built-in slot, and return its ID.
    fn register_deck(
        &mut self,
        deck: ExternalDeck,
        overwrite: Option<i64>,
    ) -> Result<u32, RegisterError>;

    /// Register a partial metadata overwrite for the host card `card_key`.
    fn register_card_meta_overwrite(
        &mut self,
        meta: CardMetaOverwrite,
        card_key: &str,
    ) -> Result<(), RegisterError>;

    fn register_character(&mut self, character: ExternalCharacter) -> Result<(), RegisterError>;

    fn register_enemy(&mut self, enemy: ExternalEnemy) -> Result<(), RegisterError>;

    fn register_artifact(&mut self, artifact: ExternalArtifact) -> Result<(), RegisterError>;

    fn register_modifier(&mut self, modifier: ExternalModifier) -> Result<(), RegisterError>;

    fn register_midrow_item(&mut self, item: ExternalMidrowItem) -> Result<(), RegisterError>;

    fn register_status(&mut self, status: ExternalStatus) -> Result<(), RegisterError>;

    fn register_space_thing(&mut self, thing: ExternalSpaceThing) -> Result<(), RegisterError>;

    /// Look up a sprite registered by a content unit.
    fn get_mod_sprite(&self, global_name: &str) -> Option<ExternalSprite>;

    /// Wrap a host sprite ID.
    fn get_original_sprite(&self, id: u32) -> ExternalSprite;
}
