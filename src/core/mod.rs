//! Core types shared by every layer: configuration, errors, colors.
//!
//! Nothing here knows about a particular host. The registry, splicer and
//! patcher are configured through `ExtenderConfig` rather than constants
//! scattered across modules.

pub mod color;
pub mod config;
pub mod error;

pub use color::Color;
pub use config::{ExtenderConfig, DEFAULT_DECK_ID_OFFSET};
pub use error::{ContentKind, RegisterError, SpliceError};

use std::hash::BuildHasherDefault;

use rustc_hash::FxHasher;

/// Insertion-ordered map with the Fx hasher.
///
/// Registries and host tables iterate in insertion order so that
/// "first wins" collisions resolve the same way on every run.
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, BuildHasherDefault<FxHasher>>;
