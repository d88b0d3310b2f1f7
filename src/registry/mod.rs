//! Content registry.
//!
//! `RegistryState` holds what content units registered. `DbRegistry` is the
//! contract units see while booting; `DbExtender` implements it on top of a
//! `RegistryState` and the sprite subsystem.

pub mod contract;
pub mod state;

pub use contract::DbRegistry;
pub use state::RegistryState;
