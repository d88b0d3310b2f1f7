//! The content-provider contract.

use crate::core::RegisterError;
use crate::registry::DbRegistry;

/// An independently authored bundle of content.
///
/// The loader orders units by their dependencies and boots each exactly
/// once, before the host runs its boot plan. A unit registers everything it
/// provides during `boot` and is not called again.
///
/// Returning an error aborts the rest of that unit's boot. Whatever it
/// registered before the error stays registered.
pub trait ContentUnit {
    /// Unique unit name, used in dependency lists and logs.
    fn name(&self) -> &str;

    /// Names of units that must boot first.
    fn dependencies(&self) -> &[String] {
        &[]
    }

    /// Register this unit's content.
    fn boot(&mut self, registry: &mut dyn DbRegistry) -> Result<(), RegisterError>;
}
