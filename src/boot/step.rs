//! Boot plan steps.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::host::HostDb;

/// Work performed by a host boot step.
pub type HostAction = Box<dyn FnOnce(&mut HostDb)>;

/// The host's boot plan: dequeued and executed strictly front to back.
pub type BootQueue = VecDeque<BootStep>;

/// Extender work spliced into the host boot plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatchPhase {
    /// New and overwritten card classes into the card catalog.
    LogicItems,
    /// New deck definitions into the deck table.
    DecksAndStatus,
    /// Story patches. Reserved, does nothing yet.
    Story,
    /// Let the sprite subsystem release atlas slots it overwrites.
    BreakAtlas,
    /// Card art and deck sprites.
    ExtraItemSprites,
    /// Card metadata overwrites and deck assignments.
    MetasAndStoryFunctions,
}

impl PatchPhase {
    /// Every phase, in default splice order.
    pub const ALL: [PatchPhase; 6] = [
        PatchPhase::LogicItems,
        PatchPhase::DecksAndStatus,
        PatchPhase::Story,
        PatchPhase::BreakAtlas,
        PatchPhase::ExtraItemSprites,
        PatchPhase::MetasAndStoryFunctions,
    ];

    /// Name used as the step name in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PatchPhase::LogicItems => "patch logic items",
            PatchPhase::DecksAndStatus => "patch decks and statuses",
            PatchPhase::Story => "patch story",
            PatchPhase::BreakAtlas => "break atlas",
            PatchPhase::ExtraItemSprites => "patch extra item sprites",
            PatchPhase::MetasAndStoryFunctions => "patch metas and story functions",
        }
    }
}

impl std::fmt::Display for PatchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A named host boot step.
pub struct HostStep {
    name: String,
    action: HostAction,
}

impl HostStep {
    /// Create a host step.
    pub fn new(name: impl Into<String>, action: impl FnOnce(&mut HostDb) + 'static) -> Self {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }

    /// Step name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the step.
    pub fn run(self, db: &mut HostDb) {
        (self.action)(db);
    }
}

impl std::fmt::Debug for HostStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostStep").field("name", &self.name).finish_non_exhaustive()
    }
}

/// One entry of a boot plan.
#[derive(Debug)]
pub enum BootStep {
    /// A step the host planned itself.
    Host(HostStep),
    /// A step the splicer inserted.
    Patch(PatchPhase),
}

impl BootStep {
    /// Create a host step.
    pub fn host(name: impl Into<String>, action: impl FnOnce(&mut HostDb) + 'static) -> Self {
        BootStep::Host(HostStep::new(name, action))
    }

    /// Step name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            BootStep::Host(step) => step.name(),
            BootStep::Patch(phase) => phase.name(),
        }
    }

    /// Was this step inserted by the splicer?
    #[must_use]
    pub fn is_patch(&self) -> bool {
        matches!(self, BootStep::Patch(_))
    }

    /// The inserted phase, if this is a patch step.
    #[must_use]
    pub fn phase(&self) -> Option<PatchPhase> {
        match self {
            BootStep::Patch(phase) => Some(*phase),
            BootStep::Host(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_step_runs_action() {
        let step = BootStep::host("load decks", |db: &mut HostDb| {
            db.card_art.insert("Cannon".into(), crate::host::SpriteSym::new(1));
        });
        assert_eq!(step.name(), "load decks");
        assert!(!step.is_patch());

        let mut db = HostDb::new();
        if let BootStep::Host(host) = step {
            host.run(&mut db);
        }
        assert_eq!(db.card_art.len(), 1);
    }

    #[test]
    fn test_patch_step() {
        let step = BootStep::Patch(PatchPhase::BreakAtlas);
        assert!(step.is_patch());
        assert_eq!(step.phase(), Some(PatchPhase::BreakAtlas));
        assert_eq!(step.name(), "break atlas");
    }

    #[test]
    fn test_debug_hides_closure() {
        let step = BootStep::host("load fonts", |_: &mut HostDb| {});
        let debug = format!("{step:?}");
        assert!(debug.contains("load fonts"));
    }
}
