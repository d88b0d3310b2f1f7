//! Boot plan splicing.
//!
//! The host exposes its startup as an ordered queue of named steps. Before
//! the host runs it, the splicer interleaves `PatchPhase` steps at fixed
//! boundaries; `run_plan` then executes the augmented queue.
//!
//! ## Key Types
//!
//! - `BootStep`: a host step or an inserted patch phase
//! - `BootSplicer`: produces the augmented plan
//! - `SpliceBoundary`: which phase follows which host step

mod run;
mod splicer;
mod step;

pub use run::run_plan;
pub use splicer::{BootSplicer, SpliceBoundary, DEFAULT_BOUNDARIES};
pub use step::{BootQueue, BootStep, HostAction, HostStep, PatchPhase};
