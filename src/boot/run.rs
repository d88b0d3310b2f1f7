//! Executing a boot plan.

use tracing::{debug_span, trace};

use crate::host::HostDb;

use super::step::{BootQueue, BootStep, PatchPhase};

/// Run a boot plan front to back.
///
/// Host steps run against `db`; patch steps are handed to `on_patch`.
/// Returns the number of steps executed.
pub fn run_plan<F>(mut plan: BootQueue, db: &mut HostDb, mut on_patch: F) -> usize
where
    F: FnMut(PatchPhase, &mut HostDb),
{
    let mut executed = 0;

    while let Some(step) = plan.pop_front() {
        let span = debug_span!("boot_step", index = executed, step = step.name());
        let _enter = span.enter();

        match step {
            BootStep::Host(host) => host.run(db),
            BootStep::Patch(phase) => on_patch(phase, db),
        }

        trace!("boot step finished");
        executed += 1;
    }

    executed
}
