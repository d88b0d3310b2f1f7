//! Boot plan splicing tests.

use ccg_splice::boot::{BootQueue, BootSplicer, BootStep, PatchPhase, SpliceBoundary};
use ccg_splice::core::ExtenderConfig;
use ccg_splice::host::HostDb;
use proptest::prelude::*;

fn plan(len: usize) -> BootQueue {
    (0..len)
        .map(|i| BootStep::host(format!("host {i}"), |_: &mut HostDb| {}))
        .collect()
}

fn host_names(queue: &BootQueue) -> Vec<String> {
    queue
        .iter()
        .filter(|step| !step.is_patch())
        .map(|step| step.name().to_string())
        .collect()
}

/// Test that each phase lands right after its boundary step.
#[test]
fn test_phases_follow_their_boundary() {
    let spliced = BootSplicer::default().splice(plan(10)).unwrap();
    let names: Vec<_> = spliced.iter().map(|step| step.name().to_string()).collect();

    for (after, phase) in [
        (0, PatchPhase::LogicItems),
        (1, PatchPhase::DecksAndStatus),
        (4, PatchPhase::Story),
        (5, PatchPhase::BreakAtlas),
        (7, PatchPhase::ExtraItemSprites),
        (8, PatchPhase::MetasAndStoryFunctions),
    ] {
        let host = names.iter().position(|n| *n == format!("host {after}")).unwrap();
        assert_eq!(names[host + 1], phase.name());
    }
}

/// Test splicing with boundaries from configuration.
#[test]
fn test_configured_boundaries() {
    let config = ExtenderConfig::new().with_boundaries(vec![
        SpliceBoundary::new(0, PatchPhase::LogicItems),
        SpliceBoundary::new(2, PatchPhase::MetasAndStoryFunctions),
    ]);
    let splicer = BootSplicer::from_config(&config);

    assert_eq!(splicer.required_steps(), 3);
    assert!(splicer.splice(plan(2)).is_err());

    let spliced = splicer.splice(plan(3)).unwrap();
    let phases: Vec<_> = spliced.iter().filter_map(BootStep::phase).collect();
    assert_eq!(phases, vec![PatchPhase::LogicItems, PatchPhase::MetasAndStoryFunctions]);
    assert_eq!(spliced.back().unwrap().phase(), Some(PatchPhase::MetasAndStoryFunctions));
}

proptest! {
    /// A plan of N steps becomes N+K steps, and dropping the inserted steps
    /// gives back the original order.
    #[test]
    fn prop_splice_preserves_host_order(len in 9usize..64) {
        let splicer = BootSplicer::default();
        let spliced = splicer.splice(plan(len)).unwrap();

        prop_assert_eq!(spliced.len(), len + splicer.boundaries().len());
        prop_assert_eq!(host_names(&spliced), host_names(&plan(len)));
    }

    /// A plan shorter than the last boundary comes back untouched.
    #[test]
    fn prop_short_plan_returned(len in 0usize..9) {
        let err = BootSplicer::default().splice(plan(len)).unwrap_err();
        let returned = err.into_plan();

        prop_assert_eq!(returned.len(), len);
        prop_assert_eq!(host_names(&returned), host_names(&plan(len)));
    }
}
