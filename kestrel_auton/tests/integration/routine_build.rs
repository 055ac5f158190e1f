//! Routine construction: structural equivalence and alliance variants.

use kestrel_auton::command::Command;
use kestrel_auton::routine::{bump_side_fetch, center_charge_balance};
use kestrel_common::context::{Alliance, MatchContext, SpeedProfile};
use kestrel_common::geom::Pose2d;
use kestrel_common::resources::SubsystemSet;

use super::common::{StubPaths, TestRobot};

fn context(alliance: Alliance) -> MatchContext {
    MatchContext {
        alliance,
        speed_profile: SpeedProfile::Normal,
        starting_pose: Pose2d::default(),
    }
}

#[test]
fn building_twice_yields_structurally_equal_trees() {
    let robot = TestRobot::new();
    let handles = robot.handles();
    let paths = StubPaths::new();

    let first = bump_side_fetch(&context(Alliance::Blue), &handles, &paths).unwrap();
    let second = bump_side_fetch(&context(Alliance::Blue), &handles, &paths).unwrap();

    assert_eq!(first.len(), second.len());
    assert_eq!(first.requirements(), second.requirements());

    // Both builds issued the same trajectory requests, in the same order.
    let requests = paths.requests();
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0..2], requests[2..4]);

    // Building arms nothing: no command hook ran, no trajectory was
    // followed.
    assert!(robot.drive.followed().is_empty());
}

#[test]
fn red_alliance_loads_and_mirrors_the_red_variants() {
    let robot = TestRobot::new();
    let paths = StubPaths::new();

    bump_side_fetch(&context(Alliance::Red), &robot.handles(), &paths).unwrap();

    assert_eq!(
        paths.requests(),
        vec!["BumpFetchFirstHalfRed", "BumpFetchSecondHalfRed"]
    );
    assert_eq!(paths.mirror_calls.get(), 2);
}

#[test]
fn blue_alliance_uses_base_paths_untransformed() {
    let robot = TestRobot::new();
    let paths = StubPaths::new();

    bump_side_fetch(&context(Alliance::Blue), &robot.handles(), &paths).unwrap();

    assert_eq!(
        paths.requests(),
        vec!["BumpFetchFirstHalf", "BumpFetchSecondHalf"]
    );
    assert_eq!(paths.mirror_calls.get(), 0);
}

#[test]
fn routine_declares_every_subsystem_it_touches() {
    let robot = TestRobot::new();
    let paths = StubPaths::new();

    let routine = bump_side_fetch(&context(Alliance::Blue), &robot.handles(), &paths).unwrap();

    let expected = SubsystemSet::DRIVE
        | SubsystemSet::INTAKE
        | SubsystemSet::LIFT
        | SubsystemSet::VISION
        | SubsystemSet::LIGHTS;
    assert!(routine.requirements().contains(expected));
}

#[test]
fn fast_profile_shortens_the_scoring_chain() {
    let robot = TestRobot::new();
    let paths = StubPaths::new();

    let normal = bump_side_fetch(&context(Alliance::Blue), &robot.handles(), &paths).unwrap();
    let mut fast_context = context(Alliance::Blue);
    fast_context.speed_profile = SpeedProfile::Fast;
    let fast = bump_side_fetch(&fast_context, &robot.handles(), &paths).unwrap();

    // Same top-level shape; the settle dwell lives inside the scoring
    // component.
    assert_eq!(normal.len(), fast.len());
}

#[test]
fn center_balance_builds_against_the_same_handles() {
    let robot = TestRobot::new();
    let paths = StubPaths::new();

    let routine =
        center_charge_balance(&context(Alliance::Red), &robot.handles(), &paths).unwrap();

    assert_eq!(routine.len(), 3);
    assert!(
        routine
            .requirements()
            .contains(SubsystemSet::DRIVE | SubsystemSet::LIFT)
    );
    assert_eq!(paths.requests(), vec!["CenterToChargeStationRed"]);
}
