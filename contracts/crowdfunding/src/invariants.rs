#![allow(dead_code)]

extern crate std;

use crate::types::{Project, ProjectStatus};

/// INV-1: Funding goal must always be positive.
pub fn assert_goal_positive(project: &Project) {
    assert!(
        project.goal > 0,
        "INV-1 violated: project {} has non-positive goal ({})",
        project.id,
        project.goal
    );
}

/// INV-2: Deadline must be a positive ledger sequence.
pub fn assert_deadline_positive(project: &Project) {
    assert!(
        project.deadline > 0,
        "INV-2 violated: project {} has zero deadline",
        project.id
    );
}

/// INV-3: The running total stays within `[0, goal]`.
pub fn assert_total_within_goal(project: &Project) {
    assert!(
        project.total_pledged >= 0,
        "INV-3 violated: project {} has negative total ({})",
        project.id,
        project.total_pledged
    );
    assert!(
        project.total_pledged <= project.goal,
        "INV-3 violated: project {} total ({}) exceeds goal ({})",
        project.id,
        project.total_pledged,
        project.goal
    );
}

/// INV-4: The running total never decreases.
pub fn assert_total_monotonic(total_before: i128, total_after: i128) {
    assert!(
        total_after >= total_before,
        "INV-4 violated: total decreased from {} to {}",
        total_before,
        total_after
    );
}

/// INV-5: Pledge invariant — after an accepted pledge of `amount`, the total
/// increases by exactly `amount`.
pub fn assert_pledge_applied(total_before: i128, total_after: i128, amount: i128) {
    assert_eq!(
        total_after,
        total_before + amount,
        "INV-5 violated: pledge invariant broken: {} + {} != {}",
        total_before,
        amount,
        total_after
    );
}

/// INV-6: Configuration immutability — fields written at creation
/// (creator, goal, deadline, milestones) never change afterwards.
pub fn assert_config_immutable(original: &Project, current: &Project) {
    assert_eq!(original.id, current.id, "INV-6 violated: project id changed");
    assert_eq!(
        original.creator, current.creator,
        "INV-6 violated: project creator changed"
    );
    assert_eq!(
        original.goal, current.goal,
        "INV-6 violated: project goal changed"
    );
    assert_eq!(
        original.deadline, current.deadline,
        "INV-6 violated: project deadline changed"
    );
    assert_eq!(
        original.milestones, current.milestones,
        "INV-6 violated: project milestones changed"
    );
}

/// INV-7: Status transition validity. `Open -> Closed` is the only
/// transition; `Closed` is absorbing.
pub fn assert_valid_status_transition(from: &ProjectStatus, to: &ProjectStatus) {
    let valid = matches!(
        (from, to),
        (ProjectStatus::Open, ProjectStatus::Open)
            | (ProjectStatus::Open, ProjectStatus::Closed)
            | (ProjectStatus::Closed, ProjectStatus::Closed)
    );

    assert!(
        valid,
        "INV-7 violated: invalid status transition from {:?} to {:?}",
        from, to
    );
}

/// Run all stateless project invariants.
pub fn assert_all_project_invariants(project: &Project) {
    assert_goal_positive(project);
    assert_deadline_positive(project);
    assert_total_within_goal(project);
}
