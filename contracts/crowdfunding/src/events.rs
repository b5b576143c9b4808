//! # Events
//!
//! Event payloads published by the contract, consumed off-chain by the
//! indexer. Topics are `(symbol, project_id)` pairs so consumers can filter
//! by project without decoding the payload.
//!
//! | Topic      | Payload           | Emitted on                          |
//! |------------|-------------------|-------------------------------------|
//! | `created`  | [`ProjectCreated`]| successful `create_project`         |
//! | `pledged`  | [`PledgeReceived`]| successful `pledge`                 |
//! | `goal_met` | [`GoalReached`]   | pledge that fills the goal exactly  |
//!
//! Events are only published after all validation has passed; a rejected
//! operation emits nothing.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// A new project was stored in the registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectCreated {
    pub project_id: u64,
    pub creator: Address,
    pub goal: i128,
    pub deadline: u32,
}

/// A pledge was accepted and applied to the running total.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PledgeReceived {
    pub project_id: u64,
    pub backer: Address,
    pub amount: i128,
    pub total_pledged: i128,
}

/// The running total reached the funding goal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoalReached {
    pub project_id: u64,
    pub total_pledged: i128,
}

pub fn emit_project_created(
    env: &Env,
    project_id: u64,
    creator: Address,
    goal: i128,
    deadline: u32,
) {
    env.events().publish(
        (symbol_short!("created"), project_id),
        ProjectCreated {
            project_id,
            creator,
            goal,
            deadline,
        },
    );
}

pub fn emit_pledge_received(
    env: &Env,
    project_id: u64,
    backer: Address,
    amount: i128,
    total_pledged: i128,
) {
    env.events().publish(
        (symbol_short!("pledged"), project_id),
        PledgeReceived {
            project_id,
            backer,
            amount,
            total_pledged,
        },
    );
}

pub fn emit_goal_reached(env: &Env, project_id: u64, total_pledged: i128) {
    env.events().publish(
        (symbol_short!("goal_met"), project_id),
        GoalReached {
            project_id,
            total_pledged,
        },
    );
}
