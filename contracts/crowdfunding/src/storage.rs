//! # Storage
//!
//! Typed helpers over the persistent storage tier.
//!
//! | Key                | Type            | Description                      |
//! |--------------------|-----------------|----------------------------------|
//! | `ProjConfig(id)`   | `ProjectConfig` | Immutable project configuration  |
//! | `ProjState(id)`    | `ProjectState`  | Mutable project state            |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! ## Why split Config and State?
//!
//! Pledges are high-frequency writes. The state entry is a single `i128`;
//! the config carries the creator, goal, deadline, and milestone list and is
//! never rewritten. Separating the two keeps the per-pledge ledger write
//! small while the public API still returns the reconstructed [`Project`].
//!
//! Loads return `Option` — callers map a miss to their own error code rather
//! than panicking inside the storage layer.

use soroban_sdk::{contracttype, Env};

use crate::types::{Project, ProjectConfig, ProjectState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys. Both live in the persistent tier with
/// independent per-project TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Immutable project configuration keyed by ID.
    ProjConfig(u64),
    /// Mutable project state keyed by ID.
    ProjState(u64),
}

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ── Project Helpers ──────────────────────────────────────────────────

/// Return `true` if a project with this ID has been stored.
pub fn has_project(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::ProjConfig(id))
}

/// Save both the immutable config and the initial mutable state for a
/// new project.
pub fn save_project(env: &Env, project: &Project) {
    let config_key = DataKey::ProjConfig(project.id);
    let state_key = DataKey::ProjState(project.id);

    let config = ProjectConfig {
        id: project.id,
        creator: project.creator.clone(),
        goal: project.goal,
        deadline: project.deadline,
        milestones: project.milestones.clone(),
    };

    let state = ProjectState {
        total_pledged: project.total_pledged,
    };

    env.storage().persistent().set(&config_key, &config);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load the full `Project` by combining config and state.
pub fn load_project(env: &Env, id: u64) -> Option<Project> {
    let config = load_project_config(env, id)?;
    let state = load_project_state(env, id)?;
    Some(Project {
        id: config.id,
        creator: config.creator,
        goal: config.goal,
        deadline: config.deadline,
        milestones: config.milestones,
        total_pledged: state.total_pledged,
    })
}

/// Load only the immutable project configuration.
pub fn load_project_config(env: &Env, id: u64) -> Option<ProjectConfig> {
    let key = DataKey::ProjConfig(id);
    let config: Option<ProjectConfig> = env.storage().persistent().get(&key);
    if config.is_some() {
        bump_persistent(env, &key);
    }
    config
}

/// Load only the mutable project state.
pub fn load_project_state(env: &Env, id: u64) -> Option<ProjectState> {
    let key = DataKey::ProjState(id);
    let state: Option<ProjectState> = env.storage().persistent().get(&key);
    if state.is_some() {
        bump_persistent(env, &key);
    }
    state
}

/// Save only the mutable project state (the per-pledge write path).
pub fn save_project_state(env: &Env, id: u64, state: &ProjectState) {
    let key = DataKey::ProjState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}
