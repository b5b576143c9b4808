//! # Types
//!
//! Shared data structures of the crowdfunding ledger.
//!
//! ## Config / State split
//!
//! A project is stored as two separate ledger entries:
//!
//! - [`ProjectConfig`] — written once at creation; never mutated.
//! - [`ProjectState`] — rewritten on every accepted pledge.
//!
//! Pledges are the high-frequency write path, and the state entry is a single
//! `i128` versus the full config with its milestone list. The public API
//! exposes the reconstructed [`Project`] struct.
//!
//! ## Status as a Finite-State Machine
//!
//! [`ProjectStatus`] is never stored. It is recomputed from
//! `(total_pledged, goal, deadline, ledger sequence)` at each call:
//!
//! ```text
//! Open ──► Closed        (goal reached, or deadline reached)
//! ```
//!
//! `Closed` is absorbing for the purpose of accepting pledges: the total
//! cannot decrease and the ledger sequence cannot go backwards.

use soroban_sdk::{contracttype, Address, Vec};

/// Lifecycle status of a project, derived at call time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProjectStatus {
    /// Accepting pledges.
    Open,
    /// Goal reached or deadline passed; no further pledges.
    Closed,
}

/// Immutable project configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectConfig {
    pub id: u64,
    pub creator: Address,
    pub goal: i128,
    pub deadline: u32,
    pub milestones: Vec<i128>,
}

/// Mutable project state, rewritten on every accepted pledge.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectState {
    pub total_pledged: i128,
}

/// Full representation of a crowdfunding project.
///
/// Public API return type; reconstructed from the split
/// `ProjectConfig` + `ProjectState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    /// Unique identifier, assigned by the creator.
    pub id: u64,
    /// Address that created the project.
    pub creator: Address,
    /// Funding goal in micro-units.
    pub goal: i128,
    /// Ledger sequence after which pledges are rejected.
    pub deadline: u32,
    /// Declared funding checkpoints, stored verbatim.
    pub milestones: Vec<i128>,
    /// Amount pledged so far. Never exceeds `goal`, never decreases.
    pub total_pledged: i128,
}

impl Project {
    /// Derive the status at the given ledger sequence.
    pub fn status_at(&self, sequence: u32) -> ProjectStatus {
        if self.total_pledged == self.goal || sequence >= self.deadline {
            ProjectStatus::Closed
        } else {
            ProjectStatus::Open
        }
    }
}
