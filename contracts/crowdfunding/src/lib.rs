//! # Crowdfunding Contract
//!
//! A minimal crowdfunding ledger. It exposes the single Soroban contract
//! `Crowdfunding` whose entry points cover the campaign lifecycle:
//!
//! | Phase      | Entry Point(s)                        |
//! |------------|---------------------------------------|
//! | Creation   | [`Crowdfunding::create_project`]      |
//! | Funding    | [`Crowdfunding::pledge`]              |
//! | Queries    | `get_project`, `get_status`           |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`], event payloads and
//! emission to [`events`]. This file holds the public entry points and the
//! validation contract — the first violated rule wins and nothing is
//! mutated on failure.
//!
//! The ledger applies operations one at a time in a fixed total order, so no
//! locking discipline is needed here: each entry point is a single
//! read-validate-write step over one project's entries.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, Vec};

pub mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

use storage::{
    has_project, load_project, load_project_config, load_project_state, save_project,
    save_project_state,
};
pub use types::{Project, ProjectStatus};

/// Validation outcomes for both entry points.
///
/// The numeric code is the contract's wire representation; internal logic
/// and tests match on the variant. 1xx codes reject a `create_project`,
/// 2xx codes reject a `pledge`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// A project with the requested ID is already stored.
    ProjectAlreadyExists = 100,
    /// The funding goal must be strictly positive.
    InvalidFundingGoal = 101,
    /// The deadline must be a positive ledger sequence.
    InvalidDeadline = 102,
    /// No project is stored under the requested ID.
    ProjectNotFound = 200,
    /// Pledge amounts must be strictly positive.
    ZeroAmountPledge = 201,
    /// The current ledger sequence has reached the project's deadline.
    DeadlinePassed = 202,
    /// The pledge would push the total past the funding goal.
    FundingGoalExceeded = 203,
    /// The running total cannot be represented without wrapping.
    ArithmeticOverflow = 204,
}

#[contract]
pub struct Crowdfunding;

#[contractimpl]
impl Crowdfunding {
    /// Create a new campaign under a caller-assigned ID.
    ///
    /// Field validation runs before the duplicate-ID check:
    /// a request with `goal <= 0` fails with [`Error::InvalidFundingGoal`]
    /// even when the ID is already taken.
    ///
    /// - `creator` must sign the transaction and is recorded on the project.
    /// - `deadline` is an absolute ledger sequence; it is compared against
    ///   the live sequence only at pledge time, never here.
    /// - `milestones` are stored verbatim.
    ///
    /// Returns the new project's ID.
    pub fn create_project(
        env: Env,
        creator: Address,
        id: u64,
        goal: i128,
        deadline: u32,
        milestones: Vec<i128>,
    ) -> Result<u64, Error> {
        creator.require_auth();

        if goal <= 0 {
            return Err(Error::InvalidFundingGoal);
        }
        if deadline == 0 {
            return Err(Error::InvalidDeadline);
        }
        if has_project(&env, id) {
            return Err(Error::ProjectAlreadyExists);
        }

        let project = Project {
            id,
            creator: creator.clone(),
            goal,
            deadline,
            milestones,
            total_pledged: 0,
        };
        save_project(&env, &project);

        events::emit_project_created(&env, id, creator, goal, deadline);
        Ok(id)
    }

    /// Pledge `amount` towards a project.
    ///
    /// Accepted while the ledger sequence is below the deadline and the new
    /// total stays within the goal. A pledge of exactly the remaining
    /// capacity fills the project; one unit more is rejected — the contract
    /// never clamps.
    ///
    /// Returns the running total after the pledge is applied.
    pub fn pledge(env: Env, backer: Address, project_id: u64, amount: i128) -> Result<i128, Error> {
        backer.require_auth();

        let config = load_project_config(&env, project_id).ok_or(Error::ProjectNotFound)?;
        let mut state = load_project_state(&env, project_id).ok_or(Error::ProjectNotFound)?;

        if amount <= 0 {
            return Err(Error::ZeroAmountPledge);
        }
        if env.ledger().sequence() >= config.deadline {
            return Err(Error::DeadlinePassed);
        }

        let new_total = state
            .total_pledged
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        if new_total > config.goal {
            return Err(Error::FundingGoalExceeded);
        }

        state.total_pledged = new_total;
        save_project_state(&env, project_id, &state);

        events::emit_pledge_received(&env, project_id, backer, amount, new_total);
        if new_total == config.goal {
            events::emit_goal_reached(&env, project_id, new_total);
        }
        Ok(new_total)
    }

    /// Retrieve a project by its ID.
    pub fn get_project(env: Env, id: u64) -> Result<Project, Error> {
        load_project(&env, id).ok_or(Error::ProjectNotFound)
    }

    /// Derive a project's status at the current ledger sequence.
    ///
    /// `Closed` once the goal is reached or the deadline has passed;
    /// `Open` otherwise. Closed never transitions back to Open.
    pub fn get_status(env: Env, id: u64) -> Result<ProjectStatus, Error> {
        let project = load_project(&env, id).ok_or(Error::ProjectNotFound)?;
        let sequence = env.ledger().sequence();
        Ok(project.status_at(sequence))
    }
}
