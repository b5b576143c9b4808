//! Canonical event types emitted by the crowdfunding contract.
//!
//! These mirror the Soroban events defined in
//! `contracts/crowdfunding/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the crowdfunding contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A new project was created (`created` topic).
    ProjectCreated,
    /// A pledge was accepted (`pledged` topic).
    PledgeReceived,
    /// The running total reached the goal (`goal_met` topic).
    GoalReached,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::ProjectCreated,
            "pledged" => Self::PledgeReceived,
            "goal_met" => Self::GoalReached,
            _ => Self::Unknown,
        }
    }

    /// Short identifier string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectCreated => "project_created",
            Self::PledgeReceived => "pledge_received",
            Self::GoalReached => "goal_reached",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded crowdfunding event, ready to be stored in the database.
///
/// `total` carries the post-pledge running total for `pledged` / `goal_met`
/// events so consumers can read the current funding level without summing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrowdfundEvent {
    pub event_type: String,
    pub project_id: Option<String>,
    pub backer: Option<String>,
    pub amount: Option<String>,
    pub total: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub project_id: Option<String>,
    pub backer: Option<String>,
    pub amount: Option<String>,
    pub total: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
