//! Wire types for the calendar-tasks server API.
//!
//! Field names are camelCase on the wire, matching the server's JSON.

use serde::{Deserialize, Serialize};

/// A calendar the account can track tasks in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarInfo {
    pub id: String,
    pub summary: String,
}

/// One tracked event with its task lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    pub id: String,
    pub summary: String,
    pub created: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub completed: Vec<String>,
    #[serde(default)]
    pub incomplete: Vec<String>,
}

/// The task lists of an event after a mutation, as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskSet {
    #[serde(default)]
    pub completed: Vec<String>,
    #[serde(default)]
    pub incomplete: Vec<String>,
}

/// Task mutation sent as the `op` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOp {
    Done,
    Undo,
}

impl TaskOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskOp::Done => "DONE",
            TaskOp::Undo => "UNDO",
        }
    }
}

/// Body for single-task mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TaskUpdate {
    pub task: String,
}
