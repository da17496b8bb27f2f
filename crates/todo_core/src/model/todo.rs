//! Todo list and todo item records plus the status state machine.
//!
//! # Responsibility
//! - Define `TodoList`/`TodoItem` as stored by the todo store.
//! - Decide which status transitions are legal.
//!
//! # Invariants
//! - `status` only ever holds a `TodoStatus` variant.
//! - Legal transitions: `todo -> ongoing`, `ongoing -> done|todo`,
//!   `done -> ongoing`. No self-loops.
//! - `change_status` never touches `updated_at`; the store stamps it.

use crate::clock::Timestamp;
use crate::model::id::{TodoItemId, TodoListId, UserId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Progress state of a todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    /// Not started. Initial state of every new item.
    Todo,
    /// Being worked on.
    Ongoing,
    /// Finished. Can be reopened into `Ongoing`.
    Done,
}

impl TodoStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Ongoing => "ongoing",
            Self::Done => "done",
        }
    }

    /// Parses the wire value; returns `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "todo" => Some(Self::Todo),
            "ongoing" => Some(Self::Ongoing),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns whether moving from `self` to `next` is allowed.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Todo, Self::Ongoing)
                | (Self::Ongoing, Self::Done)
                | (Self::Ongoing, Self::Todo)
                | (Self::Done, Self::Ongoing)
        )
    }
}

impl Display for TodoStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected status change. `to` keeps the raw requested value so unknown
/// statuses can still be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTransitionError {
    pub from: TodoStatus,
    pub to: String,
}

impl Display for StatusTransitionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid status transition from {} to {}",
            self.from, self.to
        )
    }
}

impl Error for StatusTransitionError {}

/// Container for todo items. Membership lives on `TodoItem::list_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: TodoListId,
}

/// One entry on a todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoItemId,
    pub list_id: TodoListId,
    /// Creator of the item.
    pub user_id: UserId,
    pub description: String,
    pub status: TodoStatus,
    /// Unix epoch milliseconds of the last store write.
    pub updated_at: Timestamp,
}

impl TodoItem {
    /// Applies a status change requested as a wire string.
    ///
    /// # Errors
    /// - `StatusTransitionError` when `new_status` is unknown or the
    ///   transition is not in the table. `self` is left unchanged.
    pub fn change_status(&mut self, new_status: &str) -> Result<(), StatusTransitionError> {
        match TodoStatus::parse(new_status) {
            Some(next) => self.transition_to(next),
            None => Err(StatusTransitionError {
                from: self.status,
                to: new_status.to_string(),
            }),
        }
    }

    /// Typed variant of [`TodoItem::change_status`].
    pub fn transition_to(&mut self, next: TodoStatus) -> Result<(), StatusTransitionError> {
        if !self.status.can_transition_to(next) {
            return Err(StatusTransitionError {
                from: self.status,
                to: next.as_str().to_string(),
            });
        }
        self.status = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TodoStatus;

    const ALL: [TodoStatus; 3] = [TodoStatus::Todo, TodoStatus::Ongoing, TodoStatus::Done];

    #[test]
    fn transition_table_matches_state_machine() {
        let allowed = [
            (TodoStatus::Todo, TodoStatus::Ongoing),
            (TodoStatus::Ongoing, TodoStatus::Done),
            (TodoStatus::Ongoing, TodoStatus::Todo),
            (TodoStatus::Done, TodoStatus::Ongoing),
        ];
        for from in ALL {
            for to in ALL {
                assert_eq!(
                    from.can_transition_to(to),
                    allowed.contains(&(from, to)),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn parse_roundtrips_wire_values() {
        for status in ALL {
            assert_eq!(TodoStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TodoStatus::parse("Done"), None);
        assert_eq!(TodoStatus::parse("in_progress"), None);
    }
}
