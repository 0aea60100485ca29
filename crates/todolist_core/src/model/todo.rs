//! Todo domain model.
//!
//! # Responsibility
//! - Define the single task record held by todo lists.
//! - Own the one-line textual form (`[X] ...` / `[ ] ...`).
//!
//! # Invariants
//! - `description` never changes after construction.
//! - `done` changes only through `mark_done` / `mark_undone`.
//! - Clones share one underlying task; a status change is visible through
//!   every clone and every list holding it.

use std::cell::Cell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;
use uuid::Uuid;

/// Stable identifier for a todo, used as its metadata key in log events.
pub type TodoId = Uuid;

const DONE_MARKER: char = 'X';
const NOT_DONE_MARKER: char = ' ';

#[derive(Debug)]
struct TodoState {
    id: TodoId,
    description: String,
    done: Cell<bool>,
}

/// Shared handle to one task.
///
/// `Clone` copies the handle, not the task. Use [`Todo::same_as`] for
/// identity and `==` for value equality (description and done flag).
#[derive(Debug, Clone)]
pub struct Todo {
    state: Rc<TodoState>,
}

impl Todo {
    /// Creates a not-done todo with a generated id.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            state: Rc::new(TodoState {
                id: Uuid::new_v4(),
                description: description.into(),
                done: Cell::new(false),
            }),
        }
    }

    pub fn id(&self) -> TodoId {
        self.state.id
    }

    pub fn description(&self) -> &str {
        &self.state.description
    }

    /// Marks this todo done. Idempotent.
    pub fn mark_done(&self) {
        self.state.done.set(true);
    }

    /// Marks this todo not done. Idempotent.
    pub fn mark_undone(&self) {
        self.state.done.set(false);
    }

    pub fn is_done(&self) -> bool {
        self.state.done.get()
    }

    /// Returns whether both handles point at the same task.
    pub fn same_as(&self, other: &Todo) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl PartialEq for Todo {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
            || (self.description() == other.description() && self.is_done() == other.is_done())
    }
}

impl Eq for Todo {}

impl Display for Todo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let marker = if self.is_done() {
            DONE_MARKER
        } else {
            NOT_DONE_MARKER
        };
        write!(f, "[{marker}] {}", self.description())
    }
}
