//! Titled, ordered todo list.
//!
//! # Responsibility
//! - Hold todos in insertion order and expose positional access/mutation.
//! - Derive filtered lists and the multi-line textual form.
//!
//! # Invariants
//! - Only `Todo` values are ever stored; untyped insertion is checked at runtime.
//! - Insertion order is canonical; removals never reorder the remainder.
//! - Every failing operation leaves the list unchanged.
//! - The list holds shared handles, so status changes made through the list
//!   are visible to callers holding the same todos (and vice versa).

use crate::capability::{Filterable, Sequence};
use crate::model::todo::Todo;
use log::{debug, warn};
use std::any::{type_name, Any};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::{Shl, ShlAssign};

pub type ListResult<T> = Result<T, ListError>;

/// Contract violations reported by list operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// A value that is not a `Todo` was offered for insertion.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// A positional operation addressed an index outside `[0, len)`.
    OutOfRange { index: usize, len: usize },
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { expected, found } => {
                write!(f, "can only add `{expected}` to a todo list, got `{found}`")
            }
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for todo list of length {len}")
            }
        }
    }
}

impl Error for ListError {}

/// Ordered collection of todos under a title.
///
/// `Clone` produces a new list sharing the same todos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    title: String,
    items: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends `todo` and returns the list for chaining.
    pub fn add(&mut self, todo: Todo) -> &mut Self {
        debug!(
            "event=todo_add module=list status=ok todo_id={} len={}",
            todo.id(),
            self.items.len() + 1
        );
        self.items.push(todo);
        self
    }

    /// Appends `value` if it is a `Todo`.
    ///
    /// Entry point for callers holding values whose type is only known at
    /// runtime.
    ///
    /// # Errors
    /// - `ListError::TypeMismatch` when `value` is anything but a `Todo`;
    ///   the list is not modified.
    pub fn try_add<T: Any>(&mut self, value: T) -> ListResult<&mut Self> {
        let boxed: Box<dyn Any> = Box::new(value);
        match boxed.downcast::<Todo>() {
            Ok(todo) => Ok(self.add(*todo)),
            Err(_) => {
                let found = type_name::<T>();
                warn!(
                    "event=todo_add module=list status=error error_code=type_mismatch found={found}"
                );
                Err(ListError::TypeMismatch {
                    expected: type_name::<Todo>(),
                    found,
                })
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First todo, or `None` for an empty list.
    pub fn first(&self) -> Option<Todo> {
        self.items.first().cloned()
    }

    /// Last todo, or `None` for an empty list.
    pub fn last(&self) -> Option<Todo> {
        self.items.last().cloned()
    }

    /// # Errors
    /// - `ListError::OutOfRange` when `index >= len()`.
    pub fn item_at(&self, index: usize) -> ListResult<Todo> {
        self.todo_at(index, "item_at").cloned()
    }

    /// Removes and returns the first todo, or `None` for an empty list.
    pub fn shift(&mut self) -> Option<Todo> {
        if self.items.is_empty() {
            return None;
        }
        let todo = self.items.remove(0);
        self.log_removed("shift", &todo);
        Some(todo)
    }

    /// Removes and returns the last todo, or `None` for an empty list.
    pub fn pop(&mut self) -> Option<Todo> {
        let todo = self.items.pop()?;
        self.log_removed("pop", &todo);
        Some(todo)
    }

    /// Removes and returns the todo at `index`, keeping the rest in order.
    ///
    /// # Errors
    /// - `ListError::OutOfRange` when `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> ListResult<Todo> {
        self.todo_at(index, "remove_at")?;
        let todo = self.items.remove(index);
        self.log_removed("remove_at", &todo);
        Ok(todo)
    }

    /// # Errors
    /// - `ListError::OutOfRange` when `index >= len()`.
    pub fn mark_done_at(&self, index: usize) -> ListResult<()> {
        self.todo_at(index, "mark_done_at")?.mark_done();
        Ok(())
    }

    /// # Errors
    /// - `ListError::OutOfRange` when `index >= len()`.
    pub fn mark_undone_at(&self, index: usize) -> ListResult<()> {
        self.todo_at(index, "mark_undone_at")?.mark_undone();
        Ok(())
    }

    pub fn mark_all_done(&self) {
        self.items.iter().for_each(Todo::mark_done);
        debug!(
            "event=todo_mark_all module=list status=ok done=true count={}",
            self.items.len()
        );
    }

    pub fn mark_all_undone(&self) {
        self.items.iter().for_each(Todo::mark_undone);
        debug!(
            "event=todo_mark_all module=list status=ok done=false count={}",
            self.items.len()
        );
    }

    /// Returns whether every todo is done. An empty list counts as done.
    pub fn is_done(&self) -> bool {
        self.items.iter().all(Todo::is_done)
    }

    /// First todo whose description equals `description` exactly.
    pub fn find_by_title(&self, description: &str) -> Option<Todo> {
        self.items
            .iter()
            .find(|todo| todo.description() == description)
            .cloned()
    }

    /// Marks the first todo matching `description` as done.
    ///
    /// Returns `false` (and changes nothing) when no todo matches.
    pub fn mark_done(&self, description: &str) -> bool {
        match self.find_by_title(description) {
            Some(todo) => {
                todo.mark_done();
                true
            }
            None => false,
        }
    }

    /// List of the done todos, same title, original order.
    pub fn all_done(&self) -> TodoList {
        self.select(Todo::is_done)
    }

    /// List of the not-done todos, same title, original order.
    pub fn all_not_done(&self) -> TodoList {
        self.reject(Todo::is_done)
    }

    /// Calls `visitor` with each todo in order and returns this same list.
    pub fn each<F>(&self, visitor: F) -> &Self
    where
        F: FnMut(&Todo),
    {
        self.items.iter().for_each(visitor);
        self
    }

    fn todo_at(&self, index: usize, operation: &'static str) -> ListResult<&Todo> {
        self.items.get(index).ok_or_else(|| {
            warn!(
                "event=todo_{operation} module=list status=error error_code=out_of_range index={index} len={}",
                self.items.len()
            );
            ListError::OutOfRange {
                index,
                len: self.items.len(),
            }
        })
    }

    fn log_removed(&self, operation: &'static str, todo: &Todo) {
        debug!(
            "event=todo_{operation} module=list status=ok todo_id={} len={}",
            todo.id(),
            self.items.len()
        );
    }
}

impl Sequence for TodoList {
    type Item = Todo;

    fn as_slice(&self) -> &[Todo] {
        &self.items
    }
}

impl Filterable for TodoList {
    type Item = Todo;

    fn select<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Todo) -> bool,
    {
        Self {
            title: self.title.clone(),
            items: self
                .items
                .iter()
                .filter(|todo| predicate(*todo))
                .cloned()
                .collect(),
        }
    }
}

impl ShlAssign<Todo> for TodoList {
    fn shl_assign(&mut self, todo: Todo) {
        self.add(todo);
    }
}

impl<'a> Shl<Todo> for &'a mut TodoList {
    type Output = &'a mut TodoList;

    fn shl(self, todo: Todo) -> Self::Output {
        self.add(todo)
    }
}

impl Extend<Todo> for TodoList {
    fn extend<I: IntoIterator<Item = Todo>>(&mut self, todos: I) {
        for todo in todos {
            self.add(todo);
        }
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Display for TodoList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "---- {} ----", self.title)?;
        for todo in &self.items {
            write!(f, "\n{todo}")?;
        }
        Ok(())
    }
}
