//! Domain model for todos and todo lists.
//!
//! # Responsibility
//! - Define the task record (`Todo`) and its ordered container (`TodoList`).
//!
//! # Invariants
//! - Lists share todos with their callers; they never deep-copy them.
//! - All positional contract violations surface as `ListError`.

pub mod todo;
pub mod todo_list;
