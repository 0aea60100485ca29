//! In-memory todo lists.
//! Ordered, titled collections of shared todo handles with positional access,
//! bulk status changes, filtering and a plain-text rendering.

pub mod capability;
pub mod logging;
pub mod model;

pub use capability::{Filterable, Sequence};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::todo::{Todo, TodoId};
pub use model::todo_list::{ListError, ListResult, TodoList};
