//! Core domain logic for shared todo lists.
//! This crate is the single source of truth for identity, list and item
//! invariants; transports sit on top of the service layer.

pub mod clock;
pub mod config;
pub mod id_gen;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use config::CoreConfig;
pub use id_gen::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::id::{AccessTokenId, IdFormatError, IdKind, TodoItemId, TodoListId, UserId};
pub use model::todo::{StatusTransitionError, TodoItem, TodoList, TodoStatus};
pub use model::user::{AccessToken, User};
pub use repo::error::{RepoError, RepoResult};
pub use repo::identity_repo::{IdentityRepository, InMemoryIdentityRepository};
pub use repo::todo_repo::{InMemoryTodoRepository, TodoRepository};
pub use service::account_service::AccountService;
pub use service::error::{ServiceError, ServiceErrorKind};
pub use service::todo_service::{TodoListView, TodoService, TodoView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
