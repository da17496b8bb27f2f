//! Domain model for users, access tokens, todo lists and todo items.
//!
//! # Responsibility
//! - Define the records owned by the identity and todo stores.
//! - Host the todo status state machine.
//!
//! # Invariants
//! - Every record is identified by a typed, prefixed identifier.
//! - Records are never deleted; only todo items mutate, and only by status.

pub mod id;
pub mod todo;
pub mod user;
