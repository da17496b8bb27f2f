//! Store contracts and in-memory implementations.
//!
//! # Responsibility
//! - Own the identity and todo collections behind explicit store objects.
//! - Return typed `InvalidFormat`/`NotFound` failures; never log, never panic.
//!
//! # Invariants
//! - Each store guards all of its collections with one `RwLock`.
//! - Mutators trust their caller for content validation (names,
//!   descriptions, list existence on create).

pub mod error;
pub mod identity_repo;
pub mod todo_repo;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// Writes are single insert/replace operations; a poisoned guard holds whole records.
pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
