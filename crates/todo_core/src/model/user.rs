//! Identity records.
//!
//! # Invariants
//! - `User` is immutable after registration.
//! - `AccessToken` is never mutated, never expires and is not unique per user.

use crate::model::id::{AccessTokenId, UserId};
use serde::{Deserialize, Serialize};

/// Registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Display name, already validated by the registering caller.
    pub name: String,
}

/// Bearer token issued at login and bound to one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: AccessTokenId,
    pub user_id: UserId,
}
