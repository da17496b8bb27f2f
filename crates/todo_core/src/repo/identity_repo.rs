//! Identity store: users and access tokens.
//!
//! # Responsibility
//! - Register users and issue bearer tokens.
//! - Resolve user ids and tokens, distinguishing malformed from unknown input.
//!
//! # Invariants
//! - `get_*` validate the identifier shape before any lookup.
//! - `create_access_token` does not check that the user exists; callers issue
//!   tokens only after resolving the user.
//! - Tokens never expire and a user may hold any number of them.

use crate::id_gen::{IdGenerator, RandomIdGenerator};
use crate::model::id::{AccessTokenId, IdKind, UserId};
use crate::model::user::{AccessToken, User};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::{read_lock, write_lock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Identity store contract consumed by the service layer.
pub trait IdentityRepository {
    /// Inserts a user with a fresh `usr_` id. `name` is assumed validated.
    fn create_user(&self, name: &str) -> User;

    /// # Errors
    /// - `InvalidFormat` when `id` is not a `usr_` identifier.
    /// - `NotFound` when no such user was created.
    fn get_user(&self, id: &str) -> RepoResult<User>;

    /// Issues a fresh `tkn_` token bound to `user_id`.
    fn create_access_token(&self, user_id: &UserId) -> AccessToken;

    /// # Errors
    /// - `InvalidFormat` when `token` is not a `tkn_` identifier.
    /// - `NotFound` when the token was never issued.
    fn get_access_token(&self, token: &str) -> RepoResult<AccessToken>;
}

impl<R: IdentityRepository + ?Sized> IdentityRepository for Arc<R> {
    fn create_user(&self, name: &str) -> User {
        (**self).create_user(name)
    }

    fn get_user(&self, id: &str) -> RepoResult<User> {
        (**self).get_user(id)
    }

    fn create_access_token(&self, user_id: &UserId) -> AccessToken {
        (**self).create_access_token(user_id)
    }

    fn get_access_token(&self, token: &str) -> RepoResult<AccessToken> {
        (**self).get_access_token(token)
    }
}

#[derive(Debug, Default)]
struct IdentityState {
    users: HashMap<UserId, User>,
    access_tokens: HashMap<AccessTokenId, AccessToken>,
}

/// Process-local identity store.
pub struct InMemoryIdentityRepository {
    state: RwLock<IdentityState>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryIdentityRepository {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            state: RwLock::new(IdentityState::default()),
            ids,
        }
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        read_lock(&self.state).users.len()
    }

    /// Number of issued tokens.
    pub fn access_token_count(&self) -> usize {
        read_lock(&self.state).access_tokens.len()
    }
}

impl Default for InMemoryIdentityRepository {
    fn default() -> Self {
        Self::new(Arc::new(RandomIdGenerator))
    }
}

impl IdentityRepository for InMemoryIdentityRepository {
    fn create_user(&self, name: &str) -> User {
        let user = User {
            id: UserId::from_generated(self.ids.generate(IdKind::User)),
            name: name.to_string(),
        };
        write_lock(&self.state)
            .users
            .insert(user.id.clone(), user.clone());
        user
    }

    fn get_user(&self, id: &str) -> RepoResult<User> {
        let user_id = UserId::parse(id)?;
        read_lock(&self.state)
            .users
            .get(&user_id)
            .cloned()
            .ok_or_else(|| RepoError::not_found(IdKind::User, id))
    }

    fn create_access_token(&self, user_id: &UserId) -> AccessToken {
        let access_token = AccessToken {
            token: AccessTokenId::from_generated(self.ids.generate(IdKind::AccessToken)),
            user_id: user_id.clone(),
        };
        write_lock(&self.state)
            .access_tokens
            .insert(access_token.token.clone(), access_token.clone());
        access_token
    }

    fn get_access_token(&self, token: &str) -> RepoResult<AccessToken> {
        let token_id = AccessTokenId::parse(token)?;
        read_lock(&self.state)
            .access_tokens
            .get(&token_id)
            .cloned()
            .ok_or_else(|| RepoError::not_found(IdKind::AccessToken, token))
    }
}
