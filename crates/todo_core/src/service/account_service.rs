//! Account use-case service.
//!
//! # Responsibility
//! - Register users, issue login tokens and authenticate bearer tokens.
//!
//! # Invariants
//! - Names are validated before the identity store is touched.
//! - Tokens are only issued for users that resolve in the store.

use crate::model::user::{AccessToken, User};
use crate::repo::identity_repo::IdentityRepository;
use crate::service::error::ServiceError;
use crate::service::log_failure;
use crate::validation::is_valid_user_name;
use log::info;

/// Use-case facade over an identity store.
pub struct AccountService<R: IdentityRepository> {
    repo: R,
}

impl<R: IdentityRepository> AccountService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new user.
    ///
    /// # Errors
    /// - `InvalidName` when `name` fails the user name pattern.
    pub fn register(&self, name: &str) -> Result<User, ServiceError> {
        if !is_valid_user_name(name) {
            return log_failure("user_register", Err(ServiceError::InvalidName));
        }

        let user = self.repo.create_user(name);
        info!(
            "event=user_register module=service status=ok user_id={}",
            user.id
        );
        Ok(user)
    }

    /// Issues a fresh access token for an existing user.
    ///
    /// Every call issues a new token; earlier tokens stay valid.
    ///
    /// # Errors
    /// - `Repo(InvalidFormat)` when `user_id` is malformed.
    /// - `Repo(NotFound)` when the user does not exist.
    pub fn login(&self, user_id: &str) -> Result<AccessToken, ServiceError> {
        let user = log_failure("user_login", self.repo.get_user(user_id).map_err(Into::into))?;

        let access_token = self.repo.create_access_token(&user.id);
        info!(
            "event=user_login module=service status=ok user_id={}",
            user.id
        );
        Ok(access_token)
    }

    /// Resolves a bearer token.
    ///
    /// # Errors
    /// - `Unauthorized` when the token is malformed or unknown.
    pub fn authenticate(&self, token: &str) -> Result<AccessToken, ServiceError> {
        log_failure("authenticate", authorize(&self.repo, token))
    }
}

/// Shared bearer-token check used by every authenticated use case.
pub(crate) fn authorize<R: IdentityRepository>(
    repo: &R,
    token: &str,
) -> Result<AccessToken, ServiceError> {
    repo.get_access_token(token)
        .map_err(ServiceError::Unauthorized)
}
