//! Service-level error type.

use crate::model::todo::StatusTransitionError;
use crate::repo::error::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Coarse failure class a transport layer can map onto its own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    BadRequest,
    Unauthorized,
    NotFound,
}

/// Errors from account and todo use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// User name fails `^[a-zA-Z0-9 ]{3,32}$`.
    InvalidName,
    /// Description fails `^[a-zA-Z0-9 ]{1,256}$`.
    InvalidDescription,
    /// Access token is malformed or was never issued.
    Unauthorized(RepoError),
    /// Requested status change is not allowed.
    InvalidTransition(StatusTransitionError),
    /// Store lookup failure on a non-token identifier.
    Repo(RepoError),
}

impl ServiceError {
    pub fn kind(&self) -> ServiceErrorKind {
        match self {
            Self::InvalidName | Self::InvalidDescription | Self::InvalidTransition(_) => {
                ServiceErrorKind::BadRequest
            }
            Self::Unauthorized(_) => ServiceErrorKind::Unauthorized,
            Self::Repo(err) if err.is_not_found() => ServiceErrorKind::NotFound,
            Self::Repo(_) => ServiceErrorKind::BadRequest,
        }
    }

    /// Stable snake_case code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidName => "invalid_name",
            Self::InvalidDescription => "invalid_description",
            Self::Unauthorized(_) => "unauthorized",
            Self::InvalidTransition(_) => "invalid_transition",
            Self::Repo(RepoError::InvalidFormat(_)) => "invalid_format",
            Self::Repo(RepoError::NotFound { .. }) => "not_found",
            Self::Repo(RepoError::InvalidTransition(_)) => "invalid_transition",
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName => write!(f, "invalid name"),
            Self::InvalidDescription => write!(f, "invalid description"),
            Self::Unauthorized(err) => write!(f, "unauthorized: {err}"),
            Self::InvalidTransition(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unauthorized(err) | Self::Repo(err) => Some(err),
            Self::InvalidTransition(err) => Some(err),
            Self::InvalidName | Self::InvalidDescription => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::InvalidTransition(err) => Self::InvalidTransition(err),
            other => Self::Repo(other),
        }
    }
}

impl From<StatusTransitionError> for ServiceError {
    fn from(value: StatusTransitionError) -> Self {
        Self::InvalidTransition(value)
    }
}
