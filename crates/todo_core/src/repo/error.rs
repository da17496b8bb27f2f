//! Store error taxonomy.

use crate::model::id::{IdFormatError, IdKind};
use crate::model::todo::StatusTransitionError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Lookup failure returned by identity and todo stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Identifier string fails its structural pattern.
    InvalidFormat(IdFormatError),
    /// Well-formed identifier with no record behind it.
    NotFound { kind: IdKind, id: String },
    /// Stored item rejected the requested status change.
    InvalidTransition(StatusTransitionError),
}

impl RepoError {
    pub(crate) fn not_found(kind: IdKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(err) => write!(f, "{err}"),
            Self::NotFound { kind, .. } if kind.is_secret() => {
                write!(f, "{} not found", kind.label())
            }
            Self::NotFound { kind, id } => write!(f, "{} not found: {id}", kind.label()),
            Self::InvalidTransition(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFormat(err) => Some(err),
            Self::InvalidTransition(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<IdFormatError> for RepoError {
    fn from(value: IdFormatError) -> Self {
        Self::InvalidFormat(value)
    }
}

impl From<StatusTransitionError> for RepoError {
    fn from(value: StatusTransitionError) -> Self {
        Self::InvalidTransition(value)
    }
}

#[cfg(test)]
mod tests {
    use super::RepoError;
    use crate::model::id::{IdFormatError, IdKind};

    #[test]
    fn not_found_messages_hide_tokens() {
        let err = RepoError::not_found(IdKind::AccessToken, "tkn_secret");
        assert_eq!(err.to_string(), "access token not found");

        let err = RepoError::not_found(IdKind::TodoItem, "tdo_x");
        assert_eq!(err.to_string(), "todo not found: tdo_x");
    }

    #[test]
    fn format_errors_convert() {
        let err: RepoError = IdFormatError::new(IdKind::User, "bob").into();
        assert!(err.is_invalid_format());
        assert!(!err.is_not_found());
    }
}
