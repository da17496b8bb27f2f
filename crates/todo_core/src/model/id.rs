//! Typed, prefixed identifiers.
//!
//! # Responsibility
//! - Give each record type its own identifier newtype so ids cannot be mixed
//!   up across namespaces at compile time.
//! - Enforce the `{prefix}_{22 symbols}` shape on every parse/deserialize path.
//!
//! # Invariants
//! - A value of `UserId`/`AccessTokenId`/`TodoListId`/`TodoItemId` obtained
//!   through `parse`, `TryFrom<String>` or serde is always well-formed.
//! - Store-internal construction from a generator skips the check; generators
//!   must honour the pattern (see `IdGenerator`).

use crate::validation::is_valid_id;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    User,
    AccessToken,
    TodoList,
    TodoItem,
}

impl IdKind {
    /// Prefix placed before the `_` separator.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::User => "usr",
            Self::AccessToken => "tkn",
            Self::TodoList => "lst",
            Self::TodoItem => "tdo",
        }
    }

    /// Human-readable record name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::AccessToken => "access token",
            Self::TodoList => "todo list",
            Self::TodoItem => "todo",
        }
    }

    /// Access tokens are bearer secrets and must not be echoed back.
    pub fn is_secret(self) -> bool {
        matches!(self, Self::AccessToken)
    }
}

/// Identifier string does not match its namespace pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdFormatError {
    pub kind: IdKind,
    pub value: String,
}

impl IdFormatError {
    pub fn new(kind: IdKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl Display for IdFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.kind.is_secret() {
            write!(f, "invalid {}", self.kind.label())
        } else {
            write!(f, "invalid {} id: `{}`", self.kind.label(), self.value)
        }
    }
}

impl Error for IdFormatError {}

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Namespace of this identifier type.
            pub const KIND: IdKind = $kind;

            /// Parses and validates an identifier string.
            pub fn parse(value: &str) -> Result<Self, IdFormatError> {
                if is_valid_id(Self::KIND, value) {
                    Ok(Self(value.to_string()))
                } else {
                    Err(IdFormatError::new(Self::KIND, value))
                }
            }

            pub(crate) fn from_generated(value: String) -> Self {
                Self(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdFormatError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                if is_valid_id(Self::KIND, &value) {
                    Ok(Self(value))
                } else {
                    Err(IdFormatError::new(Self::KIND, value))
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

typed_id!(
    /// Identifier of a registered user (`usr_…`).
    UserId => IdKind::User
);
typed_id!(
    /// Bearer access token value (`tkn_…`).
    AccessTokenId => IdKind::AccessToken
);
typed_id!(
    /// Identifier of a todo list (`lst_…`).
    TodoListId => IdKind::TodoList
);
typed_id!(
    /// Identifier of a todo item (`tdo_…`).
    TodoItemId => IdKind::TodoItem
);

#[cfg(test)]
mod tests {
    use super::{IdFormatError, IdKind, TodoItemId, UserId};

    #[test]
    fn parse_accepts_matching_prefix_only() {
        let id = UserId::parse("usr_23456789ABCDEFGHJKLMNP").expect("valid user id");
        assert_eq!(id.as_str(), "usr_23456789ABCDEFGHJKLMNP");

        let err = TodoItemId::parse("usr_23456789ABCDEFGHJKLMNP").expect_err("wrong prefix");
        assert_eq!(
            err,
            IdFormatError::new(IdKind::TodoItem, "usr_23456789ABCDEFGHJKLMNP")
        );
    }

    #[test]
    fn secret_ids_are_not_echoed_in_errors() {
        let err = IdFormatError::new(IdKind::AccessToken, "tkn_leaked");
        assert_eq!(err.to_string(), "invalid access token");

        let err = IdFormatError::new(IdKind::TodoList, "lst_x");
        assert_eq!(err.to_string(), "invalid todo list id: `lst_x`");
    }
}
