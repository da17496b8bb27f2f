//! Lexical validation rules shared by stores and services.
//!
//! # Responsibility
//! - Hold the canonical patterns for typed identifiers and user input.
//! - Answer "is this string well-formed" without touching any store.
//!
//! # Invariants
//! - Identifier patterns accept exactly `{prefix}_` plus 22 symbols from
//!   [`ID_ALPHABET`].
//! - Patterns are compiled once per process.

use crate::model::id::IdKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Symbols allowed after the identifier prefix.
///
/// Digits `0`/`1` and the letters `I`, `O`, `l`, `o` are left out because they
/// are easily confused when read back by humans.
pub const ID_ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Number of random symbols after `{prefix}_`.
pub const ID_TOKEN_LEN: usize = 22;

static USER_ID_RE: Lazy<Regex> = Lazy::new(|| id_regex(IdKind::User));
static ACCESS_TOKEN_RE: Lazy<Regex> = Lazy::new(|| id_regex(IdKind::AccessToken));
static TODO_LIST_ID_RE: Lazy<Regex> = Lazy::new(|| id_regex(IdKind::TodoList));
static TODO_ITEM_ID_RE: Lazy<Regex> = Lazy::new(|| id_regex(IdKind::TodoItem));

static USER_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9 ]{3,32}$").expect("valid user name regex"));
static DESCRIPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9 ]{1,256}$").expect("valid description regex"));

fn id_regex(kind: IdKind) -> Regex {
    let pattern = format!("^{}_[{}]{{{}}}$", kind.prefix(), ID_ALPHABET, ID_TOKEN_LEN);
    Regex::new(&pattern).expect("valid identifier regex")
}

/// Returns whether `value` is a well-formed identifier of `kind`.
pub fn is_valid_id(kind: IdKind, value: &str) -> bool {
    let re = match kind {
        IdKind::User => &USER_ID_RE,
        IdKind::AccessToken => &ACCESS_TOKEN_RE,
        IdKind::TodoList => &TODO_LIST_ID_RE,
        IdKind::TodoItem => &TODO_ITEM_ID_RE,
    };
    re.is_match(value)
}

/// User display name: 3..=32 ASCII letters, digits or spaces.
pub fn is_valid_user_name(value: &str) -> bool {
    USER_NAME_RE.is_match(value)
}

/// Todo description: 1..=256 ASCII letters, digits or spaces.
pub fn is_valid_description(value: &str) -> bool {
    DESCRIPTION_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_description, is_valid_id, is_valid_user_name, ID_ALPHABET};
    use crate::model::id::IdKind;

    #[test]
    fn alphabet_has_57_unambiguous_symbols() {
        assert_eq!(ID_ALPHABET.len(), 57);
        for confusing in ['0', '1', 'I', 'O', 'l', 'o'] {
            assert!(!ID_ALPHABET.contains(confusing), "{confusing} must be excluded");
        }
    }

    #[test]
    fn id_patterns_are_prefix_specific() {
        let token = "tkn_23456789ABCDEFGHJKLMNP";
        assert!(is_valid_id(IdKind::AccessToken, token));
        assert!(!is_valid_id(IdKind::User, token));
        assert!(!is_valid_id(IdKind::TodoList, token));
        assert!(!is_valid_id(IdKind::TodoItem, token));
    }

    #[test]
    fn id_patterns_reject_wrong_length_and_symbols() {
        assert!(!is_valid_id(IdKind::TodoItem, "tdo_23456789ABCDEFGHJKLMN"));
        assert!(!is_valid_id(IdKind::TodoItem, "tdo_23456789ABCDEFGHJKLMNPQ"));
        assert!(!is_valid_id(IdKind::TodoItem, "tdo_0345678 ABCDEFGHJKLMNP"));
        assert!(!is_valid_id(IdKind::TodoItem, "tdo_23456789ABCDEFGHJKLMN0"));
        assert!(!is_valid_id(IdKind::TodoItem, ""));
    }

    #[test]
    fn user_name_bounds() {
        assert!(is_valid_user_name("Bob"));
        assert!(is_valid_user_name("Ada Lovelace 1815"));
        assert!(!is_valid_user_name("Al"));
        assert!(!is_valid_user_name(&"a".repeat(33)));
        assert!(!is_valid_user_name("rm -rf"));
    }

    #[test]
    fn description_bounds() {
        assert!(is_valid_description("x"));
        assert!(is_valid_description("buy milk"));
        assert!(is_valid_description(&"a".repeat(256)));
        assert!(!is_valid_description(""));
        assert!(!is_valid_description(&"a".repeat(257)));
        assert!(!is_valid_description("milk, eggs"));
    }
}
