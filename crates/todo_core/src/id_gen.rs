//! Identifier generation.
//!
//! # Responsibility
//! - Produce `{prefix}_{22 symbols}` identifiers for every record namespace.
//!
//! # Invariants
//! - Output always matches the namespace pattern in `validation`.
//! - `RandomIdGenerator` draws 122 bits from the OS RNG (UUID v4); collisions
//!   are treated as impossible and never retried.

use crate::model::id::IdKind;
use crate::validation::{ID_ALPHABET, ID_TOKEN_LEN};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Injectable identifier capability.
///
/// Implementations must return strings accepted by
/// `validation::is_valid_id(kind, _)`; stores wrap them without re-checking.
pub trait IdGenerator: Send + Sync {
    fn generate(&self, kind: IdKind) -> String;
}

/// Unpredictable identifiers for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self, kind: IdKind) -> String {
        format_id(kind, Uuid::new_v4().as_u128())
    }
}

/// Deterministic, pattern-valid identifiers (`…2223`, `…2224`, …).
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self, kind: IdKind) -> String {
        let value = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format_id(kind, u128::from(value))
    }
}

fn format_id(kind: IdKind, value: u128) -> String {
    format!("{}_{}", kind.prefix(), encode_base57(value))
}

/// Encodes `value` big-endian in base 57, left-padded to `ID_TOKEN_LEN`.
///
/// 57^22 > 2^128, so every `u128` fits.
pub(crate) fn encode_base57(mut value: u128) -> String {
    let alphabet = ID_ALPHABET.as_bytes();
    let base = alphabet.len() as u128;
    let mut digits = [alphabet[0]; ID_TOKEN_LEN];
    for slot in digits.iter_mut().rev() {
        *slot = alphabet[(value % base) as usize];
        value /= base;
    }
    digits.iter().map(|&symbol| char::from(symbol)).collect()
}

#[cfg(test)]
mod tests {
    use super::{encode_base57, IdGenerator, SequentialIdGenerator};
    use crate::model::id::IdKind;

    #[test]
    fn encode_pads_small_values() {
        assert_eq!(encode_base57(0), "2222222222222222222222");
        assert_eq!(encode_base57(1), "2222222222222222222223");
        assert_eq!(encode_base57(56), "222222222222222222222z");
        assert_eq!(encode_base57(57), "2222222222222222222232");
    }

    #[test]
    fn encode_fits_u128_max() {
        let encoded = encode_base57(u128::MAX);
        assert_eq!(encoded.len(), 22);
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.generate(IdKind::User), "usr_2222222222222222222223");
        assert_eq!(ids.generate(IdKind::TodoList), "lst_2222222222222222222224");
    }
}
