//! Transaction identifiers
//!
//! Ids are small positive integers handed out by a counter in the budget
//! service. The newtype keeps them from being mixed up with amounts or
//! list indexes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a transaction, unique within a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    /// The first id handed out by a fresh counter
    pub const FIRST: Self = Self(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

impl From<u64> for TransactionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_is_strictly_greater() {
        let id = TransactionId::FIRST;
        assert_eq!(id.value(), 1);
        assert!(id.next() > id);
        assert_eq!(id.next().value(), 2);
    }

    #[test]
    fn test_parse() {
        assert_eq!("3".parse::<TransactionId>().unwrap(), TransactionId::new(3));
        assert_eq!("#7".parse::<TransactionId>().unwrap(), TransactionId::new(7));
        assert!("seven".parse::<TransactionId>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(TransactionId::new(12).to_string(), "12");
    }
}
