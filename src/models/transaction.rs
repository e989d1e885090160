//! Transaction model
//!
//! A transaction is a single income or expense entry. The kind is a tag on
//! one shared shape rather than a separate type per kind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::BudgetError;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    /// Short form code used by the entry form ("inc" / "exp")
    pub fn code(&self) -> &'static str {
        match self {
            Self::Income => "inc",
            Self::Expense => "exp",
        }
    }

    /// Sign shown in front of amounts of this kind
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }

    /// The other kind
    pub fn toggle(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inc" | "income" => Ok(Self::Income),
            "exp" | "expense" => Ok(Self::Expense),
            _ => Err(BudgetError::InvalidKind(s.to_string())),
        }
    }
}

/// A single income or expense entry
///
/// Fields are public for reading; nothing in the crate mutates a transaction
/// after the budget service has created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: Money,
    #[serde(default)]
    pub description: String,
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            description: description.into(),
            kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}",
            self.id,
            self.kind.sign(),
            self.amount,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_form_codes() {
        assert_eq!("inc".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("exp".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert_eq!(" Income ".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("EXPENSE".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
    }

    #[test]
    fn test_kind_rejects_unknown() {
        let err = "transfer".parse::<TransactionKind>().unwrap_err();
        assert!(matches!(err, BudgetError::InvalidKind(ref k) if k == "transfer"));
        assert!("".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_kind_code_round_trips_through_parse() {
        for kind in TransactionKind::ALL {
            assert_eq!(kind.code().parse::<TransactionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_toggle() {
        assert_eq!(TransactionKind::Income.toggle(), TransactionKind::Expense);
        assert_eq!(TransactionKind::Expense.toggle(), TransactionKind::Income);
    }

    #[test]
    fn test_transaction_display() {
        let txn = Transaction::new(
            TransactionId::new(2),
            TransactionKind::Expense,
            Money::from_dollars(40),
            "food",
        );
        assert_eq!(txn.to_string(), "#2 - $40.00 food");
        assert!(txn.is_expense());
        assert!(!txn.is_income());
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(
            TransactionId::new(1),
            TransactionKind::Income,
            Money::from_dollars(100),
            "salary",
        );
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"kind\":\"income\""));
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }
}
