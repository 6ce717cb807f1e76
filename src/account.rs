use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub type AccountNumber = i32;

/// Number of transactions an account's history can hold.
pub const MAX_TRANSACTIONS: usize = 10;
pub const HOLDER_NAME_CAPACITY: usize = 4;
pub const DESCRIPTION_CAPACITY: usize = 9;

/// Text that keeps at most `N` characters of its input, the rest is cut off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoundedText<const N: usize>(String);

impl<const N: usize> BoundedText<N> {
    pub fn new(text: &str) -> Self {
        Self(text.chars().take(N).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> fmt::Display for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub type HolderName = BoundedText<HOLDER_NAME_CAPACITY>;
pub type Description = BoundedText<DESCRIPTION_CAPACITY>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

/// A single recorded balance change. Never modified once recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: f64,
    description: Description,
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &Description {
        &self.description
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AccountError {
    #[error("Amount must be a positive number, got {amount}")]
    InvalidAmount { amount: f64 },
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: f64, available: f64 },
    #[error("Failed to allocate transaction history for account {account}")]
    AllocationFailure { account: AccountNumber },
}

/// Append-only history bounded by [`MAX_TRANSACTIONS`].
#[derive(Debug, Default)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
}

impl TransactionLog {
    fn reserved() -> Result<Self, std::collections::TryReserveError> {
        let mut entries = Vec::new();
        entries.try_reserve_exact(MAX_TRANSACTIONS)?;
        Ok(Self { entries })
    }

    /// Returns `false` when the log is full and the transaction was dropped.
    fn record(&mut self, transaction: Transaction) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries.push(transaction);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_TRANSACTIONS
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }
}

#[derive(Debug)]
pub struct Account {
    number: AccountNumber,
    holder: HolderName,
    balance: f64,
    history: TransactionLog,
}

impl Account {
    /// Opens an empty account. Account numbers are not checked for uniqueness.
    pub fn open(number: AccountNumber, holder: &str) -> Result<Self, AccountError> {
        let history = TransactionLog::reserved()
            .map_err(|_| AccountError::AllocationFailure { account: number })?;
        Ok(Self {
            number,
            holder: HolderName::new(holder),
            balance: 0.0,
            history,
        })
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn holder(&self) -> &HolderName {
        &self.holder
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn history(&self) -> &TransactionLog {
        &self.history
    }

    pub fn transaction_count(&self) -> usize {
        self.history.len()
    }

    pub fn deposit(&mut self, amount: f64, description: &str) -> Result<(), AccountError> {
        validate_amount(amount)?;
        self.balance += amount;
        self.record(TransactionKind::Deposit, amount, description);
        Ok(())
    }

    pub fn withdraw(&mut self, amount: f64, description: &str) -> Result<(), AccountError> {
        validate_amount(amount)?;
        if self.balance < amount {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.record(TransactionKind::Withdrawal, amount, description);
        Ok(())
    }

    // balance is already updated at this point, a full log just loses the record
    fn record(&mut self, kind: TransactionKind, amount: f64, description: &str) {
        let recorded = self.history.record(Transaction {
            kind,
            amount,
            description: Description::new(description),
        });
        if recorded {
            debug!(account = self.number, ?kind, amount, "transaction recorded");
        } else {
            debug!(account = self.number, ?kind, amount, "history is full, record dropped");
        }
    }
}

fn validate_amount(amount: f64) -> Result<(), AccountError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(AccountError::InvalidAmount { amount })
    }
}
