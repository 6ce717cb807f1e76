use thiserror::Error;

use crate::{
    account::{Account, AccountError, AccountNumber},
    command::{CommandError, LedgerCommand},
};

pub mod in_memory_processor;

#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Account {account} does not exist")]
    AccountNotFound { account: AccountNumber },
    #[error(transparent)]
    Account(#[from] AccountError),
}

#[derive(Debug, Error, PartialEq)]
pub enum ProcessError {
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    LedgerErr(#[from] LedgerError),
}

pub trait LedgerProcessor {
    fn process_command(&mut self, command: LedgerCommand) -> Result<(), ProcessError>;
}

/// Linear scan in collection order, the first account with `number` wins.
pub fn find_account(accounts: &[Account], number: AccountNumber) -> Option<&Account> {
    accounts.iter().find(|acc| acc.number() == number)
}

fn position(accounts: &[Account], number: AccountNumber) -> Result<usize, LedgerError> {
    accounts
        .iter()
        .position(|acc| acc.number() == number)
        .ok_or(LedgerError::AccountNotFound { account: number })
}
