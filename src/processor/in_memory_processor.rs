use tracing::debug;

use crate::{
    account::{Account, AccountNumber},
    command::{BalanceAction, LedgerCommand},
};

use super::{LedgerError, LedgerProcessor, ProcessError, find_account, position};

pub const TRANSFER_OUT_DESCRIPTION: &str = "Transfer to";
pub const TRANSFER_IN_DESCRIPTION: &str = "Transfer from";

/// Accounts kept in opening order.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    accounts: Vec<Account>,
}

impl InMemoryLedger {
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn open_account(
        &mut self,
        number: AccountNumber,
        holder: &str,
    ) -> Result<&mut Account, LedgerError> {
        let account = Account::open(number, holder)?;
        debug!(account = number, holder = %account.holder(), "account opened");
        self.accounts.push(account);
        let last = self.accounts.len() - 1;
        Ok(&mut self.accounts[last])
    }

    pub fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        find_account(&self.accounts, number)
    }

    pub fn find_account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|acc| acc.number() == number)
    }

    pub fn deposit(
        &mut self,
        number: AccountNumber,
        amount: f64,
        description: &str,
    ) -> Result<(), LedgerError> {
        let acc = self
            .find_account_mut(number)
            .ok_or(LedgerError::AccountNotFound { account: number })?;
        Ok(acc.deposit(amount, description)?)
    }

    pub fn withdraw(
        &mut self,
        number: AccountNumber,
        amount: f64,
        description: &str,
    ) -> Result<(), LedgerError> {
        let acc = self
            .find_account_mut(number)
            .ok_or(LedgerError::AccountNotFound { account: number })?;
        Ok(acc.withdraw(amount, description)?)
    }

    /// Withdraws from `from`, then deposits the same amount into `to`.
    ///
    /// Both accounts are looked up before anything changes, and the deposit
    /// only happens once the withdrawal went through, so a failed transfer
    /// leaves both accounts untouched.
    pub fn transfer(
        &mut self,
        from: AccountNumber,
        to: AccountNumber,
        amount: f64,
    ) -> Result<(), LedgerError> {
        let from_idx = position(&self.accounts, from)?;
        let to_idx = position(&self.accounts, to)?;

        self.accounts[from_idx].withdraw(amount, TRANSFER_OUT_DESCRIPTION)?;
        // cannot fail, the amount was already accepted by the withdrawal
        self.accounts[to_idx].deposit(amount, TRANSFER_IN_DESCRIPTION)?;
        debug!(from, to, amount, "transfer completed");
        Ok(())
    }
}

impl LedgerProcessor for InMemoryLedger {
    fn process_command(&mut self, command: LedgerCommand) -> Result<(), ProcessError> {
        match command {
            LedgerCommand::Open(cmd) => {
                self.open_account(cmd.account, &cmd.holder)?;
            }
            LedgerCommand::Balance(cmd) => match cmd.action {
                BalanceAction::Deposit => self.deposit(cmd.account, cmd.amount, &cmd.description)?,
                BalanceAction::Withdraw => {
                    self.withdraw(cmd.account, cmd.amount, &cmd.description)?
                }
            },
            LedgerCommand::Transfer(cmd) => self.transfer(cmd.from, cmd.to, cmd.amount)?,
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        account::{AccountError, TransactionKind},
        command::{OperationKind, TransferCommand},
    };

    use super::*;

    fn ledger_with_funds(funds: &[(AccountNumber, f64)]) -> InMemoryLedger {
        let mut ledger = InMemoryLedger::default();
        for (number, amount) in funds {
            ledger
                .open_account(*number, "Test")
                .unwrap()
                .deposit(*amount, "Initial")
                .unwrap();
        }
        ledger
    }

    fn snapshot(ledger: &InMemoryLedger) -> Vec<(AccountNumber, f64, usize)> {
        ledger
            .accounts()
            .iter()
            .map(|acc| (acc.number(), acc.balance(), acc.transaction_count()))
            .collect()
    }

    #[test]
    fn find_accounts() {
        let ledger = ledger_with_funds(&[(1, 1.0), (2, 2.0)]);
        assert_eq!(ledger.find_account(2).unwrap().balance(), 2.0);
        assert!(ledger.find_account(3).is_none());
        assert!(find_account(&[], 1).is_none());
    }

    #[test]
    fn duplicate_numbers_resolve_to_first_account() {
        let mut ledger = ledger_with_funds(&[(5, 10.0), (5, 20.0)]);
        assert_eq!(ledger.accounts().len(), 2);
        assert_eq!(ledger.find_account(5).unwrap().balance(), 10.0);

        ledger.deposit(5, 1.0, "more").unwrap();
        assert_eq!(snapshot(&ledger), vec![(5, 11.0, 2), (5, 20.0, 1)]);
    }

    #[test]
    fn transfer() {
        let mut ledger = ledger_with_funds(&[(1, 100.0), (2, 5.0)]);
        ledger.transfer(1, 2, 40.0).unwrap();
        assert_eq!(snapshot(&ledger), vec![(1, 60.0, 2), (2, 45.0, 2)]);

        let out = ledger.find_account(1).unwrap().history().iter().last().unwrap();
        assert_eq!(out.kind(), TransactionKind::Withdrawal);
        assert_eq!(out.description().as_str(), "Transfer ");
        let incoming = ledger.find_account(2).unwrap().history().iter().last().unwrap();
        assert_eq!(incoming.kind(), TransactionKind::Deposit);
        assert_eq!(incoming.amount(), 40.0);
    }

    #[test]
    fn transfer_insufficient_funds() {
        let mut ledger = ledger_with_funds(&[(1, 10.0), (2, 5.0)]);
        let err = ledger.transfer(1, 2, 10.01).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Account(AccountError::InsufficientFunds { .. })
        ));
        assert_eq!(snapshot(&ledger), vec![(1, 10.0, 1), (2, 5.0, 1)]);

        let err = ledger.transfer(1, 2, -3.0).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Account(AccountError::InvalidAmount { .. })
        ));
        assert_eq!(snapshot(&ledger), vec![(1, 10.0, 1), (2, 5.0, 1)]);
    }

    #[test]
    fn transfer_unknown_account() {
        let mut ledger = ledger_with_funds(&[(1, 10.0), (2, 5.0)]);
        assert_eq!(
            ledger.transfer(1, 9, 1.0).unwrap_err(),
            LedgerError::AccountNotFound { account: 9 }
        );
        assert_eq!(
            ledger.transfer(9, 2, 1.0).unwrap_err(),
            LedgerError::AccountNotFound { account: 9 }
        );
        assert_eq!(snapshot(&ledger), vec![(1, 10.0, 1), (2, 5.0, 1)]);
    }

    #[test]
    fn transfer_to_same_account() {
        let mut ledger = ledger_with_funds(&[(1, 10.0)]);
        ledger.transfer(1, 1, 4.0).unwrap();
        assert_eq!(snapshot(&ledger), vec![(1, 10.0, 3)]);
    }

    #[test]
    fn process_some_commands() {
        let mut ledger = InMemoryLedger::default();
        let commands = [
            LedgerCommand::parse_command(OperationKind::Open, 1, None, None, Some("Ann".into())),
            LedgerCommand::parse_command(OperationKind::Open, 2, None, None, Some("Ben".into())),
            LedgerCommand::parse_command(OperationKind::Deposit, 1, None, Some(30.0), None),
            LedgerCommand::parse_command(OperationKind::Withdrawal, 1, None, Some(5.0), None),
        ];
        for cmd in commands {
            ledger.process_command(cmd.unwrap()).unwrap();
        }
        ledger
            .process_command(LedgerCommand::Transfer(TransferCommand {
                from: 1,
                to: 2,
                amount: 20.0,
            }))
            .unwrap();
        assert_eq!(snapshot(&ledger), vec![(1, 5.0, 3), (2, 20.0, 1)]);

        let err = ledger
            .process_command(
                LedgerCommand::parse_command(OperationKind::Deposit, 3, None, Some(1.0), None)
                    .unwrap(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            ProcessError::LedgerErr(LedgerError::AccountNotFound { account: 3 })
        );
    }
}
