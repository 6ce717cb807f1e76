use serde::Deserialize;
use thiserror::Error;

use crate::account::AccountNumber;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Open,
    Deposit,
    Withdrawal,
    Transfer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenAccountCommand {
    pub account: AccountNumber,
    pub holder: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceAction {
    Deposit,
    Withdraw,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceCommand {
    pub account: AccountNumber,
    pub action: BalanceAction,
    pub amount: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransferCommand {
    pub from: AccountNumber,
    pub to: AccountNumber,
    pub amount: f64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Amount is required for {kind:?}")]
    MissingAmount { kind: OperationKind },
    #[error("Destination account is required for {kind:?}")]
    MissingCounterparty { kind: OperationKind },
    #[error("Holder name is required for {kind:?}")]
    MissingHolder { kind: OperationKind },
}

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerCommand {
    Open(OpenAccountCommand),
    Balance(BalanceCommand),
    Transfer(TransferCommand),
}

impl LedgerCommand {
    /// Checks that the fields `kind` needs are present. Amount values are
    /// validated later by the account itself.
    pub fn parse_command(
        kind: OperationKind,
        account: AccountNumber,
        to: Option<AccountNumber>,
        amount: Option<f64>,
        label: Option<String>,
    ) -> Result<Self, CommandError> {
        match kind {
            OperationKind::Open => {
                let Some(holder) = label else {
                    return Err(CommandError::MissingHolder { kind });
                };
                Ok(Self::Open(OpenAccountCommand { account, holder }))
            }
            OperationKind::Deposit => Ok(Self::Balance(Self::parse_balance_command(
                kind,
                account,
                amount,
                label,
                BalanceAction::Deposit,
            )?)),
            OperationKind::Withdrawal => Ok(Self::Balance(Self::parse_balance_command(
                kind,
                account,
                amount,
                label,
                BalanceAction::Withdraw,
            )?)),
            OperationKind::Transfer => {
                let Some(to) = to else {
                    return Err(CommandError::MissingCounterparty { kind });
                };
                let amount = amount.ok_or(CommandError::MissingAmount { kind })?;
                Ok(Self::Transfer(TransferCommand {
                    from: account,
                    to,
                    amount,
                }))
            }
        }
    }

    fn parse_balance_command(
        kind: OperationKind,
        account: AccountNumber,
        amount: Option<f64>,
        label: Option<String>,
        action: BalanceAction,
    ) -> Result<BalanceCommand, CommandError> {
        let amount = amount.ok_or(CommandError::MissingAmount { kind })?;
        Ok(BalanceCommand {
            account,
            action,
            amount,
            description: label.unwrap_or_default(),
        })
    }
}
