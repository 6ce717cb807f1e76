use std::io::Write;

use crate::account::{Account, AccountNumber, Description, HolderName, TransactionKind};
use csv::Writer;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AccountRow<'a> {
    pub account: AccountNumber,
    pub holder: &'a HolderName,
    pub balance: f64,
    pub transactions: usize,
}

#[derive(Debug, Serialize)]
pub struct HistoryRow<'a> {
    pub account: AccountNumber,
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: &'a Description,
}

/// Account details, one row per account.
pub fn print_accounts<'a, W>(
    output: &mut W,
    accounts: impl Iterator<Item = &'a Account>,
) -> anyhow::Result<()>
where
    W: Write,
{
    write_rows(
        output,
        accounts.map(|acc| AccountRow {
            account: acc.number(),
            holder: acc.holder(),
            balance: acc.balance(),
            transactions: acc.transaction_count(),
        }),
    )
}

/// Transaction history of every account, in account order.
pub fn print_history<'a, W>(
    output: &mut W,
    accounts: impl Iterator<Item = &'a Account>,
) -> anyhow::Result<()>
where
    W: Write,
{
    write_rows(
        output,
        accounts.flat_map(|acc| {
            acc.history().iter().map(move |tx| HistoryRow {
                account: acc.number(),
                kind: tx.kind(),
                amount: tx.amount(),
                description: tx.description(),
            })
        }),
    )
}

fn write_rows<W, T>(output: &mut W, rows: impl Iterator<Item = T>) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
{
    let mut writer = Writer::from_writer(output);
    for row in rows {
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
