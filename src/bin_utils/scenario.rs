use crate::processor::in_memory_processor::InMemoryLedger;

/// Opens three accounts and runs a fixed set of deposits, withdrawals and a
/// transfer against them. Results of the individual operations are ignored.
///
/// Resulting balances: 1001 = 350, 1002 = 800, 1003 = 850.
pub fn run_demo(ledger: &mut InMemoryLedger) -> anyhow::Result<()> {
    for (number, holder) in [(1001, "Alice"), (1002, "Bob"), (1003, "Charlie")] {
        ledger.open_account(number, holder)?;
    }

    let _ = ledger.deposit(1001, 500.0, "Initial");
    let _ = ledger.deposit(1002, 1000.0, "Initial");
    let _ = ledger.deposit(1003, 750.0, "Initial");

    let _ = ledger.withdraw(1002, 200.0, "withdrawal");
    let _ = ledger.withdraw(1003, 50.0, "shopping");

    let _ = ledger.transfer(1001, 1003, 150.0);
    Ok(())
}
