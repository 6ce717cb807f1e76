/// Accounts, their balance rules and the bounded transaction history.
pub mod account;

/// Ledger commands parsed from raw operation rows, executed by [`processor`].
pub mod command;

/// Ledger processor interface, plus the "in memory" ledger that owns the
/// accounts and coordinates lookups and transfers.
pub mod processor;

/// Script parsing, reports and the demo scenario used by the binary.
/// Kept in the library so the integration tests can drive it.
pub mod bin_utils;
