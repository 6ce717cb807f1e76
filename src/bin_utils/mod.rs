//! Bootstraps [`pocket_ledger`](crate) for the binary: reads operation scripts,
//! runs the demo scenario and prints the reports.

use std::io::{Read, Write};

use crate::{
    command::LedgerCommand,
    processor::{LedgerProcessor, ProcessError, in_memory_processor::InMemoryLedger},
};
use anyhow::{Context, Result};
use csv_parser::CsvOperationParser;
use csv_printer::{print_accounts, print_history};
use thiserror::Error;
use tracing::info;
pub mod csv_parser;
pub mod csv_printer;
pub mod scenario;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Malformed row: {0}")]
    Parse(#[from] csv::Error),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

pub enum Input<R> {
    /// The built-in scenario from [`scenario::run_demo`].
    Demo,
    /// A CSV operation script.
    Script(R),
}

pub struct Service<'w, R, W: 'w> {
    pub input: Input<R>,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, ScriptError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let mut ledger = InMemoryLedger::default();

        match self.input {
            Input::Demo => scenario::run_demo(&mut ledger)?,
            Input::Script(source) => {
                for (line, row) in CsvOperationParser::new(source) {
                    let result = row.map_err(ScriptError::from).and_then(|op| {
                        let cmd = LedgerCommand::parse_command(
                            op.kind, op.account, op.to, op.amount, op.label,
                        )
                        .map_err(ProcessError::from)?;
                        Ok(ledger.process_command(cmd)?)
                    });
                    if let Err(err) = result {
                        (self.error_printer)(line, err);
                    }
                }
            }
        }
        info!(accounts = ledger.accounts().len(), "ledger ready, printing reports");

        print_accounts(self.output, ledger.accounts().iter())?;
        writeln!(self.output).context("Failed to write report separator")?;
        print_history(self.output, ledger.accounts().iter())
    }
}
