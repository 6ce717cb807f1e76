use std::fs::File;

use anyhow::{Context, Result};
use pocket_ledger::bin_utils::{Input, ScriptError, Service};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let input = match std::env::args().nth(1) {
        Some(filename) => Input::Script(
            File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?,
        ),
        None => Input::Demo,
    };

    let service = Service {
        input,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| {
            match err {
                ScriptError::Parse(err) => eprintln!("Error at line {line}: {err}"),
                // rejected operations are part of normal ledger behavior
                ScriptError::Process(err) => warn!(line, %err, "operation skipped"),
            }
        }),
    };
    service.run()
}
