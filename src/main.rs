//! Entry point of the `netgen` binary.
//!
//! Parses the command line, generates the requested network and writes its adjacency dump to
//! stdout (or the file given by `--output`). Parameter violations exit with status 2 and produce
//! no output; all other failures exit with status 1.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use netgen::{
    cli::{Cli, CliError, run_cli, write_graph},
    logging::{self, LoggingError},
};

const EXIT_INVALID_PARAMETERS: u8 = 2;

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(&cli)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_graph(&cli, &summary.graph, &mut writer).context("failed to write adjacency dump")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let invalid = err
            .downcast_ref::<CliError>()
            .and_then(CliError::param_error)
            .is_some();

        error!(error = %format!("{err:#}"), "command execution failed");
        return if invalid {
            ExitCode::from(EXIT_INVALID_PARAMETERS)
        } else {
            ExitCode::FAILURE
        };
    }

    ExitCode::SUCCESS
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
