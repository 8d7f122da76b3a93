//! CLI entry point for the gengraph random graph generator.
//!
//! Interprets the command line, streams the generated listing to stdout, and
//! maps failures to exit codes. A wrong argument count prints the usage line on
//! stdout; all other diagnostics go through `tracing` on stderr.

use std::env;
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};

use gengraph_cli::{
    cli::{Cli, CliError, Invocation, interpret_args, program_name, render_usage, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Generate the listing into a buffered stdout and flush it.
fn try_main(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    run_cli(cli, &mut writer).context("failed to generate graph")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let args: Vec<OsString> = env::args_os().collect();
    let program = program_name(args.first().map(OsString::as_os_str));
    let cli = match interpret_args(args) {
        Invocation::Run(cli) => cli,
        Invocation::Usage => return print_usage(&program),
    };

    if let Err(err) = try_main(cli) {
        let code = err.downcast_ref::<CliError>().map(CliError::code);
        let code_field = code.map(|code| field::display(code.as_str()));
        let message = format!("{err:#}");
        error!(
            error = message.as_str(),
            code = code_field,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn print_usage(program: &str) -> ExitCode {
    let mut stdout = io::stdout().lock();
    if let Err(write_err) = render_usage(program, &mut stdout).and_then(|()| stdout.flush()) {
        error!(error = %write_err, "failed to print usage");
    }
    ExitCode::FAILURE
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
