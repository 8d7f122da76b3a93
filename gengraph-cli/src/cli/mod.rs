//! Command-line interface for the gengraph random graph generator.
//!
//! Parses the single `vertices` argument (plus an optional `--seed`), renders
//! the usage line for malformed invocations, and streams the generated listing
//! to a caller-supplied writer.

mod commands;

pub use commands::{
    Cli, CliError, DEFAULT_PROGRAM_NAME, Invocation, interpret_args, program_name,
    render_usage, run_cli,
};
