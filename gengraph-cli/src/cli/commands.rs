//! Argument parsing and command execution for the gengraph CLI.

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use gengraph_core::{
    EmitSummary, GraphEmitterBuilder, GraphGenError, GraphGenErrorCode, VertexCount,
};
use thiserror::Error;
use tracing::{Span, debug, field, info, instrument};

/// Program name used in the usage line when `argv[0]` is unusable.
pub const DEFAULT_PROGRAM_NAME: &str = "gengraph";

/// Command-line options parsed by [`clap`].
#[derive(Debug, Parser, Clone, PartialEq, Eq)]
#[command(
    name = "gengraph",
    about = "Print a random undirected weighted graph with the given number of vertices.",
    disable_help_flag = true
)]
pub struct Cli {
    /// Number of vertices in the generated graph.
    ///
    /// Kept as raw text so that non-integer input surfaces as a vertex count
    /// error rather than an argument error.
    #[arg(value_name = "vertices", allow_negative_numbers = true)]
    pub vertices: String,

    /// Seed for the random source; omit for a different graph on every run.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Graph generation failed.
    #[error(transparent)]
    Core(#[from] GraphGenError),
}

impl CliError {
    /// Stable code of the underlying generator error.
    #[must_use]
    pub const fn code(&self) -> GraphGenErrorCode {
        match self {
            Self::Core(core) => core.code(),
        }
    }
}

/// What `main` should do with a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Generate a graph for the parsed options.
    Run(Cli),
    /// Print the usage line and fail without generating anything.
    Usage,
}

/// Interprets a full command line, program name included.
///
/// A lone argument is always the vertex count, even when it looks like a
/// flag, so that it reaches the integer parser and fails without output.
/// Any other argument count is a usage error unless clap reads it as a vertex
/// count together with `--seed`.
///
/// # Examples
/// ```
/// use gengraph_cli::cli::{Cli, Invocation, interpret_args};
///
/// assert_eq!(
///     interpret_args(["gengraph", "-x"]),
///     Invocation::Run(Cli { vertices: "-x".into(), seed: None }),
/// );
/// assert_eq!(interpret_args(["gengraph", "3", "4"]), Invocation::Usage);
/// ```
#[must_use]
pub fn interpret_args<I, T>(raw_args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = raw_args.into_iter().map(Into::into).collect();
    if let Some([vertices]) = args.get(1..) {
        return Invocation::Run(Cli {
            vertices: vertices.to_string_lossy().into_owned(),
            seed: None,
        });
    }

    match Cli::try_parse_from(&args) {
        Ok(cli) if cli.seed.is_some() => Invocation::Run(cli),
        Ok(_) => {
            debug!(
                arguments = args.len().saturating_sub(1),
                "vertex count must be the only argument"
            );
            Invocation::Usage
        }
        Err(err) => {
            debug!(kind = ?err.kind(), "rejected command line");
            Invocation::Usage
        }
    }
}

/// Derives the program name shown in the usage line from `argv[0]`.
///
/// # Examples
/// ```
/// use std::ffi::{OsStr, OsString};
/// use gengraph_cli::cli::program_name;
///
/// assert_eq!(program_name(Some(OsStr::new("/usr/local/bin/gengraph"))), "gengraph");
/// assert_eq!(program_name(None), "gengraph");
/// ```
#[must_use]
pub fn program_name(arg0: Option<&OsStr>) -> String {
    arg0.and_then(|raw| Path::new(raw).file_name())
        .and_then(OsStr::to_str)
        .filter(|name| !name.is_empty())
        .map_or_else(|| DEFAULT_PROGRAM_NAME.to_owned(), ToOwned::to_owned)
}

/// Writes the one-line usage message.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use gengraph_cli::cli::render_usage;
///
/// let mut buffer = Vec::new();
/// render_usage("gengraph", &mut buffer).expect("writing to a Vec succeeds");
/// assert_eq!(buffer, b"usage: gengraph vertices\n");
/// ```
pub fn render_usage(program: &str, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "usage: {program} vertices")
}

/// Generates the graph described by `cli` and writes its listing to `writer`.
///
/// Nothing is written when the vertex count is rejected.
///
/// # Errors
/// Returns [`CliError::Core`] when the vertex count does not parse or the
/// listing cannot be written.
///
/// # Examples
/// ```
/// use gengraph_cli::cli::{Cli, run_cli};
///
/// let cli = Cli { vertices: "4".into(), seed: Some(1) };
/// let mut buffer = Vec::new();
/// let summary = run_cli(cli, &mut buffer).expect("4 is a valid vertex count");
/// let text = String::from_utf8(buffer).expect("listing is UTF-8");
/// assert!(text.starts_with("size 4\ndirected false\n"));
/// assert_eq!(text.lines().count() as u64, summary.edges + 2);
/// ```
#[instrument(
    name = "cli.run",
    skip(cli, writer),
    fields(vertices = field::Empty, seeded = cli.seed.is_some()),
)]
pub fn run_cli<W: Write>(cli: Cli, writer: W) -> Result<EmitSummary, CliError> {
    let Cli {
        vertices: raw_vertices,
        seed,
    } = cli;
    let vertices: VertexCount = raw_vertices.parse()?;
    Span::current().record("vertices", field::display(vertices));

    let summary = GraphEmitterBuilder::new()
        .with_optional_seed(seed)
        .build(vertices)
        .emit(writer)?;
    info!(
        vertices = %summary.vertices,
        edges = summary.edges,
        "graph generated"
    );
    Ok(summary)
}
