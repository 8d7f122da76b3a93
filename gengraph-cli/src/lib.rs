//! Support library for the gengraph CLI binary.
//!
//! Exposes argument handling and logging so tests can drive the command
//! without spawning a subprocess.

pub mod cli;
pub mod logging;
