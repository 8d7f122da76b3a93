//! gengraph core library.
//!
//! Generates random undirected, weighted graphs and streams them as a
//! line-oriented listing:
//!
//! ```text
//! size <N>
//! directed false
//! edge <i> <j> <w>
//! ```
//!
//! Every unordered vertex pair `(i, j)` with `i < j` is visited once in
//! lexicographic order. Each pair becomes an edge with probability
//! [`EDGE_PROBABILITY`] and carries a weight drawn uniformly from
//! [`Weight::MIN`]`..=`[`Weight::MAX`]. Randomness is injected through
//! [`rand::Rng`], so callers can substitute a seeded or stubbed source.

mod builder;
mod emitter;
mod error;
mod pairs;
mod params;
mod record;

pub use crate::{
    builder::GraphEmitterBuilder,
    emitter::{EmitSummary, Edges, GraphEmitter},
    error::{GraphGenError, GraphGenErrorCode, Result},
    pairs::CandidatePairs,
    params::{EDGE_PROBABILITY, VertexCount, Weight},
    record::{Edge, GraphRecord},
};
