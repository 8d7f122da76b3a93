//! Streaming random graph emission.
//!
//! Provides [`GraphEmitter`], which walks candidate vertex pairs, flips a
//! coin per pair, and writes each surviving edge as soon as it is drawn.

use std::io::Write;

use rand::Rng;
use tracing::{Span, debug, field, instrument};

use crate::{
    Result,
    error::GraphGenError,
    pairs::CandidatePairs,
    params::{EDGE_PROBABILITY, VertexCount, Weight},
    record::{Edge, GraphRecord},
};

/// Outcome of writing one graph listing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmitSummary {
    /// Vertex count written in the `size` header.
    pub vertices: VertexCount,
    /// Number of candidate pairs that were considered.
    pub pairs: u128,
    /// Number of `edge` lines written.
    pub edges: u64,
}

/// Random graph emitter over an injected random source.
///
/// # Examples
/// ```
/// use gengraph_core::{GraphEmitter, VertexCount};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut emitter = GraphEmitter::new(VertexCount::new(4), SmallRng::seed_from_u64(7));
/// let mut listing = Vec::new();
/// let summary = emitter.emit(&mut listing).expect("writing to a Vec succeeds");
///
/// let text = String::from_utf8(listing).expect("listing is UTF-8");
/// let mut lines = text.lines();
/// assert_eq!(lines.next(), Some("size 4"));
/// assert_eq!(lines.next(), Some("directed false"));
/// assert_eq!(lines.count() as u64, summary.edges);
/// assert!(u128::from(summary.edges) <= summary.pairs);
/// ```
#[derive(Debug, Clone)]
pub struct GraphEmitter<R> {
    vertices: VertexCount,
    rng: R,
}

impl<R: Rng> GraphEmitter<R> {
    /// Creates an emitter for `vertices` drawing randomness from `rng`.
    #[must_use]
    pub const fn new(vertices: VertexCount, rng: R) -> Self {
        Self { vertices, rng }
    }

    /// Returns the vertex count this emitter generates graphs for.
    #[must_use]
    pub const fn vertices(&self) -> VertexCount {
        self.vertices
    }

    /// Returns the `size` and `directed` records that open the listing.
    #[must_use]
    pub const fn header(&self) -> [GraphRecord; 2] {
        GraphRecord::header(self.vertices)
    }

    /// Returns a lazy iterator that draws the graph's edges.
    ///
    /// Each call starts a fresh enumeration from `(0, 1)` and continues to
    /// consume the emitter's random source.
    pub fn edges(&mut self) -> Edges<'_, R> {
        Edges {
            pairs: CandidatePairs::new(self.vertices),
            rng: &mut self.rng,
        }
    }

    /// Returns the header followed by freshly drawn edge records.
    pub fn records(&mut self) -> impl Iterator<Item = GraphRecord> + '_ {
        let header = self.header();
        header
            .into_iter()
            .chain(self.edges().map(GraphRecord::Edge))
    }

    /// Writes a complete listing to `writer`, one record per line.
    ///
    /// Edges are written as they are drawn; nothing is retained afterwards.
    /// The writer is not flushed.
    ///
    /// # Errors
    /// Returns [`GraphGenError::Write`] when the writer rejects a line.
    #[instrument(
        name = "core.emit",
        skip(self, writer),
        fields(
            vertices = %self.vertices,
            pairs = %self.vertices.pair_count(),
            edges = field::Empty,
        ),
    )]
    pub fn emit<W: Write>(&mut self, mut writer: W) -> Result<EmitSummary> {
        let vertices = self.vertices;
        let mut edges = 0_u64;
        for record in self.records() {
            writeln!(writer, "{record}").map_err(|source| GraphGenError::Write { source })?;
            if matches!(record, GraphRecord::Edge(_)) {
                edges += 1;
            }
        }

        Span::current().record("edges", edges);
        debug!(edges, "graph listing written");
        Ok(EmitSummary {
            vertices,
            pairs: vertices.pair_count(),
            edges,
        })
    }
}

/// Lazy iterator over the edges of one random graph.
///
/// Returned by [`GraphEmitter::edges`].
#[derive(Debug)]
pub struct Edges<'a, R: ?Sized> {
    pairs: CandidatePairs,
    rng: &'a mut R,
}

impl<R: Rng + ?Sized> Iterator for Edges<'_, R> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (source, target) = self.pairs.next()?;
            if self.rng.gen_bool(EDGE_PROBABILITY) {
                let weight = Weight::sample(&mut *self.rng);
                return Some(Edge::ordered(source, target, weight));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.pairs.size_hint().1)
    }
}
