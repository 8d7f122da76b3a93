//! Line records that make up a graph listing.

use std::fmt;

use crate::params::{VertexCount, Weight};

/// Undirected weighted edge between two distinct vertices.
///
/// The lower vertex index is always the source.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: Weight,
}

impl Edge {
    /// Creates an edge, returning `None` unless `source < target`.
    ///
    /// # Examples
    /// ```
    /// use gengraph_core::{Edge, Weight};
    ///
    /// let weight = Weight::new(4).expect("4 is in range");
    /// let edge = Edge::new(0, 2, weight).expect("0 < 2");
    /// assert_eq!((edge.source(), edge.target(), edge.weight().get()), (0, 2, 4));
    /// assert!(Edge::new(2, 2, weight).is_none());
    /// ```
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: Weight) -> Option<Self> {
        if source < target {
            Some(Self {
                source,
                target,
                weight,
            })
        } else {
            None
        }
    }

    /// Builds an edge from a pair the caller already knows is ordered.
    pub(crate) const fn ordered(source: usize, target: usize, weight: Weight) -> Self {
        debug_assert!(source < target);
        Self {
            source,
            target,
            weight,
        }
    }

    /// Lower endpoint.
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Upper endpoint.
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Weight carried by the edge.
    #[must_use]
    pub const fn weight(&self) -> Weight {
        self.weight
    }
}

/// One line of a graph listing, rendered without its trailing newline.
///
/// # Examples
/// ```
/// use gengraph_core::{Edge, GraphRecord, VertexCount, Weight};
///
/// assert_eq!(GraphRecord::Size(VertexCount::new(3)).to_string(), "size 3");
/// assert_eq!(GraphRecord::Directed(false).to_string(), "directed false");
///
/// let edge = Edge::new(1, 2, Weight::new(9).expect("in range")).expect("ordered");
/// assert_eq!(GraphRecord::Edge(edge).to_string(), "edge 1 2 9");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphRecord {
    /// Number of vertices in the graph.
    Size(VertexCount),
    /// Whether edges are directed.
    Directed(bool),
    /// A single weighted edge.
    Edge(Edge),
}

impl GraphRecord {
    /// Header records that open every listing.
    #[must_use]
    pub const fn header(vertices: VertexCount) -> [Self; 2] {
        [Self::Size(vertices), Self::Directed(false)]
    }
}

impl fmt::Display for GraphRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Size(vertices) => write!(f, "size {vertices}"),
            Self::Directed(directed) => write!(f, "directed {directed}"),
            Self::Edge(edge) => write!(f, "edge {} {} {}", edge.source, edge.target, edge.weight),
        }
    }
}

impl From<Edge> for GraphRecord {
    fn from(edge: Edge) -> Self {
        Self::Edge(edge)
    }
}
