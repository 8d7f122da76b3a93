//! Parsing and checking of graph listings for assertions in tests.
//!
//! The parser accepts the same grammar downstream graph tools read: a
//! `size <N>` line, a `directed <bool>` line, then any number of
//! `edge <i> <j> <w>` lines.

use thiserror::Error;

const MIN_WEIGHT: u64 = 1;
const MAX_WEIGHT: u64 = 10;

/// Edge line as parsed from a listing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ListedEdge {
    /// First vertex index on the line.
    pub source: usize,
    /// Second vertex index on the line.
    pub target: usize,
    /// Weight field.
    pub weight: u64,
}

/// Parsed graph listing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Listing {
    /// Value of the `size` header.
    pub vertices: usize,
    /// Value of the `directed` header.
    pub directed: bool,
    /// Edge lines in output order.
    pub edges: Vec<ListedEdge>,
}

/// Problems found while parsing or checking a listing.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ListingError {
    /// A required header line was absent.
    #[error("line {line}: expected `{expected}` header")]
    MissingHeader {
        /// 1-based line number where the header was expected.
        line: usize,
        /// Keyword of the missing header.
        expected: &'static str,
    },
    /// A line did not match the grammar.
    #[error("line {line}: malformed record `{content}`")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// Offending line.
        content: String,
    },
    /// The graph was declared directed.
    #[error("listing declares a directed graph")]
    Directed,
    /// An edge referenced a vertex outside `0..N` or was not ordered.
    #[error("line {line}: edge ({source_vertex}, {target_vertex}) is invalid for {vertices} vertices")]
    InvalidEndpoints {
        /// 1-based line number.
        line: usize,
        /// First vertex index.
        source_vertex: usize,
        /// Second vertex index.
        target_vertex: usize,
        /// Declared vertex count.
        vertices: usize,
    },
    /// An edge weight fell outside `1..=10`.
    #[error("line {line}: weight {weight} is outside 1..=10")]
    WeightOutOfRange {
        /// 1-based line number.
        line: usize,
        /// Offending weight.
        weight: u64,
    },
    /// An edge did not follow its predecessor in lexicographic order.
    #[error("line {line}: edge is duplicated or out of order")]
    OutOfOrder {
        /// 1-based line number.
        line: usize,
    },
}

/// Number of header lines preceding the edges.
const HEADER_LINES: usize = 2;

/// Parses `text` into a [`Listing`].
///
/// # Errors
/// Returns [`ListingError`] when a header is missing or any line is
/// malformed.
///
/// # Examples
/// ```
/// use gengraph_test_support::listing::parse_listing;
///
/// let listing = parse_listing("size 3\ndirected false\nedge 0 2 7\n")
///     .expect("listing is well formed");
/// assert_eq!(listing.vertices, 3);
/// assert_eq!(listing.edges.len(), 1);
/// ```
pub fn parse_listing(text: &str) -> Result<Listing, ListingError> {
    let mut lines = text.lines();
    let vertices = parse_header(lines.next(), 1, "size", |value| value.parse::<usize>().ok())?;
    let directed = parse_header(lines.next(), 2, "directed", |value| match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    })?;

    let edges = lines
        .enumerate()
        .map(|(offset, content)| parse_edge(offset + HEADER_LINES + 1, content))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Listing {
        vertices,
        directed,
        edges,
    })
}

fn parse_header<T>(
    line: Option<&str>,
    number: usize,
    keyword: &'static str,
    parse_value: impl Fn(&str) -> Option<T>,
) -> Result<T, ListingError> {
    let content = line.ok_or(ListingError::MissingHeader {
        line: number,
        expected: keyword,
    })?;
    let mut fields = content.split(' ');
    if fields.next() != Some(keyword) {
        return Err(ListingError::MissingHeader {
            line: number,
            expected: keyword,
        });
    }
    match (fields.next().and_then(parse_value), fields.next()) {
        (Some(value), None) => Ok(value),
        _ => Err(malformed(number, content)),
    }
}

fn parse_edge(number: usize, content: &str) -> Result<ListedEdge, ListingError> {
    let fields: Vec<&str> = content.split(' ').collect();
    let ["edge", source, target, weight] = fields.as_slice() else {
        return Err(malformed(number, content));
    };
    match (source.parse(), target.parse(), weight.parse()) {
        (Ok(source), Ok(target), Ok(weight)) => Ok(ListedEdge {
            source,
            target,
            weight,
        }),
        _ => Err(malformed(number, content)),
    }
}

fn malformed(line: usize, content: &str) -> ListingError {
    ListingError::Malformed {
        line,
        content: content.to_owned(),
    }
}

impl Listing {
    /// Number of unordered vertex pairs, `N·(N-1)/2`.
    #[must_use]
    pub fn pair_count(&self) -> u128 {
        let vertices = self.vertices as u128;
        vertices * vertices.saturating_sub(1) / 2
    }

    /// Checks the invariants every generated listing satisfies: undirected,
    /// `i < j < N`, weights within range, strictly increasing `(i, j)` order
    /// (hence no duplicates), and no more edges than pairs.
    ///
    /// # Errors
    /// Returns the first violation found.
    ///
    /// # Examples
    /// ```
    /// use gengraph_test_support::listing::{ListingError, parse_listing};
    ///
    /// let listing = parse_listing("size 2\ndirected false\nedge 1 0 3\n")
    ///     .expect("listing is well formed");
    /// assert!(matches!(
    ///     listing.check_generated(),
    ///     Err(ListingError::InvalidEndpoints { .. })
    /// ));
    /// ```
    pub fn check_generated(&self) -> Result<(), ListingError> {
        if self.directed {
            return Err(ListingError::Directed);
        }

        let mut previous: Option<(usize, usize)> = None;
        for (offset, edge) in self.edges.iter().enumerate() {
            let line = offset + HEADER_LINES + 1;
            if edge.source >= edge.target || edge.target >= self.vertices {
                return Err(ListingError::InvalidEndpoints {
                    line,
                    source_vertex: edge.source,
                    target_vertex: edge.target,
                    vertices: self.vertices,
                });
            }
            if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&edge.weight) {
                return Err(ListingError::WeightOutOfRange {
                    line,
                    weight: edge.weight,
                });
            }
            let pair = (edge.source, edge.target);
            if previous.is_some_and(|before| before >= pair) {
                return Err(ListingError::OutOfOrder { line });
            }
            previous = Some(pair);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn parses_header_and_edges() {
        let listing = match parse_listing("size 4\ndirected false\nedge 0 1 3\nedge 2 3 10\n") {
            Ok(listing) => listing,
            Err(err) => panic!("listing must parse: {err}"),
        };
        assert_eq!(listing.vertices, 4);
        assert!(!listing.directed);
        assert_eq!(
            listing.edges,
            [
                ListedEdge {
                    source: 0,
                    target: 1,
                    weight: 3
                },
                ListedEdge {
                    source: 2,
                    target: 3,
                    weight: 10
                },
            ]
        );
        assert_eq!(listing.check_generated(), Ok(()));
    }

    #[rstest]
    #[case::empty("", ListingError::MissingHeader { line: 1, expected: "size" })]
    #[case::no_directed("size 2\n", ListingError::MissingHeader { line: 2, expected: "directed" })]
    #[case::bad_size("size x\ndirected false\n", ListingError::Malformed { line: 1, content: "size x".to_owned() })]
    #[case::short_edge(
        "size 2\ndirected false\nedge 0 1\n",
        ListingError::Malformed { line: 3, content: "edge 0 1".to_owned() }
    )]
    fn rejects_malformed_listings(#[case] text: &str, #[case] expected: ListingError) {
        assert_eq!(parse_listing(text), Err(expected));
    }

    #[rstest]
    #[case::directed("size 2\ndirected true\n", ListingError::Directed)]
    #[case::zero_weight(
        "size 2\ndirected false\nedge 0 1 0\n",
        ListingError::WeightOutOfRange { line: 3, weight: 0 }
    )]
    #[case::out_of_bounds(
        "size 2\ndirected false\nedge 0 2 1\n",
        ListingError::InvalidEndpoints { line: 3, source_vertex: 0, target_vertex: 2, vertices: 2 }
    )]
    #[case::duplicate(
        "size 3\ndirected false\nedge 0 1 1\nedge 0 1 2\n",
        ListingError::OutOfOrder { line: 4 }
    )]
    fn check_generated_reports_violations(#[case] text: &str, #[case] expected: ListingError) {
        let listing = match parse_listing(text) {
            Ok(listing) => listing,
            Err(err) => panic!("listing must parse: {err}"),
        };
        assert_eq!(listing.check_generated(), Err(expected));
    }
}
