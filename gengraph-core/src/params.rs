//! Scalar parameters of a generated graph.

use std::{fmt, str::FromStr};

use rand::Rng;

use crate::error::GraphGenError;

/// Probability that any candidate pair becomes an edge.
pub const EDGE_PROBABILITY: f64 = 0.5;

/// Number of vertices in a generated graph.
///
/// Vertices are identified by their index in `0..N`.
///
/// # Examples
/// ```
/// use gengraph_core::VertexCount;
///
/// let vertices: VertexCount = " 4 ".parse().expect("4 is a valid vertex count");
/// assert_eq!(vertices.get(), 4);
/// assert_eq!(vertices.pair_count(), 6);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexCount(usize);

impl VertexCount {
    /// Wraps a raw vertex count.
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    /// Returns the raw vertex count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns the number of unordered pairs of distinct vertices, `N·(N-1)/2`.
    ///
    /// # Examples
    /// ```
    /// use gengraph_core::VertexCount;
    ///
    /// assert_eq!(VertexCount::new(0).pair_count(), 0);
    /// assert_eq!(VertexCount::new(1).pair_count(), 0);
    /// assert_eq!(VertexCount::new(5).pair_count(), 10);
    /// ```
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "one of two consecutive integers is even, so the product divides exactly"
    )]
    pub const fn pair_count(self) -> u128 {
        let count = self.0 as u128;
        count * count.saturating_sub(1) / 2
    }
}

impl fmt::Display for VertexCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for VertexCount {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

impl FromStr for VertexCount {
    type Err = GraphGenError;

    /// Parses a decimal vertex count, ignoring surrounding whitespace.
    ///
    /// Negative, fractional, and empty inputs are rejected.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<usize>()
            .map(Self)
            .map_err(|source| GraphGenError::InvalidVertexCount {
                raw: raw.to_owned(),
                source,
            })
    }
}

/// Integer weight attached to an emitted edge, always within
/// [`Weight::MIN`]`..=`[`Weight::MAX`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Weight(u8);

impl Weight {
    /// Smallest weight the generator emits.
    pub const MIN: u8 = 1;
    /// Largest weight the generator emits.
    pub const MAX: u8 = 10;

    /// Returns a weight when `value` lies within the supported range.
    ///
    /// # Examples
    /// ```
    /// use gengraph_core::Weight;
    ///
    /// assert_eq!(Weight::new(7).map(Weight::get), Some(7));
    /// assert!(Weight::new(0).is_none());
    /// assert!(Weight::new(11).is_none());
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the raw weight.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Draws a weight uniformly from the supported range.
    pub(crate) fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(Self::MIN..=Self::MAX))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::plain("5", 5)]
    #[case::zero("0", 0)]
    #[case::padded(" 12\n", 12)]
    #[case::explicit_sign("+3", 3)]
    fn vertex_count_parses_decimal_text(#[case] raw: &str, #[case] expected: usize) {
        let vertices = match raw.parse::<VertexCount>() {
            Ok(vertices) => vertices,
            Err(err) => panic!("`{raw}` must parse: {err}"),
        };
        assert_eq!(vertices.get(), expected);
    }

    #[rstest]
    #[case::letters("abc")]
    #[case::empty("")]
    #[case::negative("-1")]
    #[case::fractional("3.5")]
    #[case::overflow("184467440737095516160")]
    fn vertex_count_rejects_non_integers(#[case] raw: &str) {
        match raw.parse::<VertexCount>() {
            Ok(vertices) => panic!("`{raw}` must be rejected, got {vertices}"),
            Err(GraphGenError::InvalidVertexCount { raw: reported, .. }) => {
                assert_eq!(reported, raw);
            }
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(3, 3)]
    #[case(10, 45)]
    #[case(100_000, 4_999_950_000)]
    fn pair_count_matches_closed_form(#[case] count: usize, #[case] expected: u128) {
        assert_eq!(VertexCount::new(count).pair_count(), expected);
    }

    #[test]
    fn pair_count_does_not_overflow_for_huge_counts() {
        let vertices = VertexCount::new(usize::MAX);
        assert!(vertices.pair_count() > 0);
    }

    #[test]
    fn weight_accepts_exactly_the_supported_range() {
        let accepted: Vec<u8> = (0..=u8::MAX)
            .filter_map(Weight::new)
            .map(Weight::get)
            .collect();
        assert_eq!(accepted, (Weight::MIN..=Weight::MAX).collect::<Vec<_>>());
    }
}
