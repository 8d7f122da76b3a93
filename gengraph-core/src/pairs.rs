//! Lazy enumeration of candidate vertex pairs.

use std::iter::FusedIterator;

use crate::params::VertexCount;

/// Iterator over every unordered pair `(i, j)` with `i < j < N`, in
/// lexicographic order.
///
/// Holds only the next pair, so enumeration needs constant memory.
///
/// # Examples
/// ```
/// use gengraph_core::{CandidatePairs, VertexCount};
///
/// let pairs: Vec<_> = CandidatePairs::new(VertexCount::new(3)).collect();
/// assert_eq!(pairs, [(0, 1), (0, 2), (1, 2)]);
/// ```
#[derive(Clone, Debug)]
pub struct CandidatePairs {
    vertices: usize,
    next: Option<(usize, usize)>,
    remaining: u128,
}

impl CandidatePairs {
    /// Starts enumeration at `(0, 1)`, or yields nothing when `N < 2`.
    #[must_use]
    pub const fn new(vertices: VertexCount) -> Self {
        let count = vertices.get();
        let next = if count >= 2 { Some((0, 1)) } else { None };
        Self {
            vertices: count,
            next,
            remaining: vertices.pair_count(),
        }
    }

    fn successor(&self, (row, column): (usize, usize)) -> Option<(usize, usize)> {
        let next_column = column.checked_add(1)?;
        if next_column < self.vertices {
            return Some((row, next_column));
        }
        let next_row = row.checked_add(1)?;
        let first_column = next_row.checked_add(1)?;
        (first_column < self.vertices).then_some((next_row, first_column))
    }
}

impl Iterator for CandidatePairs {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.successor(current);
        self.remaining = self.remaining.saturating_sub(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for CandidatePairs {}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::empty(0)]
    #[case::single(1)]
    fn fewer_than_two_vertices_have_no_pairs(#[case] count: usize) {
        let mut pairs = CandidatePairs::new(VertexCount::new(count));
        assert_eq!(pairs.size_hint(), (0, Some(0)));
        assert_eq!(pairs.next(), None);
    }

    #[test]
    fn pairs_follow_lexicographic_order() {
        let pairs: Vec<_> = CandidatePairs::new(VertexCount::new(4)).collect();
        assert_eq!(
            pairs,
            [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
    }

    #[rstest]
    #[case(2)]
    #[case(5)]
    #[case(17)]
    #[case(64)]
    fn pair_total_matches_closed_form(#[case] count: usize) {
        let vertices = VertexCount::new(count);
        let pairs = CandidatePairs::new(vertices);
        let Ok(expected) = usize::try_from(vertices.pair_count()) else {
            panic!("pair count for {count} vertices must fit in usize");
        };
        assert_eq!(pairs.size_hint(), (expected, Some(expected)));
        assert_eq!(pairs.count(), expected);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let mut pairs = CandidatePairs::new(VertexCount::new(2));
        assert_eq!(pairs.next(), Some((0, 1)));
        assert_eq!(pairs.next(), None);
        assert_eq!(pairs.next(), None);
        assert_eq!(pairs.size_hint(), (0, Some(0)));
    }
}
