// Pairing that runs to the longer side. While both sequences are live
// we yield Both; after one ends, the survivor's tail comes out as
// Left/Right. Same three-way shape as an outer join, applied to
// positions instead of keys.

use std::iter::{Fuse, FusedIterator};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Uneven<A, B> {
    Both(A, B),
    Left(A),
    Right(B),
}
pub use Uneven::*;

impl<A, B> Uneven<A, B> {
    pub fn left(self) -> Option<A> {
        match self {
            Both(a, _) | Left(a) => Some(a),
            Right(_) => None,
        }
    }

    pub fn right(self) -> Option<B> {
        match self {
            Both(_, b) | Right(b) => Some(b),
            Left(_) => None,
        }
    }

    // Fill in the missing side with a default.
    pub fn or(self, a: A, b: B) -> (A, B) {
        match self {
            Both(x, y) => (x, y),
            Left(x) => (x, b),
            Right(y) => (a, y),
        }
    }
}

/// Iterator pairing two sequences out to the longer one. Yields
/// `max(len1, len2)` items, the first `min(len1, len2)` of them `Both`.
#[derive(Clone, Debug)]
pub struct LongPairs<I, J> {
    // Fused so the exhausted side can keep being pulled while the
    // other side drains.
    iter1: Fuse<I>,
    iter2: Fuse<J>,
}

pub fn zip_longest<S1, S2>(seq1: S1, seq2: S2) -> LongPairs<S1::IntoIter, S2::IntoIter>
where
    S1: IntoIterator,
    S2: IntoIterator,
{
    LongPairs {
        iter1: seq1.into_iter().fuse(),
        iter2: seq2.into_iter().fuse(),
    }
}

impl<I: Iterator, J: Iterator> Iterator for LongPairs<I, J> {
    type Item = Uneven<I::Item, J::Item>;

    fn next(&mut self) -> Option<Uneven<I::Item, J::Item>> {
        match (self.iter1.next(), self.iter2.next()) {
            (Some(x), Some(y)) => Some(Both(x, y)),
            (Some(x), None) => Some(Left(x)),
            (None, Some(y)) => Some(Right(y)),
            (None, None) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo1, hi1) = self.iter1.size_hint();
        let (lo2, hi2) = self.iter2.size_hint();
        let hi = match (hi1, hi2) {
            (Some(a), Some(b)) => Some(a.max(b)),
            _ => None,
        };
        (lo1.max(lo2), hi)
    }
}

impl<I: Iterator, J: Iterator> FusedIterator for LongPairs<I, J> {}
