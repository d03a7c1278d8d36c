// Lazy pairwise iteration: walk two sequences in lockstep, yielding
// pairs until the shorter side runs out.

use std::iter::FusedIterator;

// ---------- THE ADAPTER ----------

/// Iterator over pairs pulled from two underlying iterators. Ends as
/// soon as either side ends.
///
/// Cloning gives an independent iteration only when both underlying
/// iterators clone their traversal state (true for std container
/// iterators). Advancing the wrapped iterators from outside after
/// handing them over produces unspecified pairings.
#[derive(Clone, Debug)]
pub struct Pairs<I, J> {
    iter1: I,
    iter2: J,
    done: bool,
}

pub fn pairs<I: Iterator, J: Iterator>(iter1: I, iter2: J) -> Pairs<I, J> {
    Pairs { iter1, iter2, done: false }
}

impl<I: Iterator, J: Iterator> Iterator for Pairs<I, J> {
    type Item = (I::Item, J::Item);

    fn next(&mut self) -> Option<(I::Item, J::Item)> {
        // The `done` flag matters when the left side is longer: without
        // it, every next() after the right side ran dry would pull and
        // throw away one more element from the left.
        if self.done { return None }
        let Some(x) = self.iter1.next() else {
            self.done = true;
            return None;
        };
        match self.iter2.next() {
            Some(y) => Some((x, y)),
            None => {
                // x is dropped. We only learn the right side is out
                // after pulling from the left; checking the right side
                // first would lose an element there instead.
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done { return (0, Some(0)) }
        let (lo1, hi1) = self.iter1.size_hint();
        let (lo2, hi2) = self.iter2.size_hint();
        let hi = match (hi1, hi2) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (hi, None) | (None, hi) => hi,
        };
        (lo1.min(lo2), hi)
    }
}

// The flag makes exhaustion idempotent even over non-fused inputs.
impl<I: Iterator, J: Iterator> FusedIterator for Pairs<I, J> {}


// ---------- THE LAZY SEQUENCE ----------

/// A lazily paired view of two sequences. Construction does no work;
/// every iteration handle starts fresh from both sources' beginnings.
#[derive(Clone, Debug)]
pub struct Zipped<S1, S2> {
    seq1: S1,
    seq2: S2,
}

/// O(1): just captures the two sequences.
pub fn zip<S1, S2>(seq1: S1, seq2: S2) -> Zipped<S1, S2> {
    Zipped { seq1, seq2 }
}

impl<S1, S2> Zipped<S1, S2> {
    /// A fresh pairing pass over both sequences, independent of any
    /// other handle obtained from this value.
    ///
    /// Needs `&S: IntoIterator`, i.e. a `Zipped` over owned
    /// containers. A `Zipped` built over already-borrowed sources
    /// (`zip(&v1, &v2)`) can only be iterated by consuming it with
    /// `into_iter()`.
    pub fn pairs<'a>(
        &'a self,
    ) -> Pairs<<&'a S1 as IntoIterator>::IntoIter, <&'a S2 as IntoIterator>::IntoIter>
    where
        &'a S1: IntoIterator,
        &'a S2: IntoIterator,
    {
        pairs((&self.seq1).into_iter(), (&self.seq2).into_iter())
    }
}

impl<S1: IntoIterator, S2: IntoIterator> IntoIterator for Zipped<S1, S2> {
    type Item = (S1::Item, S2::Item);
    type IntoIter = Pairs<S1::IntoIter, S2::IntoIter>;
    fn into_iter(self) -> Self::IntoIter {
        pairs(self.seq1.into_iter(), self.seq2.into_iter())
    }
}

impl<'a, S1, S2> IntoIterator for &'a Zipped<S1, S2>
where
    &'a S1: IntoIterator,
    &'a S2: IntoIterator,
{
    type Item = (<&'a S1 as IntoIterator>::Item, <&'a S2 as IntoIterator>::Item);
    type IntoIter =
        Pairs<<&'a S1 as IntoIterator>::IntoIter, <&'a S2 as IntoIterator>::IntoIter>;
    fn into_iter(self) -> Self::IntoIter {
        self.pairs()
    }
}


// ---------- TESTS ----------
#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    // Counts how often next() gets called, successful or not.
    struct Counted<I> {
        iter: I,
        pulls: Rc<Cell<usize>>,
    }

    fn counted<I: Iterator>(iter: I) -> (Counted<I>, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        (Counted { iter, pulls: pulls.clone() }, pulls)
    }

    impl<I: Iterator> Iterator for Counted<I> {
        type Item = I::Item;
        fn next(&mut self) -> Option<I::Item> {
            self.pulls.set(self.pulls.get() + 1);
            self.iter.next()
        }
    }

    // Alternates a spurious None with each real item: not fused,
    // resumes after claiming exhaustion.
    struct Blinky {
        items: Vec<u32>,
        index: usize,
        blink: bool,
    }

    impl Iterator for Blinky {
        type Item = u32;
        fn next(&mut self) -> Option<u32> {
            self.blink = !self.blink;
            if self.blink {
                None
            } else {
                self.index += 1;
                self.items.get(self.index - 1).copied()
            }
        }
    }

    #[test]
    fn equal_lengths() {
        let got: Vec<_> = zip(vec![1, 2, 3], vec!["a", "b", "c"]).into_iter().collect();
        assert_eq!(got, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn left_longer() {
        let got: Vec<_> = zip(vec![1, 2, 3, 4], vec!["a", "b"]).into_iter().collect();
        assert_eq!(got, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn right_longer() {
        let got: Vec<_> = zip(vec![1, 2], vec!["a", "b", "c", "d"]).into_iter().collect();
        assert_eq!(got, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn either_empty() {
        let empty: Vec<u32> = vec![];
        let mut it = pairs(empty.iter(), ["a", "b"].iter());
        assert_eq!(it.next(), None);

        let mut it = pairs([1, 2].iter(), empty.iter());
        assert_eq!(it.next(), None);
    }

    #[test]
    fn exhaustion_is_idempotent() {
        let mut it = pairs([1, 2].into_iter(), ["a"].into_iter());
        assert_eq!(it.next(), Some((1, "a")));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn lookahead_discard_pull_counts() {
        // Left longer: the step that discovers the right side is out
        // has already pulled (and discards) one left element.
        let (left, left_pulls) = counted([1, 2, 3, 4].into_iter());
        let (right, right_pulls) = counted(["a", "b"].into_iter());
        let mut it = pairs(left, right);
        assert_eq!(it.by_ref().count(), 2);
        assert_eq!(left_pulls.get(), 3);
        assert_eq!(right_pulls.get(), 3);

        // And once ended, nothing gets pulled again.
        assert_eq!(it.next(), None);
        assert_eq!(left_pulls.get(), 3);
        assert_eq!(right_pulls.get(), 3);
    }

    #[test]
    fn empty_left_never_touches_right() {
        let (left, _) = counted(std::iter::empty::<u32>());
        let (right, right_pulls) = counted(["a", "b"].into_iter());
        let mut it = pairs(left, right);
        assert_eq!(it.next(), None);
        assert_eq!(right_pulls.get(), 0);
    }

    #[test]
    fn stays_ended_over_resumable_input() {
        // Blinky would yield 7 if pulled again after its first None;
        // the done flag must keep us from ever seeing it.
        let blinky = Blinky { items: vec![7], index: 0, blink: false };
        let mut it = pairs([1, 2, 3].into_iter(), blinky);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn infinite_right_side() {
        let got: Vec<_> = pairs(["x", "y", "z"].into_iter(), 0..).collect();
        assert_eq!(got, vec![("x", 0), ("y", 1), ("z", 2)]);
    }

    #[test]
    fn independent_handles() {
        let z = zip(vec![1, 2, 3], vec!["a", "b", "c"]);
        let mut h1 = z.pairs();
        let mut h2 = z.pairs();
        assert_eq!(h1.by_ref().count(), 3);
        // h2 is unaffected and replays the whole pairing.
        assert_eq!(h2.next(), Some((&1, &"a")));
        let rest: Vec<_> = h2.collect();
        assert_eq!(rest, vec![(&2, &"b"), (&3, &"c")]);
    }

    #[test]
    fn fresh_handles_from_owned_sequences() {
        // .pairs() is the owned-container path; borrowed sources go
        // through consuming into_iter() instead.
        for n in 0..=5usize {
            for m in 0..=5usize {
                let xs: Vec<usize> = (0..n).collect();
                let ys: Vec<usize> = (10..10 + m).collect();
                let z = zip(xs.clone(), ys.clone());
                let got: Vec<_> = z.pairs().map(|(x, y)| (*x, *y)).collect();
                assert_eq!(got.len(), n.min(m));
                for (i, (x, y)) in got.iter().enumerate() {
                    assert_eq!((*x, *y), (xs[i], ys[i]));
                }

                let borrowed: Vec<_> = zip(&xs, &ys).into_iter().collect();
                assert_eq!(borrowed.len(), n.min(m));
            }
        }
    }

    #[test]
    fn size_hints() {
        let mut it = pairs([1, 2, 3].into_iter(), ["a", "b"].into_iter());
        assert_eq!(it.size_hint(), (2, Some(2)));
        it.next();
        assert_eq!(it.size_hint(), (1, Some(1)));
        it.next();
        it.next();
        assert_eq!(it.size_hint(), (0, Some(0)));

        let it = pairs([1, 2].into_iter(), 0..);
        assert_eq!(it.size_hint(), (2, Some(2)));
    }

    #[test]
    fn random_lengths() {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let n: usize = rng.gen_range(0..32);
            let m: usize = rng.gen_range(0..32);
            let xs: Vec<usize> = (0..n).collect();
            let ys: Vec<usize> = (100..100 + m).collect();
            let got: Vec<_> = zip(&xs, &ys).into_iter().collect();
            assert_eq!(got.len(), n.min(m));
            for (i, (x, y)) in got.into_iter().enumerate() {
                assert_eq!((*x, *y), (xs[i], ys[i]));
            }
        }
    }
}
