// Pairing for sequences that must be the same length. The length check
// happens once, up front, so iteration itself never has to wonder
// which side ended early.

/// Iterator over pairs from two equal-length sequences. Obtained from
/// [`zip_eq`], which is where the length check lives.
#[derive(Clone, Debug)]
pub struct EqPairs<I, J> {
    iter1: I,
    iter2: J,
}

/// Pairs two sequences of known, equal length.
///
/// Panics if the lengths differ.
pub fn zip_eq<S1, S2>(seq1: S1, seq2: S2) -> EqPairs<S1::IntoIter, S2::IntoIter>
where
    S1: IntoIterator,
    S2: IntoIterator,
    S1::IntoIter: ExactSizeIterator,
    S2::IntoIter: ExactSizeIterator,
{
    let iter1 = seq1.into_iter();
    let iter2 = seq2.into_iter();
    if iter1.len() != iter2.len() {
        panic!("zip_eq: sequence lengths differ ({} vs {})", iter1.len(), iter2.len());
    }
    EqPairs { iter1, iter2 }
}

impl<I: ExactSizeIterator, J: ExactSizeIterator> Iterator for EqPairs<I, J> {
    type Item = (I::Item, J::Item);

    fn next(&mut self) -> Option<(I::Item, J::Item)> {
        match (self.iter1.next(), self.iter2.next()) {
            (Some(x), Some(y)) => Some((x, y)),
            (None, None) => None,
            _ => unreachable!("zip_eq inputs were equal-length at construction"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        debug_assert_eq!(self.iter1.size_hint(), self.iter2.size_hint());
        self.iter1.size_hint()
    }
}

impl<I: ExactSizeIterator, J: ExactSizeIterator> ExactSizeIterator for EqPairs<I, J> {}
