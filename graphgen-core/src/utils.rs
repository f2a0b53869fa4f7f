//! Sequence helpers shared by the generators.

use std::iter::FusedIterator;

/// Iterator over consecutive pairs, created by [`pairwise`].
pub struct Pairwise<I: Iterator> {
    iter: I,
    previous: Option<I::Item>,
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.iter.next()?;
        let previous = self.previous.replace(next.clone())?;
        Some((previous, next))
    }
}

impl<I> FusedIterator for Pairwise<I>
where
    I: FusedIterator,
    I::Item: Clone,
{
}

/// Yields `(x0, x1), (x1, x2), ...` from `items`.
///
/// Fewer than two items produce nothing.
///
/// # Examples
/// ```
/// use graphgen_core::pairwise;
///
/// let pairs: Vec<_> = pairwise([1, 2, 3]).collect();
/// assert_eq!(pairs, [(1, 2), (2, 3)]);
/// assert_eq!(pairwise([1]).count(), 0);
/// ```
pub fn pairwise<I>(items: I) -> Pairwise<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let mut iter = items.into_iter();
    let previous = iter.next();
    Pairwise { iter, previous }
}

/// Running totals of `values`, starting with the first value.
///
/// # Examples
/// ```
/// use graphgen_core::accumulate;
///
/// let totals: Vec<_> = accumulate([0, 1, 2, 3]).collect();
/// assert_eq!(totals, [0, 1, 3, 6]);
/// ```
pub fn accumulate<I>(values: I) -> impl Iterator<Item = usize>
where
    I: IntoIterator<Item = usize>,
{
    values.into_iter().scan(0_usize, |total, value| {
        *total = total.saturating_add(value);
        Some(*total)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairwise_of_empty_is_empty() {
        assert_eq!(pairwise(Vec::<u8>::new()).count(), 0);
    }

    #[test]
    fn pairwise_borrows_when_given_references() {
        let labels = ["a", "b", "c"];
        let pairs: Vec<_> = pairwise(&labels).collect();
        assert_eq!(pairs, [(&"a", &"b"), (&"b", &"c")]);
    }

    #[test]
    fn pairwise_of_extents_gives_half_open_blocks() {
        let blocks: Vec<_> = pairwise(accumulate([0, 2, 0, 3])).collect();
        assert_eq!(blocks, [(0, 2), (2, 2), (2, 5)]);
    }

    #[test]
    fn accumulate_of_empty_is_empty() {
        assert_eq!(accumulate(Vec::new()).count(), 0);
    }
}
