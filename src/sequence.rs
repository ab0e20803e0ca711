//! Capabilities shared by everything that yields positioned digits
//!
//! A [`Sequence`] may be infinite, so only forward iteration is offered.
//! A [`FiniteSequence`] knows where it ends and can also be walked
//! backward. Sparse sources (such as [`Digits`](crate::digits::Digits))
//! skip positions; consumers must not assume positions are contiguous.

/// Positioned digits in ascending position order
pub trait Sequence {
    /// Forward iterator of `(position, digit)` pairs
    type Iter<'a>: Iterator<Item = (usize, u8)>
    where
        Self: 'a;

    /// Iterate over digits at positions `>= start`
    fn iter_from(&self, start: usize) -> Self::Iter<'_>;
}

/// A sequence with a known end, walkable in both directions
pub trait FiniteSequence: Sequence {
    /// Backward iterator of `(position, digit)` pairs
    type BackIter<'a>: Iterator<Item = (usize, u8)>
    where
        Self: 'a;

    /// Iterate from the last digit toward position 0
    fn iter_back(&self) -> Self::BackIter<'_>;
}

type SliceDigits<'a> = std::iter::Copied<std::slice::Iter<'a, u8>>;

impl Sequence for [u8] {
    type Iter<'a> = std::iter::Zip<std::ops::RangeFrom<usize>, SliceDigits<'a>>;

    fn iter_from(&self, start: usize) -> Self::Iter<'_> {
        let start = start.min(self.len());
        (start..).zip(self[start..].iter().copied())
    }
}

impl FiniteSequence for [u8] {
    type BackIter<'a> = std::iter::Rev<std::iter::Enumerate<SliceDigits<'a>>>;

    fn iter_back(&self) -> Self::BackIter<'_> {
        self.iter().copied().enumerate().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_forward() {
        let digits: &[u8] = &[3, 1, 4, 1, 5];
        let items: Vec<_> = digits.iter_from(3).collect();
        assert_eq!(items, vec![(3, 1), (4, 5)]);
        assert_eq!(digits.iter_from(9).count(), 0);
    }

    #[test]
    fn slice_backward() {
        let digits: &[u8] = &[3, 1, 4];
        let items: Vec<_> = digits.iter_back().collect();
        assert_eq!(items, vec![(2, 4), (1, 1), (0, 3)]);
    }
}
