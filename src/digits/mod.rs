//! Sparse cache of selected digits
//!
//! [`Digits`] materializes only the positions chosen by a [`Positions`]
//! set, so questions about far-apart parts of an infinite root never force
//! the digits in between to be kept. Positions that were not selected are
//! unknown: lookups return `None` and pattern search treats them as gaps.

pub mod codec;

use crate::positions::{Positions, PositionsBuilder};
use crate::sequence::{FiniteSequence, Sequence};
use std::iter::{Copied, Zip};
use std::slice;
use tracing::debug;

/// Iterator over stored `(position, digit)` pairs; reversible
pub type DigitsIter<'a> = Zip<Copied<slice::Iter<'a, usize>>, Copied<slice::Iter<'a, u8>>>;

/// Digits at a strictly increasing set of positions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digits {
    positions: Vec<usize>,
    digits: Vec<u8>,
}

impl Digits {
    /// Materialize the digits of `seq` at `selected`.
    ///
    /// Never reads `seq` at or past `selected.end()`.
    pub fn from_sequence<S>(seq: &S, selected: &Positions) -> Self
    where
        S: Sequence + ?Sized,
    {
        let mut result = Self::default();
        for range in selected.ranges() {
            for (position, digit) in seq.iter_from(range.start) {
                if position >= range.end {
                    break;
                }
                result.push(position, digit);
                if position + 1 == range.end {
                    break;
                }
            }
        }
        debug!(
            selected = selected.count(),
            stored = result.len(),
            end = selected.end(),
            "Materialized digits"
        );
        result
    }

    /// Append a digit; `position` must exceed every stored position.
    pub(crate) fn push(&mut self, position: usize, digit: u8) {
        debug_assert!(digit <= 9, "digit out of range: {}", digit);
        debug_assert!(
            self.positions.last().map_or(true, |last| position > *last),
            "positions must be strictly increasing"
        );
        self.positions.push(position);
        self.digits.push(digit);
    }

    /// Digit at `position`, or `None` if it was not stored
    pub fn at(&self, position: usize) -> Option<u8> {
        self.positions
            .binary_search(&position)
            .ok()
            .map(|index| self.digits[index])
    }

    /// Number of stored digits
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no digit is stored
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Smallest stored position
    pub fn min(&self) -> Option<usize> {
        self.positions.first().copied()
    }

    /// Largest stored position
    pub fn max(&self) -> Option<usize> {
        self.positions.last().copied()
    }

    /// Stored digits in ascending position order; `.rev()` walks backward
    pub fn iter(&self) -> DigitsIter<'_> {
        self.positions
            .iter()
            .copied()
            .zip(self.digits.iter().copied())
    }

    /// The stored positions as a minimal range set
    pub fn positions(&self) -> Positions {
        let mut builder = PositionsBuilder::new();
        for &position in &self.positions {
            builder.add(position as i64);
        }
        builder.build()
    }

    /// Keep only the stored digits whose positions are in `selected`
    pub fn select(&self, selected: &Positions) -> Self {
        let mut filter = selected.filter();
        let mut result = Self::default();
        for (position, digit) in self.iter() {
            if position >= selected.end() {
                break;
            }
            if filter.includes(position) {
                result.push(position, digit);
            }
        }
        result
    }
}

impl Sequence for Digits {
    type Iter<'a> = DigitsIter<'a>;

    fn iter_from(&self, start: usize) -> Self::Iter<'_> {
        let index = self.positions.partition_point(|p| *p < start);
        self.positions[index..]
            .iter()
            .copied()
            .zip(self.digits[index..].iter().copied())
    }
}

impl FiniteSequence for Digits {
    type BackIter<'a> = std::iter::Rev<DigitsIter<'a>>;

    fn iter_back(&self) -> Self::BackIter<'_> {
        self.iter().rev()
    }
}

impl<'a> IntoIterator for &'a Digits {
    type Item = (usize, u8);
    type IntoIter = DigitsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
