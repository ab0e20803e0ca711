//! Literal digit-pattern search over lazily produced sequences
//!
//! Matching pulls one digit at a time, so searching an infinite root stops
//! as soon as enough matches have been found. Searching backward needs a
//! [`FiniteSequence`]; the pattern is reversed once and run through the same
//! automaton.
//!
//! Sparse sources may skip positions. A gap resets the automaton: unknown
//! digits never take part in a match.

mod kmp;

pub use kmp::Kmp;

use crate::error::{RootError, RootResult};
use crate::sequence::{FiniteSequence, Sequence};

/// Lazy iterator over match start positions
#[derive(Debug, Clone)]
pub struct Matches<I> {
    items: I,
    kmp: Option<Kmp>,
    expected: Option<usize>,
    backward: bool,
}

impl<I> Matches<I>
where
    I: Iterator<Item = (usize, u8)>,
{
    fn new(items: I, pattern: &[u8], backward: bool) -> Self {
        let kmp = if pattern.is_empty() {
            None
        } else if backward {
            let reversed: Vec<u8> = pattern.iter().rev().copied().collect();
            Some(Kmp::new(&reversed))
        } else {
            Some(Kmp::new(pattern))
        };
        Self {
            items,
            kmp,
            expected: None,
            backward,
        }
    }
}

impl<I> Iterator for Matches<I>
where
    I: Iterator<Item = (usize, u8)>,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        // An empty pattern matches at every position.
        let Some(kmp) = self.kmp.as_mut() else {
            return self.items.next().map(|(position, _)| position);
        };

        for (position, digit) in self.items.by_ref() {
            if self.expected != Some(position) {
                kmp.reset();
            }
            self.expected = if self.backward {
                position.checked_sub(1)
            } else {
                Some(position + 1)
            };

            if kmp.feed(digit) {
                let start = if self.backward {
                    position
                } else {
                    position + 1 - kmp.pattern_len()
                };
                return Some(start);
            }
        }
        None
    }
}

/// All match positions in ascending order, computed lazily
pub fn find<'a, S>(seq: &'a S, pattern: &[u8]) -> Matches<S::Iter<'a>>
where
    S: Sequence + ?Sized,
{
    Matches::new(seq.iter_from(0), pattern, false)
}

/// All match positions in descending order, computed lazily
pub fn find_backward<'a, S>(seq: &'a S, pattern: &[u8]) -> Matches<S::BackIter<'a>>
where
    S: FiniteSequence + ?Sized,
{
    Matches::new(seq.iter_back(), pattern, true)
}

/// First match position. On an infinite sequence without a match this
/// never returns.
pub fn find_first<S>(seq: &S, pattern: &[u8]) -> Option<usize>
where
    S: Sequence + ?Sized,
{
    find(seq, pattern).next()
}

/// Up to `n` leading match positions, ascending
pub fn find_first_n<S>(seq: &S, pattern: &[u8], n: usize) -> Vec<usize>
where
    S: Sequence + ?Sized,
{
    find(seq, pattern).take(n).collect()
}

/// Every match position, ascending
pub fn find_all<S>(seq: &S, pattern: &[u8]) -> Vec<usize>
where
    S: FiniteSequence + ?Sized,
{
    find(seq, pattern).collect()
}

/// Last match position
pub fn find_last<S>(seq: &S, pattern: &[u8]) -> Option<usize>
where
    S: FiniteSequence + ?Sized,
{
    find_backward(seq, pattern).next()
}

/// Up to `n` trailing match positions, descending
pub fn find_last_n<S>(seq: &S, pattern: &[u8], n: usize) -> Vec<usize>
where
    S: FiniteSequence + ?Sized,
{
    find_backward(seq, pattern).take(n).collect()
}

/// Parse a pattern such as `"1414"` into digits
pub fn parse_pattern(s: &str) -> RootResult<Vec<u8>> {
    s.chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| RootError::InvalidPattern(format!("'{}' is not a digit in {:?}", c, s)))
        })
        .collect()
}
