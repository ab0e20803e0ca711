//! Sparse selections of digit positions
//!
//! A [`Positions`] is a sorted list of disjoint, non-touching half-open
//! ranges. Build one with [`PositionsBuilder`]; ranges may be added in any
//! order and the result is the same minimal set.

use crate::error::{RootError, RootResult};
use std::fmt;

/// Half-open range of positions `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionRange {
    pub start: usize,
    pub end: usize,
}

impl PositionRange {
    /// Number of positions covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers no positions
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `position` lies in `[start, end)`
    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position < self.end
    }
}

impl fmt::Display for PositionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len() == 1 {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}..{}", self.start, self.end)
        }
    }
}

/// Accumulates ranges in any order
#[derive(Debug, Clone, Default)]
pub struct PositionsBuilder {
    ranges: Vec<PositionRange>,
    unsorted: bool,
}

impl PositionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single position. Negative positions are ignored.
    pub fn add(&mut self, position: i64) -> &mut Self {
        self.add_range(position, position.saturating_add(1))
    }

    /// Add `[start, end)`. Negative bounds clamp to 0; empty ranges are
    /// ignored.
    pub fn add_range(&mut self, start: i64, end: i64) -> &mut Self {
        let start = start.max(0) as usize;
        let end = end.max(0) as usize;
        if start >= end {
            return self;
        }
        let range = PositionRange { start, end };

        if self.unsorted {
            self.ranges.push(range);
            return self;
        }
        match self.ranges.last_mut() {
            Some(last) if start >= last.start => {
                if start <= last.end {
                    last.end = last.end.max(end);
                } else {
                    self.ranges.push(range);
                }
            }
            Some(_) => {
                self.unsorted = true;
                self.ranges.push(range);
            }
            None => self.ranges.push(range),
        }
        self
    }

    /// Finish, leaving the builder empty
    pub fn build(&mut self) -> Positions {
        let mut ranges = std::mem::take(&mut self.ranges);
        if std::mem::take(&mut self.unsorted) {
            ranges.sort_by_key(|r| r.start);
            ranges = merge_sorted(ranges);
        }
        Positions { ranges }
    }
}

/// Merge ranges sorted by start; ranges that overlap or touch coalesce
fn merge_sorted(ranges: Vec<PositionRange>) -> Vec<PositionRange> {
    let mut merged: Vec<PositionRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// Immutable, minimal set of selected positions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Positions {
    ranges: Vec<PositionRange>,
}

impl Positions {
    /// Positions `[0, n)`
    pub fn up_to(n: usize) -> Self {
        Self::between(0, n)
    }

    /// Positions `[start, end)`
    pub fn between(start: usize, end: usize) -> Self {
        let ranges = if start < end {
            vec![PositionRange { start, end }]
        } else {
            Vec::new()
        };
        Self { ranges }
    }

    /// Parse a comma-separated list such as `0..10,15,20..25`
    pub fn parse(s: &str) -> RootResult<Self> {
        let mut builder = PositionsBuilder::new();
        for item in s.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            let number = |v: &str| {
                v.trim()
                    .parse::<i64>()
                    .map_err(|_| RootError::InvalidPositions(format!("bad position {:?}", v)))
            };
            match item.split_once("..") {
                Some((start, end)) => builder.add_range(number(start)?, number(end)?),
                None => builder.add(number(item)?),
            };
        }
        Ok(builder.build())
    }

    /// Ranges in ascending order
    pub fn ranges(&self) -> &[PositionRange] {
        &self.ranges
    }

    /// Whether no position is selected
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// One past the largest selected position, or 0 when empty
    pub fn end(&self) -> usize {
        self.ranges.last().map_or(0, |r| r.end)
    }

    /// Number of selected positions
    pub fn count(&self) -> usize {
        self.ranges.iter().map(PositionRange::len).sum()
    }

    /// Whether `position` is selected, by binary search over the ranges
    pub fn contains(&self, position: usize) -> bool {
        let index = self.ranges.partition_point(|r| r.end <= position);
        self.ranges
            .get(index)
            .is_some_and(|r| r.contains(position))
    }

    /// Streaming membership test for non-decreasing positions
    pub fn filter(&self) -> PositionFilter<'_> {
        PositionFilter {
            ranges: &self.ranges,
            index: 0,
        }
    }
}

impl fmt::Display for Positions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", range)?;
        }
        Ok(())
    }
}

/// Answers "is `p` selected" for positions presented in increasing order
#[derive(Debug, Clone)]
pub struct PositionFilter<'a> {
    ranges: &'a [PositionRange],
    index: usize,
}

impl PositionFilter<'_> {
    /// Whether `position` is selected; must not be called with a smaller
    /// position than the previous call
    pub fn includes(&mut self, position: usize) -> bool {
        while let Some(range) = self.ranges.get(self.index) {
            if position < range.end {
                return position >= range.start;
            }
            self.index += 1;
        }
        false
    }
}
