//! Root values backed by lazily computed, memoized digits
//!
//! A [`Root`] is `0.d1d2d3... * 10^exponent` with `d1 != 0`, or exactly zero
//! when it has no digits. Digits are computed on a background thread only
//! as far as some reader has asked for.

pub mod generator;
pub mod kind;

pub use generator::RootDigits;
pub use kind::{Increment, RootKind};

use crate::error::RootResult;
use crate::memo::{MemoBackIter, MemoIter, Memoizer, DEFAULT_CHUNK_SIZE};
use crate::sequence::{FiniteSequence, Sequence};
use num_bigint::BigInt;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Digits shown by `Display` before eliding the rest
const PREVIEW_DIGITS: usize = 16;

/// Square or cube root of a non-negative rational
///
/// Cloning is cheap; clones share the same digit buffer. A `Root` is only
/// searched forward, even when it is exact. For backward search, truncate
/// it with [`Root::with_significant`] first. An exact root can use
/// `usize::MAX` as the limit, since its digits end on their own.
#[derive(Debug, Clone)]
pub struct Root {
    kind: RootKind,
    exponent: i64,
    memo: Arc<Memoizer>,
}

impl Root {
    /// The `kind` root of `numerator / denominator`
    pub fn new(
        kind: RootKind,
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> RootResult<Self> {
        Self::with_chunk_size(kind, numerator, denominator, DEFAULT_CHUNK_SIZE)
    }

    /// Like [`Root::new`], growing the digit buffer `chunk_size` at a time
    pub fn with_chunk_size(
        kind: RootKind,
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
        chunk_size: usize,
    ) -> RootResult<Self> {
        let (exponent, digits) = RootDigits::new(kind, numerator, denominator)?;
        debug!(%kind, exponent, "Created root");
        Ok(Self {
            kind,
            exponent,
            memo: Arc::new(Memoizer::with_chunk_size(digits, chunk_size)),
        })
    }

    /// Square root of `n`
    pub fn sqrt(n: impl Into<BigInt>) -> RootResult<Self> {
        Self::new(RootKind::Square, n, 1)
    }

    /// Square root of `numerator / denominator`
    pub fn sqrt_rational(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> RootResult<Self> {
        Self::new(RootKind::Square, numerator, denominator)
    }

    /// Cube root of `n`
    pub fn cube_root(n: impl Into<BigInt>) -> RootResult<Self> {
        Self::new(RootKind::Cube, n, 1)
    }

    /// Cube root of `numerator / denominator`
    pub fn cube_root_rational(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> RootResult<Self> {
        Self::new(RootKind::Cube, numerator, denominator)
    }

    /// Whether this is a square or cube root
    pub fn kind(&self) -> RootKind {
        self.kind
    }

    /// Power of ten applied to the mantissa
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Whether the root is exactly zero
    pub fn is_zero(&self) -> bool {
        self.memo.at(0).is_none()
    }

    /// Mantissa digit at `position`, or `None` past the end of an exact root
    pub fn at(&self, position: usize) -> Option<u8> {
        self.memo.at(position)
    }

    /// Up to `n` leading mantissa digits
    pub fn first_n(&self, n: usize) -> Vec<u8> {
        self.memo.first_n(n)
    }

    /// Mantissa digits starting at `position`
    pub fn digits_from(&self, position: usize) -> MemoIter<'_> {
        self.memo.digits_from(position)
    }

    /// Number of digits computed so far
    pub fn digits_computed(&self) -> usize {
        self.memo.len_hint()
    }

    /// Truncate to the first `limit` significant digits.
    ///
    /// The truncated root shares this root's digit buffer.
    pub fn with_significant(&self, limit: usize) -> FiniteRoot {
        FiniteRoot {
            root: self.clone(),
            limit,
        }
    }
}

impl Sequence for Root {
    type Iter<'a> = <Memoizer as Sequence>::Iter<'a>;

    fn iter_from(&self, start: usize) -> Self::Iter<'_> {
        self.memo.iter_from(start)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(PREVIEW_DIGITS);
        write_truncated(f, &self.memo, self.exponent, precision, usize::MAX)
    }
}

/// A root truncated to a fixed number of significant digits
#[derive(Debug, Clone)]
pub struct FiniteRoot {
    root: Root,
    limit: usize,
}

impl FiniteRoot {
    /// Power of ten applied to the mantissa
    pub fn exponent(&self) -> i64 {
        self.root.exponent
    }

    /// Maximum number of digits kept
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Actual number of digits: `limit`, or fewer for an exact root
    pub fn len(&self) -> usize {
        if self.limit == 0 {
            return 0;
        }
        if self.root.at(self.limit - 1).is_some() {
            self.limit
        } else {
            self.root.memo.len_to_end()
        }
    }

    /// Whether no digits are kept (zero root or zero limit)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Digit at `position`, or `None` at or past the truncation point
    pub fn at(&self, position: usize) -> Option<u8> {
        if position >= self.limit {
            return None;
        }
        self.root.at(position)
    }

    /// All retained digits
    pub fn to_vec(&self) -> Vec<u8> {
        self.root.first_n(self.limit)
    }

    /// The untruncated root
    pub fn root(&self) -> &Root {
        &self.root
    }
}

impl Sequence for FiniteRoot {
    type Iter<'a> = std::iter::Take<<Root as Sequence>::Iter<'a>>;

    fn iter_from(&self, start: usize) -> Self::Iter<'_> {
        self.root
            .iter_from(start)
            .take(self.limit.saturating_sub(start))
    }
}

impl FiniteSequence for FiniteRoot {
    type BackIter<'a> = MemoBackIter<'a>;

    fn iter_back(&self) -> Self::BackIter<'_> {
        self.root.memo.digits_before(self.limit)
    }
}

impl fmt::Display for FiniteRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(self.limit);
        write_truncated(f, &self.root.memo, self.root.exponent, precision, self.limit)
    }
}

/// Write `0.ddd...e<exponent>`, truncating (never rounding) at `precision`
/// digits and marking elided digits with `...`.
fn write_truncated(
    f: &mut fmt::Formatter<'_>,
    memo: &Memoizer,
    exponent: i64,
    precision: usize,
    limit: usize,
) -> fmt::Result {
    let shown = precision.min(limit);
    let digits = memo.first_n(shown);
    if digits.is_empty() {
        return write!(f, "0");
    }
    write!(f, "0.")?;
    for d in &digits {
        write!(f, "{}", d)?;
    }
    if digits.len() == shown && shown < limit && memo.at(shown).is_some() {
        write!(f, "...")?;
    }
    write!(f, "e{}", exponent)
}
