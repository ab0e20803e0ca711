//! Digit-by-digit root extraction
//!
//! The radicand is normalized into `[1/base, 1)` so that its root lies in
//! `[0.1, 1)`, then consumed one base-`base` group at a time. Every digit is
//! computed with exact integer arithmetic.

use super::kind::{Increment, RootKind};
use crate::error::{RootError, RootResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Supplies the base-`base` digits of a rational in `[0, 1)`
#[derive(Debug, Clone)]
struct Groups {
    numerator: BigInt,
    denominator: BigInt,
    base: u32,
}

impl Groups {
    fn is_exhausted(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Next group, or zero once the fraction is used up
    fn next_group(&mut self) -> BigInt {
        if self.is_exhausted() {
            return BigInt::zero();
        }
        let scaled = &self.numerator * self.base;
        let (group, rest) = scaled.div_rem(&self.denominator);
        self.numerator = rest;
        group
    }
}

/// Single-pass cursor over the mantissa digits of a root
///
/// Not shareable: each call to `next` mutates the remainder and increment.
/// Wrap it in a [`Memoizer`](crate::memo::Memoizer) for random access or
/// multiple readers.
#[derive(Debug, Clone)]
pub struct RootDigits {
    groups: Groups,
    remainder: BigInt,
    increment: Increment,
}

impl RootDigits {
    /// Create a cursor for the `kind` root of `numerator / denominator`.
    ///
    /// Returns the exponent alongside the cursor: the root equals
    /// `0.d1d2d3... * 10^exponent`. A zero radicand yields exponent 0 and no
    /// digits.
    pub fn new(
        kind: RootKind,
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> RootResult<(i64, Self)> {
        let mut numerator = numerator.into();
        let mut denominator = denominator.into();

        if numerator.is_negative() {
            return Err(RootError::NegativeNumerator(numerator.to_string()));
        }
        if !denominator.is_positive() {
            return Err(RootError::NonPositiveDenominator(denominator.to_string()));
        }

        let base = kind.base();
        let mut exponent = 0i64;

        if !numerator.is_zero() {
            let divisor = numerator.gcd(&denominator);
            numerator /= &divisor;
            denominator /= &divisor;

            while numerator >= denominator {
                denominator *= base;
                exponent += 1;
            }
            while &numerator * base < denominator {
                numerator *= base;
                exponent -= 1;
            }
        }

        let digits = Self {
            groups: Groups {
                numerator,
                denominator,
                base,
            },
            remainder: BigInt::zero(),
            increment: kind.increment(),
        };
        Ok((exponent, digits))
    }
}

impl Iterator for RootDigits {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remainder.is_zero() && self.groups.is_exhausted() {
            return None;
        }

        let group = self.groups.next_group();
        self.remainder = &self.remainder * self.groups.base + group;

        let mut digit = 0u8;
        while self.remainder >= *self.increment.value() {
            self.remainder -= self.increment.value();
            self.increment.next();
            digit += 1;
        }
        self.increment.next_digit();

        Some(digit)
    }
}
