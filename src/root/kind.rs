//! Root kinds and their per-digit increment recurrences
//!
//! Digit extraction subtracts successive increments from a running
//! remainder. For a root prefix `q` the increment is `(q + 1)^k - q^k`, so
//! counting how many increments fit yields the next digit exactly.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::fmt;

/// Which root to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootKind {
    /// Square root, radicand consumed in base-100 groups
    Square,
    /// Cube root, radicand consumed in base-1000 groups
    Cube,
}

impl RootKind {
    /// Radicand group base: 10 raised to the root degree
    pub fn base(&self) -> u32 {
        match self {
            Self::Square => 100,
            Self::Cube => 1000,
        }
    }

    /// Fresh increment state for the first digit
    pub fn increment(&self) -> Increment {
        Increment {
            kind: *self,
            prefix: BigInt::zero(),
            value: BigInt::one(),
        }
    }
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Square => "square",
            Self::Cube => "cube",
        };
        write!(f, "{}", name)
    }
}

/// Running increment threaded through digit extraction
///
/// `prefix` is the root computed so far (scaled to the current digit) plus
/// the number of trial subtractions already made for the current digit.
#[derive(Debug, Clone)]
pub struct Increment {
    kind: RootKind,
    prefix: BigInt,
    value: BigInt,
}

impl Increment {
    /// Amount to subtract for the next trial
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Advance after a successful trial subtraction
    pub fn next(&mut self) {
        match self.kind {
            // (q + 2)^2 - (q + 1)^2 = ((q + 1)^2 - q^2) + 2
            RootKind::Square => self.value += 2u32,
            // (q + 2)^3 - (q + 1)^3 = ((q + 1)^3 - q^3) + 6(q + 1)
            RootKind::Cube => self.value += (&self.prefix + 1u32) * 6u32,
        }
        self.prefix += 1u32;
    }

    /// Reset for the next digit position once the current digit is final
    pub fn next_digit(&mut self) {
        // Rewrite the increment for prefix 10q in terms of the one for q,
        // avoiding a full multiplication of the prefix by itself.
        match self.kind {
            // 2(10q) + 1 = 10(2q + 1) - 9
            RootKind::Square => {
                self.value *= 10u32;
                self.value -= 9u32;
            }
            // 3(10q)^2 + 3(10q) + 1 = 100(3q^2 + 3q + 1) - 270q - 99
            RootKind::Cube => {
                self.value *= 100u32;
                self.value -= &self.prefix * 270u32 + 99u32;
            }
        }
        self.prefix *= 10u32;
    }
}
