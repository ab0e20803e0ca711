//! rootdigits - lazily computed digits of square and cube roots
//!
//! Digits of `sqrt(n / d)` or `cbrt(n / d)` are extracted one at a time with
//! exact integer arithmetic and kept in a shared, append-only buffer filled
//! by a background thread. Nothing is computed to a fixed precision: each
//! query forces only the digits it needs.
//!
//! # Layers
//!
//! | Module | Role |
//! |--------|------|
//! | [`root`] | digit-by-digit extraction and root values |
//! | [`memo`] | background-filled buffer giving random access to a cursor |
//! | [`search`] | KMP pattern search, forward and backward |
//! | [`positions`] | sparse position selections |
//! | [`digits`] | sparse digit cache and its encodings |
//!
//! # Example
//!
//! ```rust
//! use rootdigits::root::Root;
//! use rootdigits::search::find_first_n;
//!
//! let root = Root::sqrt(2).unwrap();
//! assert_eq!(root.exponent(), 1);
//! assert_eq!(root.first_n(5), vec![1, 4, 1, 4, 2]);
//! assert_eq!(find_first_n(&root, &[1, 4], 3), vec![0, 2, 144]);
//! ```

pub mod cli;
pub mod config;
pub mod digits;
pub mod error;
pub mod memo;
pub mod positions;
pub mod root;
pub mod search;
pub mod sequence;

pub use error::{RootError, RootResult};
