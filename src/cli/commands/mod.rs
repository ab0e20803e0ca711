//! CLI command implementations

pub mod config;
pub mod digits;
pub mod find;
pub mod select;

pub use config::execute as config;
pub use digits::execute as digits;
pub use find::execute as find;
pub use select::execute as select;

use crate::cli::args::RootArgs;
use crate::config::Config;
use crate::error::RootResult;
use crate::root::{Root, RootKind};

/// Build the root described by the command line, using the configured
/// chunk size
fn build_root(args: &RootArgs, config: &Config) -> RootResult<Root> {
    let kind = if args.cube {
        RootKind::Cube
    } else {
        RootKind::Square
    };
    Root::with_chunk_size(
        kind,
        args.radicand.numerator.clone(),
        args.radicand.denominator.clone(),
        config.memo.chunk_size,
    )
}

/// Render digits as a string, breaking lines every `per_line` digits
fn digit_lines(digits: &[u8], per_line: usize) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / per_line.max(1));
    for (i, d) in digits.iter().enumerate() {
        if per_line > 0 && i > 0 && i % per_line == 0 {
            out.push('\n');
        }
        out.push(char::from(b'0' + d));
    }
    out
}
