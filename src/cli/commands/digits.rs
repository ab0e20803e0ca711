//! Digits command - print leading mantissa digits

use super::{build_root, digit_lines};
use crate::cli::args::{DigitsArgs, OutputFormat};
use crate::config::Config;
use crate::error::RootResult;
use tracing::debug;

/// Execute the digits command
pub fn execute(args: DigitsArgs, config: &Config) -> RootResult<()> {
    let root = build_root(&args.root, config)?;
    let count = args.count.unwrap_or(config.output.default_count);
    let digits = root.first_n(count);
    debug!(requested = count, got = digits.len(), "Computed digits");

    match args.format {
        OutputFormat::Plain => {
            if digits.is_empty() {
                println!("0");
            } else {
                println!("exponent: {}", root.exponent());
                println!("{}", digit_lines(&digits, config.output.digits_per_line));
            }
        }
        OutputFormat::Json => {
            #[derive(serde::Serialize)]
            struct DigitsJson {
                kind: String,
                exponent: i64,
                digits: String,
                exact: bool,
            }

            let json = DigitsJson {
                kind: root.kind().to_string(),
                exponent: root.exponent(),
                digits: digit_lines(&digits, 0),
                exact: digits.len() < count,
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
