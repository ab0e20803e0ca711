//! Select command - materialize digits at chosen positions

use super::build_root;
use crate::cli::args::{OutputFormat, SelectArgs};
use crate::config::Config;
use crate::digits::Digits;
use crate::error::RootResult;
use crate::positions::Positions;

/// Execute the select command
pub fn execute(args: SelectArgs, config: &Config) -> RootResult<()> {
    let positions = Positions::parse(&args.positions)?;
    let root = build_root(&args.root, config)?;
    let digits = Digits::from_sequence(&root, &positions);

    match (args.format, args.encode) {
        (OutputFormat::Plain, true) => println!("{}", digits.to_text()),
        (OutputFormat::Plain, false) => {
            for (position, digit) in &digits {
                println!("{:>8}  {}", position, digit);
            }
        }
        (OutputFormat::Json, encode) => {
            #[derive(serde::Serialize)]
            struct SelectJson {
                exponent: i64,
                positions: String,
                #[serde(skip_serializing_if = "Option::is_none")]
                encoded: Option<Digits>,
                #[serde(skip_serializing_if = "Vec::is_empty")]
                digits: Vec<(usize, u8)>,
            }

            let json = SelectJson {
                exponent: root.exponent(),
                positions: digits.positions().to_string(),
                digits: if encode { Vec::new() } else { digits.iter().collect() },
                encoded: encode.then_some(digits),
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
