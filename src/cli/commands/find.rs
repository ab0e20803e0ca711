//! Find command - locate a digit pattern in a root

use super::build_root;
use crate::cli::args::{FindArgs, OutputFormat};
use crate::config::Config;
use crate::error::RootResult;
use crate::search::{find_first_n, find_last_n, parse_pattern};
use tracing::info;

/// Execute the find command
pub fn execute(args: FindArgs, config: &Config) -> RootResult<()> {
    let pattern = parse_pattern(&args.pattern)?;
    let root = build_root(&args.root, config)?;

    let matches = match args.limit {
        Some(limit) if args.last => find_last_n(&root.with_significant(limit), &pattern, args.count),
        Some(limit) => find_first_n(&root.with_significant(limit), &pattern, args.count),
        None => find_first_n(&root, &pattern, args.count),
    };
    info!(
        pattern = %args.pattern,
        found = matches.len(),
        computed = root.digits_computed(),
        "Search finished"
    );

    match args.format {
        OutputFormat::Plain => {
            if matches.is_empty() {
                println!("No matches found.");
            }
            for position in &matches {
                println!("{}", position);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&matches)?),
    }

    Ok(())
}
