//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use num_bigint::BigInt;
use std::path::PathBuf;

/// rootdigits - digits of square and cube roots, on demand
///
/// Computes exact decimal digits of roots of non-negative rationals,
/// only as far as each command needs.
#[derive(Parser, Debug)]
#[command(name = "rootdigits")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ROOTDIGITS_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print leading mantissa digits of a root
    Digits(DigitsArgs),

    /// Find where a digit pattern occurs in a root
    Find(FindArgs),

    /// Print digits at selected positions only
    Select(SelectArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// A non-negative rational given as `N` or `N/D`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Radicand {
    pub numerator: BigInt,
    pub denominator: BigInt,
}

/// Arguments shared by commands that compute a root
#[derive(Parser, Debug)]
pub struct RootArgs {
    /// Radicand, e.g. 2 or 3/7
    #[arg(value_parser = parse_radicand)]
    pub radicand: Radicand,

    /// Take the cube root instead of the square root
    #[arg(long)]
    pub cube: bool,
}

/// Arguments for the digits command
#[derive(Parser, Debug)]
pub struct DigitsArgs {
    #[command(flatten)]
    pub root: RootArgs,

    /// Number of digits to print (default: from config)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the find command
#[derive(Parser, Debug)]
pub struct FindArgs {
    #[command(flatten)]
    pub root: RootArgs,

    /// Digits to look for, e.g. 1414
    pub pattern: String,

    /// Number of matches to report
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Only search the first LIMIT significant digits
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Report the last matches, searching backward
    #[arg(long, requires = "limit")]
    pub last: bool,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the select command
#[derive(Parser, Debug)]
pub struct SelectArgs {
    #[command(flatten)]
    pub root: RootArgs,

    /// Positions to materialize, e.g. 0..10,15,20..25
    pub positions: String,

    /// Print the compact hex encoding instead of the digits
    #[arg(long)]
    pub encode: bool,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Plain,
    /// JSON output
    Json,
}

/// Parse a radicand in `N` or `N/D` form
fn parse_radicand(s: &str) -> Result<Radicand, String> {
    let (numerator, denominator) = match s.split_once('/') {
        Some((n, d)) => (n.trim(), d.trim()),
        None => (s.trim(), "1"),
    };
    let numerator = numerator
        .parse::<BigInt>()
        .map_err(|_| format!("invalid numerator in '{s}'"))?;
    let denominator = denominator
        .parse::<BigInt>()
        .map_err(|_| format!("invalid denominator in '{s}'"))?;
    Ok(Radicand {
        numerator,
        denominator,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_radicand_integer() {
        let r = parse_radicand("100489").unwrap();
        assert_eq!(r.numerator, BigInt::from(100489));
        assert_eq!(r.denominator, BigInt::from(1));
    }

    #[test]
    fn parse_radicand_fraction() {
        let r = parse_radicand("3 / 7").unwrap();
        assert_eq!(r.numerator, BigInt::from(3));
        assert_eq!(r.denominator, BigInt::from(7));
    }

    #[test]
    fn parse_radicand_big() {
        let r = parse_radicand("123456789012345678901234567890").unwrap();
        assert_eq!(r.numerator.to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn parse_radicand_invalid() {
        assert!(parse_radicand("two").is_err());
        assert!(parse_radicand("1/x").is_err());
    }

    #[test]
    fn cli_parses_digits() {
        let cli = Cli::parse_from(["rootdigits", "digits", "2", "-n", "20", "--cube"]);
        match cli.command {
            Commands::Digits(args) => {
                assert_eq!(args.count, Some(20));
                assert!(args.root.cube);
                assert_eq!(args.root.radicand.numerator, BigInt::from(2));
            }
            _ => panic!("expected Digits command"),
        }
    }

    #[test]
    fn cli_parses_find() {
        let cli = Cli::parse_from(["rootdigits", "find", "2", "14", "-n", "3"]);
        match cli.command {
            Commands::Find(args) => {
                assert_eq!(args.pattern, "14");
                assert_eq!(args.count, 3);
                assert!(!args.last);
                assert_eq!(args.limit, None);
            }
            _ => panic!("expected Find command"),
        }
    }

    #[test]
    fn cli_last_requires_limit() {
        assert!(Cli::try_parse_from(["rootdigits", "find", "2", "14", "--last"]).is_err());
        let cli = Cli::parse_from(["rootdigits", "find", "2", "14", "--last", "-l", "1000"]);
        match cli.command {
            Commands::Find(args) => {
                assert!(args.last);
                assert_eq!(args.limit, Some(1000));
            }
            _ => panic!("expected Find command"),
        }
    }

    #[test]
    fn cli_parses_select() {
        let cli = Cli::parse_from(["rootdigits", "select", "7", "0..10,99", "--encode"]);
        match cli.command {
            Commands::Select(args) => {
                assert_eq!(args.positions, "0..10,99");
                assert!(args.encode);
            }
            _ => panic!("expected Select command"),
        }
    }

    #[test]
    fn cli_verbose_levels() {
        let cli = Cli::parse_from(["rootdigits", "config"]);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::parse_from(["rootdigits", "-vv", "config", "path"]);
        assert_eq!(cli.verbose, 2);
    }
}
