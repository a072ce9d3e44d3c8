//! Command-line flags and the run configuration derived from them

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "shopping-cart")]
#[command(about = "Reads cart and payment commands from stdin and prints confirmations.")]
#[command(version)]
pub struct Args {
    /// What to do when a quantity, price or amount is not a number
    #[arg(long, value_enum, default_value = "fatal", env = "CART_ON_PARSE_ERROR")]
    pub on_parse_error: ParseErrorPolicy,

    /// Print the cart total once input is exhausted
    #[arg(long, value_enum, env = "CART_SUMMARY")]
    pub summary: Option<SummaryFormat>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Handling of a malformed numeric token
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParseErrorPolicy {
    /// Stop the run with a non-zero exit status
    #[default]
    Fatal,
    /// Log a warning, drop the line and carry on
    Skip,
}

/// Output format of the end-of-run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    Text,
    Json,
}

/// Settings for one run of the command loop
#[derive(Debug, Default, Clone)]
pub struct Config {
    pub parse_error_policy: ParseErrorPolicy,

    /// `None` keeps the output to confirmation lines only
    pub summary: Option<SummaryFormat>,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            parse_error_policy: args.on_parse_error,
            summary: args.summary,
        }
    }
}
