//! CLI argument definitions for vantage.
//!
//! # Commands
//!
//! | Command | Endpoint |
//! |---------|----------|
//! | `profile` | `OVERVIEW` |
//! | `balance-sheet` | `BALANCE_SHEET` |
//! | `income-statement` | `INCOME_STATEMENT` |
//! | `cash-flow` | `CASH_FLOW` |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `VANTAGE_TIMEOUT_MS` or 5000 | Request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! vantage profile IBM --pretty
//! VANTAGE_API_KEY=... vantage balance-sheet IBM --format ndjson
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Company fundamentals from Alpha Vantage as JSON.
///
/// The API key is read from `VANTAGE_API_KEY` and falls back to `demo`,
/// which only serves the IBM sample data.
#[derive(Debug, Parser)]
#[command(name = "vantage", author, version, about = "Alpha Vantage fundamentals CLI")]
pub struct Cli {
    /// Output format for results.
    ///
    /// - json: one JSON document (default)
    /// - ndjson: one record per line
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout in milliseconds; overrides `VANTAGE_TIMEOUT_MS`.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Ndjson,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Company overview: identifiers, valuation ratios, dividend dates.
    Profile(SymbolArgs),

    /// Annual then quarterly balance sheets.
    BalanceSheet(SymbolArgs),

    /// Annual then quarterly income statements.
    IncomeStatement(SymbolArgs),

    /// Annual then quarterly cash flow statements.
    CashFlow(SymbolArgs),
}

impl Command {
    pub fn symbol(&self) -> &str {
        match self {
            Self::Profile(args)
            | Self::BalanceSheet(args)
            | Self::IncomeStatement(args)
            | Self::CashFlow(args) => &args.symbol,
        }
    }
}

#[derive(Debug, Args)]
pub struct SymbolArgs {
    /// Ticker symbol (e.g. IBM, RELIANCE.BSE).
    pub symbol: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vantage",
            "balance-sheet",
            "ibm",
            "--pretty",
            "--timeout-ms",
            "2500",
        ])
        .expect("valid arguments");

        assert!(cli.pretty);
        assert_eq!(cli.timeout_ms, Some(2500));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Command::BalanceSheet(_)));
        assert_eq!(cli.command.symbol(), "ibm");
    }

    #[test]
    fn rejects_missing_symbol() {
        assert!(Cli::try_parse_from(["vantage", "profile"]).is_err());
    }

    #[test]
    fn parses_ndjson_format() {
        let cli = Cli::try_parse_from(["vantage", "--format", "ndjson", "cash-flow", "IBM"])
            .expect("valid arguments");
        assert_eq!(cli.format, OutputFormat::Ndjson);
        assert_eq!(cli.timeout_ms, None);
    }
}
