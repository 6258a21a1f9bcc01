//! CLI argument definitions for hercap.
//!
//! Each command renders one tab of the dashboard. Filter selections are
//! global flags, so the same selection can be replayed against any tab.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `overview` | Metric cards and automated insights |
//! | `data` | Company table, largest market cap first |
//! | `charts` | Bar and scatter chart series |
//! | `insights` | Key findings (oldest, newest, largest employer, top exchange) |
//! | `export` | Write the filtered rows to `filtered_companies.csv` |
//! | `options` | Countries, exchanges and market-cap bounds available to filter on |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json, ndjson) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//! | `--country` | all | Country to include (repeatable) |
//! | `--exchange` | all | Exchange to include (repeatable, `""` for unlisted) |
//! | `--min-cap` / `--max-cap` | dataset bounds | Market cap range in $B |
//!
//! # Examples
//!
//! ```bash
//! hercap overview
//! hercap data --country USA --exchange NASDAQ
//! hercap insights --min-cap 0 --max-cap 1 --format json --pretty
//! hercap export --country USA --output usa.csv
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use hercap_core::EXPORT_FILE_NAME;

/// Women's health companies dashboard.
///
/// Filter a fixed table of companies by country, exchange and market cap,
/// then view summary statistics, chart series or a CSV export.
#[derive(Debug, Parser)]
#[command(name = "hercap", author, version, about = "Women's health companies dashboard")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Log pipeline stages to stderr (overridden by RUST_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(flatten)]
    pub filters: FilterArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text and tables.
    Table,
    /// Single JSON envelope.
    Json,
    /// Envelope on one line.
    Ndjson,
}

/// Filter selections shared by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Country to include; repeat for several. Defaults to every country.
    #[arg(long = "country", global = true, value_name = "COUNTRY")]
    pub countries: Vec<String>,

    /// Deselect every country.
    #[arg(long, global = true, default_value_t = false, conflicts_with = "countries")]
    pub no_country: bool,

    /// Exchange to include; repeat for several. Use "" for unlisted companies.
    #[arg(long = "exchange", global = true, value_name = "EXCHANGE")]
    pub exchanges: Vec<String>,

    /// Deselect every exchange.
    #[arg(long, global = true, default_value_t = false, conflicts_with = "exchanges")]
    pub no_exchange: bool,

    /// Lower market cap bound in billions of USD (inclusive).
    #[arg(long, global = true, value_name = "BILLIONS")]
    pub min_cap: Option<f64>,

    /// Upper market cap bound in billions of USD (inclusive).
    #[arg(long, global = true, value_name = "BILLIONS")]
    pub max_cap: Option<f64>,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Key metrics and automated insights.
    Overview,

    /// Filtered companies, sorted by market cap descending.
    Data,

    /// Chart-ready series for the bar and scatter charts.
    Charts,

    /// Oldest, newest, largest employer and most common exchange.
    Insights,

    /// Write the filtered companies as CSV in dataset order.
    Export(ExportArgs),

    /// List the values available to filter on.
    Options,
}

/// Arguments for the `export` command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Destination file.
    #[arg(long, short, default_value = EXPORT_FILE_NAME)]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_filters_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hercap",
            "data",
            "--country",
            "USA",
            "--country",
            "Japan",
            "--exchange",
            "",
            "--max-cap",
            "1",
        ])
        .expect("must parse");

        assert!(matches!(cli.command, Command::Data));
        assert_eq!(cli.filters.countries, ["USA", "Japan"]);
        assert_eq!(cli.filters.exchanges, [""]);
        assert_eq!(cli.filters.max_cap, Some(1.0));
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn export_defaults_to_standard_file_name() {
        let cli = Cli::try_parse_from(["hercap", "export"]).expect("must parse");
        let Command::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.output, PathBuf::from("filtered_companies.csv"));
    }

    #[test]
    fn no_country_conflicts_with_explicit_country() {
        let result = Cli::try_parse_from(["hercap", "data", "--no-country", "--country", "USA"]);
        assert!(result.is_err());
    }
}
