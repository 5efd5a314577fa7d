//! CLI argument definitions for `flight-rank`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use wpm_cli::config::{parse_slot_arg, parse_weight_arg};
use wpm_model::{Criterion, RankMethod, TimeSlot};
use wpm_report::{DEFAULT_TOP_N, ExportFormat};

#[derive(Parser)]
#[command(
    name = "flight-rank",
    version,
    about = "Rank flight offers with the Weighted Product Model",
    long_about = "Rank flight offers with the Weighted Product Model.\n\n\
                  Price, duration, days left and stops are costs; class and the\n\
                  departure/arrival slot scores are benefits. Each criterion weight\n\
                  is relative and rescaled to sum to one."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rank the flights of a dataset and print the best ones.
    Rank(RankArgs),

    /// List the ranking criteria with their kind and default weight.
    Criteria,
}

#[derive(Parser)]
pub struct RankArgs {
    /// Flight dataset (CSV with a header row).
    #[arg(value_name = "DATASET", default_value = "flights.csv")]
    pub dataset: PathBuf,

    /// TOML file with [weights], [departure], [arrival] and rank_method.
    #[arg(long = "preferences", value_name = "FILE")]
    pub preferences: Option<PathBuf>,

    /// Criterion weight, e.g. `price=0.5` (repeatable, overrides the file).
    #[arg(long = "weight", value_name = "CRITERION=VALUE", value_parser = parse_weight_arg)]
    pub weights: Vec<(Criterion, f64)>,

    /// Departure slot score, e.g. `Morning=5` (repeatable, overrides the file).
    #[arg(long = "departure", value_name = "SLOT=SCORE", value_parser = parse_slot_arg)]
    pub departure: Vec<(TimeSlot, u8)>,

    /// Arrival slot score, e.g. `Night=1` (repeatable, overrides the file).
    #[arg(long = "arrival", value_name = "SLOT=SCORE", value_parser = parse_slot_arg)]
    pub arrival: Vec<(TimeSlot, u8)>,

    /// Rule for records with identical scores.
    #[arg(long = "rank-method", value_enum)]
    pub rank_method: Option<RankMethodArg>,

    /// Number of flights in the summary.
    #[arg(long = "top", value_name = "N", default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Also print the full ranked table.
    #[arg(long = "all")]
    pub all: bool,

    /// Write the ranked table to a file.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output file format (default: from the file extension, else csv).
    #[arg(long = "format", value_enum, requires = "output")]
    pub format: Option<ExportFormatArg>,

    /// Field delimiter of the dataset.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",")]
    pub delimiter: String,
}

/// CLI tie rule choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum RankMethodArg {
    /// Ties share a rank, the next rank is skipped (1, 2, 2, 4).
    Competitive,
    /// Ties share a rank, no gaps (1, 2, 2, 3).
    Dense,
    /// Ties broken by dataset order (1, 2, 3, 4).
    Ordinal,
}

impl From<RankMethodArg> for RankMethod {
    fn from(arg: RankMethodArg) -> Self {
        match arg {
            RankMethodArg::Competitive => RankMethod::Competitive,
            RankMethodArg::Dense => RankMethod::Dense,
            RankMethodArg::Ordinal => RankMethod::Ordinal,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Json,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Csv => ExportFormat::Csv,
            ExportFormatArg::Json => ExportFormat::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
