use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Tonalamatl dual-calendar correlation tools.
#[derive(Parser)]
#[command(
    name = "tonalamatl",
    version,
    about = "Gregorian to tonalpohualli/xiuhpohualli calendar correlation"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to its compound calendar position.
    Convert(ConvertArgs),
    /// Show the 13-day trecena containing a date, or by number.
    Trecena(TrecenaArgs),
    /// Search for the Gregorian date matching a compound position.
    Lookup(LookupArgs),
    /// Print one of the reference tables.
    Tables(TablesArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Emit pretty JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `trecena` subcommand.
#[derive(clap::Args)]
pub struct TrecenaArgs {
    /// Gregorian date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long, conflicts_with = "number")]
    pub date: Option<NaiveDate>,

    /// Trecena number (1..=20), instead of deriving from a date.
    #[arg(short, long)]
    pub number: Option<u8>,

    /// Emit pretty JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `lookup` subcommand.
#[derive(clap::Args)]
pub struct LookupArgs {
    /// Target ritual day count (1..=260).
    #[arg(short, long)]
    pub ritual: u16,

    /// Target solar day-of-year (1..=365).
    #[arg(short, long)]
    pub solar: u16,

    /// Target year in the 52-year calendar round (1..=52).
    #[arg(short = 'y', long)]
    pub year_in_round: u8,

    /// Year whose January 1 starts the search.
    #[arg(short, long)]
    pub around_year: i32,

    /// Widen the search from one year to a full calendar round (18980 days).
    #[arg(long)]
    pub full_round: bool,
}

/// Arguments for the `tables` subcommand.
#[derive(clap::Args)]
pub struct TablesArgs {
    /// Which reference table to print.
    #[arg(value_enum)]
    pub table: Table,

    /// Emit pretty JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// The four reference tables.
#[derive(Clone, Copy, ValueEnum)]
pub enum Table {
    /// The 20 day signs of the tonalpohualli.
    Signs,
    /// The 13 numbers cycled against the day signs.
    Numbers,
    /// The 18 twenty-day months of the xiuhpohualli.
    Months,
    /// The 5 nemontemi days completing the solar year.
    Nemontemi,
}
