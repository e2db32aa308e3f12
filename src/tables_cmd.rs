//! Tables command: print the reference tables.

use anyhow::Result;
use tracing::info_span;

use tonalamatl_tables::{DAY_SIGNS, MONTHS, NEMONTEMI, NUMBERS};

use crate::cli::{Table, TablesArgs};

/// Print one reference table as text or JSON.
pub fn run(args: TablesArgs) -> Result<()> {
    let _cmd = info_span!("tables").entered();
    match args.table {
        Table::Signs => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&DAY_SIGNS)?);
            } else {
                for sign in &DAY_SIGNS {
                    println!(
                        "{:>2}  {}  {:<14} {:<10} {:<6} {}",
                        sign.position,
                        sign.glyph,
                        sign.nahuatl_name,
                        sign.english_name,
                        sign.direction,
                        sign.deity
                    );
                }
            }
        }
        Table::Numbers => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&NUMBERS)?);
            } else {
                for number in &NUMBERS {
                    println!(
                        "{:>2}  {:<20} {:<10} {}",
                        number.value,
                        number.nahuatl_name,
                        number.polarity.as_str(),
                        number.meaning
                    );
                }
            }
        }
        Table::Months => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&MONTHS)?);
            } else {
                for month in &MONTHS {
                    println!(
                        "{:>2}  {:<20} {:<22} {:<12} {}",
                        month.position,
                        month.nahuatl_name,
                        month.english_name,
                        month.season.as_str(),
                        month.patron
                    );
                }
            }
        }
        Table::Nemontemi => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&NEMONTEMI)?);
            } else {
                for day in &NEMONTEMI {
                    println!("{:>2}  {:<16} {}", day.index, day.name, day.meaning);
                }
            }
        }
    }
    Ok(())
}
