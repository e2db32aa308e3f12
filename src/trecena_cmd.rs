//! Trecena command: show a 13-day grouping by date or by number.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use tonalamatl_engine::{Trecena, current_trecena, trecena_at};

use crate::cli::TrecenaArgs;

/// Run the trecena listing.
pub fn run(args: TrecenaArgs) -> Result<()> {
    let _cmd = info_span!("trecena").entered();
    let trecena = match args.number {
        Some(number) => trecena_at(number).context("invalid trecena number")?,
        None => {
            let date = args.date.unwrap_or_else(|| Local::now().date_naive());
            info!(%date, "deriving trecena from date");
            current_trecena(date).context("trecena derivation failed")?
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trecena)?);
    } else {
        print_text(&trecena);
    }
    Ok(())
}

fn print_text(trecena: &Trecena) {
    println!(
        "Trecena {} of 20, ruled by {} ({})",
        trecena.number(),
        trecena.ruling_sign().nahuatl_name,
        trecena.ruling_sign().english_name
    );
    for day in trecena.days() {
        println!(
            "  day {:>3}  {:<2} {:<14} {}",
            day.day_count(),
            day.number().value,
            day.sign().nahuatl_name,
            day.sign().english_name
        );
    }
}
