//! Lookup command: bounded reverse search from a compound position.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tonalamatl_engine::{CompoundTarget, SearchWindow, from_compound, to_compound};

use crate::cli::LookupArgs;

/// Run the reverse lookup.
pub fn run(args: LookupArgs) -> Result<()> {
    let _cmd = info_span!("lookup").entered();
    let target = CompoundTarget::new(args.ritual, args.solar, args.year_in_round)
        .context("invalid compound target")?;
    let window = if args.full_round {
        SearchWindow::CalendarRound
    } else {
        SearchWindow::Year
    };
    info!(
        around_year = args.around_year,
        window_days = window.days(),
        "searching"
    );

    let date = from_compound(target, args.around_year, window).with_context(|| {
        format!(
            "no match; try --around-year near the expected date{}",
            if args.full_round { "" } else { " or --full-round" }
        )
    })?;

    let compound = to_compound(date).context("conversion of matched date failed")?;
    println!(
        "{date}  =  {} / {}  (year {} of 52)",
        compound.ritual(),
        compound.solar(),
        compound.year_in_round()
    );
    Ok(())
}
