//! Convert command: Gregorian date to compound calendar position.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use tonalamatl_engine::{CompoundDate, SolarForm, to_compound};

use crate::cli::ConvertArgs;

/// Run the forward conversion for one date.
pub fn run(args: ConvertArgs) -> Result<()> {
    let _cmd = info_span!("convert").entered();
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    info!(%date, "converting");

    let compound = to_compound(date).context("conversion failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&compound)?);
    } else {
        print_text(&compound);
    }
    Ok(())
}

fn print_text(compound: &CompoundDate) {
    println!("Gregorian      {}", compound.gregorian());

    let ritual = compound.ritual();
    println!(
        "Tonalpohualli  {} ({}), day {} of 260",
        ritual,
        ritual.sign().english_name,
        ritual.day_count()
    );

    let solar = compound.solar();
    match solar.form() {
        SolarForm::MonthDay { month, day } => println!(
            "Xiuhpohualli   day {} of {} ({}), day {} of 365",
            day,
            month.nahuatl_name,
            month.english_name,
            solar.day_of_year()
        ),
        SolarForm::Nemontemi(nem) => println!(
            "Xiuhpohualli   nemontemi day {} ({}), day {} of 365",
            nem.index,
            nem.name,
            solar.day_of_year()
        ),
    }

    println!("Year in round  {} of 52", compound.year_in_round());
}
