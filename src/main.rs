mod cli;
mod convert_cmd;
mod logging;
mod lookup_cmd;
mod tables_cmd;
mod trecena_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Convert(args) => convert_cmd::run(args),
        Command::Trecena(args) => trecena_cmd::run(args),
        Command::Lookup(args) => lookup_cmd::run(args),
        Command::Tables(args) => tables_cmd::run(args),
    }
}
