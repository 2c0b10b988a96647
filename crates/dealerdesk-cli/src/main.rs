//! Dealerdesk - car dealership inventory, sales, and customer management
//!
//! A CLI over the same record store the desktop UI uses. Data is the demo
//! fixture reloaded on every run; there is no persistence.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
