//! freqdist - Frequency distribution of lines, bytes, runes or words
//!
//! freqdist reads stdin to the end, counts every token of the selected kind,
//! and prints the tokens ranked by descending count:
//! - `line` (default) and `word`: `<count>\t<token>`
//! - `byte`: `<count>\t<hex>\t<char>\t<name>`
//! - `rune`: `<count>\t<U+XXXX>\t<char>\t<name>`

use clap::Parser;
use std::process::ExitCode;

mod cli;
mod core;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
