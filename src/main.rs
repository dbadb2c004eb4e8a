//! Randomizer Binary
//!
//! Prompts for player and game counts (or takes them as flags), plays a
//! round, prints the results and offers a replay.
//!
//! Options: --players, --games, --seed, --once, --json, --verbose, --quiet,
//! --log-file, --pause

use clap::Parser;
use colored::Colorize;
use tictactoe_randomizer::*;

fn main() {
    let args = cli::Args::parse();
    let wait = args.pause;
    if let Err(e) = log(args.level(), args.log_file) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }
    let code = match cli::Driver::new(args).run() {
        Ok(()) => 0,
        Err(e) => {
            match e.downcast_ref::<Error>() {
                Some(inner) if inner.is_fatal() => {
                    eprintln!("{} {}", "Fatal:".red().bold(), inner)
                }
                _ => eprintln!("{} {}", "Error:".red().bold(), e),
            }
            1
        }
    };
    if wait {
        pause();
    }
    std::process::exit(code);
}
