//! Freightline entry point
//!
//! Parses arguments and hands off to the CLI module; errors are printed to
//! stderr with a non-zero exit.

use freightline::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
