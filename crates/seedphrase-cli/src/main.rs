//! seedphrase — print a fresh BIP-39 mnemonic
//!
//! # Usage
//!
//! ```bash
//! seedphrase              # 12 words
//! seedphrase --words 24   # 24 words
//! ```
//!
//! Exit status 1 for bad arguments (nothing is printed to stdout and no
//! entropy is drawn). If the OS cannot supply secure randomness the process
//! aborts instead of printing a weaker phrase.

mod config;

use config::Command;
use env_logger::Env;
use seedphrase_core::{generate_phrase, SeedError};
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Keep entropy out of core files, including the one abort() would write
    seedphrase_core::memory::disable_core_dumps();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match config::parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            eprintln!("Try 'seedphrase --help' for usage.");
            process::exit(1);
        }
    };

    let cli_config = match command {
        Command::Help => {
            print_help();
            return;
        }
        Command::Version => {
            println!("seedphrase {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Command::Generate(cli_config) => cli_config,
    };

    let word_count = match cli_config.validate() {
        Ok(word_count) => word_count,
        Err(e) => {
            log::debug!("rejected configuration: {:?}", cli_config);
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    log::debug!("generating {}-word mnemonic", word_count);

    match generate_phrase(word_count) {
        Ok(phrase) => println!("{}", phrase.to_phrase().as_str()),
        Err(e) if e.is_fatal() => fatal(&e),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    }
}

/// Terminate abnormally. Nothing derived from the failed draw is printed.
fn fatal(err: &SeedError) -> ! {
    log::error!("{}", err);
    eprintln!("FATAL: {}", err);
    process::abort();
}

fn print_help() {
    println!(
        r#"seedphrase — generate a BIP-39 mnemonic from fresh system entropy

USAGE:
    seedphrase [OPTIONS]

OPTIONS:
    -w, --words <N>   Number of words: 12 or 24 (default: 12)
    -h, --help        Show this help message
    -V, --version     Show version

The mnemonic is written to stdout as a single line. Diagnostics go to
stderr; set RUST_LOG=debug for more detail (secret material is never
logged).

EXAMPLES:
    # 12-word mnemonic (128-bit entropy)
    seedphrase

    # 24-word mnemonic (256-bit entropy)
    seedphrase --words 24
"#
    );
}
