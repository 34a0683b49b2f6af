//! Command-line configuration.
//!
//! The only setting is the word count. There are no config files and no
//! environment overrides.

use anyhow::{bail, Context, Result};
use seedphrase_core::{ConfigError, WordCount};

/// What the process was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Generate(CliConfig),
    Help,
    Version,
}

/// Unvalidated generator settings as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Requested mnemonic length (default: 12)
    pub word_count: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            word_count: WordCount::default().words(),
        }
    }
}

impl CliConfig {
    /// Check the requested length. Must run before any entropy is drawn.
    pub fn validate(&self) -> Result<WordCount, ConfigError> {
        WordCount::try_from(self.word_count)
    }
}

/// Parse arguments (without the program name).
///
/// Accepts `-w N`, `--words N`, `-words N`, `--words=N` and `-words=N`.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command> {
    let mut config = CliConfig::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_ref();
        match arg {
            "-w" | "--words" | "-words" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("{} requires a number", arg);
                };
                config.word_count = parse_count(arg, value.as_ref())?;
            }
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            other => match other.split_once('=') {
                Some((flag @ ("--words" | "-words"), value)) => {
                    config.word_count = parse_count(flag, value)?;
                }
                _ => bail!("Unknown argument: {}", other),
            },
        }
        i += 1;
    }

    Ok(Command::Generate(config))
}

fn parse_count(flag: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .with_context(|| format!("invalid value {:?} for {}", value, flag))
}
