//! Mnemonic length and error types
//!
//! The word count is an explicit value passed into every call. It fixes the
//! entropy length, the checksum width and the limb layout used by the encoder.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bits per mnemonic word (2^11 = 2048 words).
pub const BITS_PER_WORD: u32 = 11;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("only 12- and 24-word seeds are supported (got {0})")]
    UnsupportedWordCount(usize),
    #[error("Invalid word count: {0:?}")]
    InvalidNumber(String),
}

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Invalid entropy length: {0} bytes (expected 16 or 32)")]
    InvalidEntropyLength(usize),
    #[error("Insufficient system entropy: {0}")]
    EntropyUnavailable(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SeedError {
    /// Errors after which no mnemonic may be produced at all.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SeedError::EntropyUnavailable(_))
    }
}

/// Supported mnemonic lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum WordCount {
    /// 128-bit entropy, 4-bit checksum
    #[default]
    Twelve,
    /// 256-bit entropy, 8-bit checksum
    TwentyFour,
}

impl WordCount {
    /// Number of words in the mnemonic
    pub const fn words(self) -> usize {
        match self {
            WordCount::Twelve => 12,
            WordCount::TwentyFour => 24,
        }
    }

    /// Entropy length in bytes
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::TwentyFour => 32,
        }
    }

    pub const fn entropy_bits(self) -> u32 {
        self.entropy_bytes() as u32 * 8
    }

    /// Checksum width. Fixed by `11 * words - entropy_bits`.
    pub const fn checksum_bits(self) -> u32 {
        BITS_PER_WORD * self.words() as u32 - self.entropy_bits()
    }

    /// Number of 64-bit limbs holding the entropy
    pub const fn limbs(self) -> usize {
        self.entropy_bytes() / 8
    }

    /// Mode implied by an entropy buffer length
    pub fn from_entropy_len(len: usize) -> Result<Self, SeedError> {
        match len {
            16 => Ok(WordCount::Twelve),
            32 => Ok(WordCount::TwentyFour),
            other => Err(SeedError::InvalidEntropyLength(other)),
        }
    }
}

impl TryFrom<usize> for WordCount {
    type Error = ConfigError;

    fn try_from(words: usize) -> Result<Self, Self::Error> {
        match words {
            12 => Ok(WordCount::Twelve),
            24 => Ok(WordCount::TwentyFour),
            other => Err(ConfigError::UnsupportedWordCount(other)),
        }
    }
}

impl From<WordCount> for usize {
    fn from(count: WordCount) -> usize {
        count.words()
    }
}

impl FromStr for WordCount {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: usize = s
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber(s.to_string()))?;
        WordCount::try_from(words)
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words())
    }
}
