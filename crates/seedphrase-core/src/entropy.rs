//! Entropy source
//!
//! Draws the secret from a cryptographically secure generator. A generator
//! failure is surfaced as [`SeedError::EntropyUnavailable`] and is never
//! retried or papered over with a weaker source.

use crate::seed::{SeedError, WordCount};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Largest supported entropy length (24 words)
pub const MAX_ENTROPY_BYTES: usize = 32;

/// Raw mnemonic entropy. Always 16 or 32 bytes, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    bytes: [u8; MAX_ENTROPY_BYTES],
    #[zeroize(skip)]
    word_count: WordCount,
}

impl Entropy {
    /// Draw fresh entropy from the operating system CSPRNG.
    pub fn generate(word_count: WordCount) -> Result<Self, SeedError> {
        Self::generate_with(&mut OsRng, word_count)
    }

    /// Draw fresh entropy from a caller-supplied CSPRNG.
    pub fn generate_with<R>(rng: &mut R, word_count: WordCount) -> Result<Self, SeedError>
    where
        R: RngCore + CryptoRng,
    {
        let mut entropy = Entropy {
            bytes: [0u8; MAX_ENTROPY_BYTES],
            word_count,
        };
        let len = word_count.entropy_bytes();
        rng.try_fill_bytes(&mut entropy.bytes[..len])
            .map_err(|e| SeedError::EntropyUnavailable(e.to_string()))?;

        log::debug!("drew {} bytes of entropy for {} words", len, word_count);
        Ok(entropy)
    }

    /// Wrap existing entropy. The length selects the mode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SeedError> {
        let word_count = WordCount::from_entropy_len(bytes.len())?;
        let mut entropy = Entropy {
            bytes: [0u8; MAX_ENTROPY_BYTES],
            word_count,
        };
        entropy.bytes[..bytes.len()].copy_from_slice(bytes);
        Ok(entropy)
    }

    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.word_count.entropy_bytes()]
    }

    pub fn len(&self) -> usize {
        self.word_count.entropy_bytes()
    }

    /// Never true; entropy is always 16 or 32 bytes.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("word_count", &self.word_count)
            .field("bytes", &"<redacted>")
            .finish()
    }
}

impl PartialEq for Entropy {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Entropy {}
