//! BIP-39 checksum
//!
//! SHA-256 over the entropy; the checksum is the top `checksum_bits` of the
//! first digest byte (4 bits for 12 words, the whole byte for 24 words).
//! Only one byte of the digest is ever used, but the full hash must be
//! computed to stay compatible with every other BIP-39 implementation.

use crate::entropy::Entropy;
use crate::seed::WordCount;
use sha2::{Digest, Sha256};

/// Checksum of validated entropy, right-aligned.
pub fn checksum(entropy: &Entropy) -> u16 {
    checksum_bytes(entropy.as_bytes(), entropy.word_count())
}

/// Checksum of raw entropy bytes.
///
/// `entropy.len()` must equal `word_count.entropy_bytes()`.
pub fn checksum_bytes(entropy: &[u8], word_count: WordCount) -> u16 {
    debug_assert_eq!(entropy.len(), word_count.entropy_bytes());

    let digest = Sha256::digest(entropy);
    let first = digest[0];
    let bits = word_count.checksum_bits();
    u16::from(first >> (8 - bits))
}
