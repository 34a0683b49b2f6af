//! Entropy-to-mnemonic encoder
//!
//! The combined stream `entropy || checksum` is 132 or 264 bits long and is
//! read as consecutive 11-bit groups, most significant first. Instead of
//! building that stream, the entropy is loaded into 2 or 4 big-endian
//! 64-bit limbs and consumed from the low end:
//!
//! 1. The last word takes the low `11 - cs` entropy bits, shifted up over
//!    the `cs`-bit checksum (`cs` = 4 or 8).
//! 2. The limbs are shifted right by `11 - cs`.
//! 3. Every earlier word, from second-to-last down to first, takes the low
//!    11 bits, then the limbs are shifted right by 11.

use crate::checksum::checksum;
use crate::entropy::Entropy;
use crate::limbs::Limbs;
use crate::seed::{SeedError, WordCount, BITS_PER_WORD};
use crate::wordlist::wordlist;
use rand::{CryptoRng, RngCore};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// A generated mnemonic, held as word indices and rendered on demand.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SeedPhrase {
    indices: Vec<u16>,
}

impl SeedPhrase {
    /// The words, first to last.
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        let list = wordlist();
        self.indices.iter().map(move |&i| list[usize::from(i)])
    }

    /// The 11-bit word indices, first to last.
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn word_count(&self) -> WordCount {
        if self.indices.len() == WordCount::TwentyFour.words() {
            WordCount::TwentyFour
        } else {
            WordCount::Twelve
        }
    }

    /// Words joined by single spaces, wiped when dropped.
    pub fn to_phrase(&self) -> Zeroizing<String> {
        let mut phrase = Zeroizing::new(String::with_capacity(self.len() * 9));
        for (i, word) in self.words().enumerate() {
            if i > 0 {
                phrase.push(' ');
            }
            phrase.push_str(word);
        }
        phrase
    }
}

impl fmt::Display for SeedPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SeedPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeedPhrase({} words, <redacted>)", self.len())
    }
}

/// Compute the word indices for `entropy`.
pub fn encode_indices(entropy: &Entropy) -> Zeroizing<Vec<u16>> {
    match entropy.word_count() {
        WordCount::Twelve => pack::<2>(entropy),
        WordCount::TwentyFour => pack::<4>(entropy),
    }
}

fn pack<const N: usize>(entropy: &Entropy) -> Zeroizing<Vec<u16>> {
    let word_count = entropy.word_count();
    debug_assert_eq!(word_count.limbs(), N);

    let cs_bits = word_count.checksum_bits();
    let tail_bits = BITS_PER_WORD - cs_bits;

    let mut limbs = Limbs::<N>::from_be_bytes(entropy.as_bytes());
    let mut indices = Zeroizing::new(vec![0u16; word_count.words()]);
    let last = indices.len() - 1;

    // Checksum bits are the lowest of the stream, so they close the last word.
    indices[last] = ((limbs.low_bits(tail_bits) << cs_bits) as u16) | checksum(entropy);
    limbs.shr(tail_bits);

    for slot in indices[..last].iter_mut().rev() {
        *slot = limbs.low_bits(BITS_PER_WORD) as u16;
        limbs.shr(BITS_PER_WORD);
    }

    indices
}

/// Encode entropy as a mnemonic.
pub fn encode(entropy: &Entropy) -> SeedPhrase {
    let indices = encode_indices(entropy);
    log::debug!("encoded {} bytes of entropy as {} words", entropy.len(), indices.len());
    SeedPhrase {
        indices: indices.to_vec(),
    }
}

/// Draw fresh OS entropy and encode it.
pub fn generate_phrase(word_count: WordCount) -> Result<SeedPhrase, SeedError> {
    let entropy = Entropy::generate(word_count)?;
    Ok(encode(&entropy))
}

/// Draw entropy from `rng` and encode it.
pub fn generate_phrase_with<R>(rng: &mut R, word_count: WordCount) -> Result<SeedPhrase, SeedError>
where
    R: RngCore + CryptoRng,
{
    let entropy = Entropy::generate_with(rng, word_count)?;
    Ok(encode(&entropy))
}
