//! Security-specific tests.
//!
//! These tests verify:
//! 1. A failing entropy source never yields a mnemonic
//! 2. Secrets are zeroed and never leak through Debug
//! 3. Malformed inputs are rejected without panicking
//! 4. Randomized inputs always produce checksum-valid mnemonics

use rand::{CryptoRng, Rng, RngCore};
use seedphrase_core::entropy::Entropy;
use seedphrase_core::{
    encode, generate_phrase, generate_phrase_with, ConfigError, SeedError, WordCount,
};
use zeroize::Zeroize;

/// Hands out a few bytes, then reports the OS source as unavailable.
struct FlakyRng {
    remaining: usize,
}

impl RngCore for FlakyRng {
    fn next_u32(&mut self) -> u32 {
        panic!("infallible path must not be used for entropy")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("infallible path must not be used for entropy")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("infallible path must not be used for entropy")
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        if dest.len() > self.remaining {
            return Err(rand::Error::new(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                "getrandom: not enough entropy",
            )));
        }
        self.remaining -= dest.len();
        dest.fill(0x11);
        Ok(())
    }
}

impl CryptoRng for FlakyRng {}

// ============================================================================
// 1. Entropy Failure
// ============================================================================

#[test]
fn test_entropy_failure_yields_no_phrase() {
    for word_count in [WordCount::Twelve, WordCount::TwentyFour] {
        let mut rng = FlakyRng { remaining: 0 };
        let result = generate_phrase_with(&mut rng, word_count);

        let err = result.expect_err("no phrase may come from a failed draw");
        assert!(err.is_fatal());
        assert!(matches!(err, SeedError::EntropyUnavailable(_)));
    }
}

#[test]
fn test_partial_entropy_is_not_used() {
    // Enough for 12 words but not 24: the 24-word draw must fail outright
    // rather than pad or shorten.
    let mut rng = FlakyRng { remaining: 16 };
    let result = generate_phrase_with(&mut rng, WordCount::TwentyFour);
    assert!(matches!(result, Err(SeedError::EntropyUnavailable(_))));
}

#[test]
fn test_entropy_source_is_single_draw() {
    // Exactly one 16-byte request for a 12-word phrase
    let mut rng = FlakyRng { remaining: 16 };
    let phrase = generate_phrase_with(&mut rng, WordCount::Twelve).unwrap();
    assert_eq!(phrase.len(), 12);
    assert_eq!(rng.remaining, 0);
}

// ============================================================================
// 2. Secret Hygiene
// ============================================================================

#[test]
fn test_entropy_debug_does_not_leak() {
    let entropy = Entropy::from_bytes(&[0x7Fu8; 32]).unwrap();
    let debug = format!("{:?}", entropy);
    assert!(!debug.contains("127"));
    assert!(!debug.to_lowercase().contains("7f"));
}

#[test]
fn test_phrase_debug_does_not_leak() {
    let phrase = encode(&Entropy::from_bytes(&[0x7Fu8; 16]).unwrap());
    let debug = format!("{:?}", phrase);
    for word in phrase.words() {
        assert!(!debug.contains(word), "{} leaked in {}", word, debug);
    }
}

#[test]
fn test_phrase_zeroize_clears_indices() {
    let mut phrase = encode(&Entropy::from_bytes(&[0xFFu8; 16]).unwrap());
    assert!(phrase.indices().iter().any(|&i| i != 0));

    phrase.zeroize();
    assert!(phrase.indices().iter().all(|&i| i == 0));
}

#[test]
fn test_rendered_phrase_is_zeroizing() {
    let phrase = encode(&Entropy::from_bytes(&[0u8; 16]).unwrap());
    let mut rendered = phrase.to_phrase();
    assert!(rendered.starts_with("abandon"));

    rendered.zeroize();
    assert!(rendered.is_empty());
}

// ============================================================================
// 3. Malformed Inputs
// ============================================================================

#[test]
fn test_invalid_entropy_lengths_rejected() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let len = rng.gen_range(0..=128);
        let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

        match Entropy::from_bytes(&bytes) {
            Ok(entropy) => {
                assert!(len == 16 || len == 32);
                assert_eq!(encode(&entropy).len(), len * 3 / 4);
            }
            Err(SeedError::InvalidEntropyLength(l)) => assert_eq!(l, len),
            Err(other) => panic!("unexpected error {}", other),
        }
    }
}

#[test]
fn test_unsupported_word_counts_rejected() {
    for n in [0usize, 10, 16, 15, 18, 21, 23, 25, usize::MAX] {
        assert_eq!(
            WordCount::try_from(n),
            Err(ConfigError::UnsupportedWordCount(n))
        );
    }
}

// ============================================================================
// 4. Randomized Generation
// ============================================================================

#[test]
fn test_random_phrases_pass_independent_validation() {
    for word_count in [WordCount::Twelve, WordCount::TwentyFour] {
        for _ in 0..250 {
            let phrase = generate_phrase(word_count).unwrap();
            let text = phrase.to_phrase();
            let parsed = bip39::Mnemonic::parse_in(bip39::Language::English, text.as_str())
                .expect("generated phrase failed checksum validation");
            assert_eq!(parsed.word_count(), word_count.words());
        }
    }
}

#[test]
fn test_corrupted_last_word_is_caught() {
    // A single swapped word in the checksum position must be detectable
    let mut rng = rand::thread_rng();
    let mut detected = 0;
    let trials = 500;

    for _ in 0..trials {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        let phrase = encode(&Entropy::from_bytes(&bytes).unwrap());

        let mut words: Vec<&str> = phrase.words().collect();
        let replacement = loop {
            let candidate = bip39::Language::English.word_list()[rng.gen_range(0..2048)];
            if candidate != words[11] {
                break candidate;
            }
        };
        words[11] = replacement;

        if bip39::Mnemonic::parse_in(bip39::Language::English, words.join(" ")).is_err() {
            detected += 1;
        }
    }

    // 4-bit checksum: a random replacement slips through 1 time in 16
    assert!(detected * 100 > trials * 85, "detected {}/{}", detected, trials);
}
