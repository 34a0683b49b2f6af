//! BIP-39 English wordlist (2048 words, 11 bits per word)
//!
//! The list is the standardized one shipped with the `bip39` crate and is
//! compiled into the binary in full.

use bip39::Language;

/// Number of words in the list (2^11)
pub const WORDLIST_SIZE: usize = 2048;

/// The complete ordered wordlist.
pub fn wordlist() -> &'static [&'static str; WORDLIST_SIZE] {
    Language::English.word_list()
}

/// Look up a word by its 11-bit index.
pub fn index_to_word(index: u16) -> Option<&'static str> {
    wordlist().get(usize::from(index)).copied()
}

/// Look up the index of a word.
pub fn word_to_index(word: &str) -> Option<u16> {
    Language::English.find_word(word)
}
