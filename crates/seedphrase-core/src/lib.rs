//! seedphrase core
//!
//! Turns fresh random entropy into a BIP-39 mnemonic sentence.
//!
//! # Encoding
//!
//! - 12 words: 128 bits of entropy + 4-bit SHA-256 checksum = 132 bits
//! - 24 words: 256 bits of entropy + 8-bit SHA-256 checksum = 264 bits
//!
//! The combined stream is cut into 11-bit groups, each one an index into
//! the 2048-word English list. The stream is never materialised: entropy is
//! loaded into 64-bit limbs and shifted right across them, emitting the
//! last word first.
//!
//! # Example
//!
//! ```
//! use seedphrase_core::{encode, Entropy};
//!
//! let entropy = Entropy::from_bytes(&[0u8; 16]).unwrap();
//! let phrase = encode(&entropy);
//! assert_eq!(
//!     phrase.to_string(),
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
//! );
//! ```

pub mod checksum;
pub mod encoder;
pub mod entropy;
pub mod limbs;
pub mod memory;
pub mod seed;
pub mod wordlist;

pub use checksum::{checksum, checksum_bytes};
pub use encoder::{encode, encode_indices, generate_phrase, generate_phrase_with, SeedPhrase};
pub use entropy::Entropy;
pub use seed::{ConfigError, SeedError, WordCount};
