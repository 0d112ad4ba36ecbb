//! VIC cipher - a composite Cold War hand cipher
//!
//! Plaintext is fractionated through a keyed 6x6 Polybius square, the digit
//! stream is re-encoded through a straddling checkerboard, the resulting
//! letters are shuffled by columnar transposition and finally shifted by a
//! numeric key. Decryption runs the exact mirror.
//!
//! ## Pipeline
//!
//! ```text
//! Plaintext → Polybius (ADFGVX pairs) → Checkerboard → Transposition ×N → Numeric addition → Ciphertext
//! ```
//!
//! - **Polybius**: standard, keyword, caesar, atbash or affine layout
//! - **Checkerboard**: row prefixes 1 and 2, greedy two-digit-first parsing
//! - **Transposition**: 1 to 3 passes with the same key
//! - **Numeric addition**: repeating key, or chain addition fed by ciphertext
//!
//! Each stage has its own key; the four are bundled in a [`KeySet`].
//!
//! ## Example
//!
//! ```
//! use vic_cipher::{decrypt, encrypt, KeySet, SquareType, VicConfig};
//!
//! let keys = KeySet::new("SECRET", "KEYWORD", "CIPHER", "123456");
//! let config = VicConfig {
//!     square_type: SquareType::Keyword,
//!     alphabet: Some("ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".into()),
//!     ..Default::default()
//! };
//!
//! let cipher = encrypt("HELLO", &keys, &config).unwrap();
//! assert_eq!(cipher, "IUVOK2");
//! assert_eq!(decrypt(&cipher, &keys, &config).unwrap(), "HELLO");
//! ```

pub mod alphabet;
pub mod checkerboard;
pub mod cli;
pub mod config;
pub mod error;
pub mod keys;
pub mod mono;
pub mod pipeline;
pub mod square;
pub mod vic;

pub use alphabet::{Alphabet, Language};
pub use checkerboard::{build_checkerboard, Checkerboard};
pub use config::{MonoParams, SquareType, VicConfig};
pub use error::{CipherError, Result};
pub use keys::{generate_key_set, KeyLengths, KeySet};
pub use square::{build_polybius_square, PolybiusSquare};
pub use vic::{decrypt, encrypt, encrypt_with_random_keys, PipelineContext};
