use crate::error::{CipherError, Result};
use crate::pipeline::{NumericKey, TranspositionKey};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};
use std::path::Path;

/// Default length of every generated key
pub const DEFAULT_KEY_LENGTH: usize = 6;

/// The four independent secrets of one cipher run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySet {
    /// Keyword for the Polybius square
    pub polybius: String,
    /// Keyword for the straddling checkerboard
    pub checkerboard: String,
    /// Keyword ordering the transposition columns
    pub transposition: String,
    /// Decimal digits for the addition stage
    pub numeric: String,
}

impl KeySet {
    pub fn new(
        polybius: impl Into<String>,
        checkerboard: impl Into<String>,
        transposition: impl Into<String>,
        numeric: impl Into<String>,
    ) -> Self {
        Self {
            polybius: polybius.into(),
            checkerboard: checkerboard.into(),
            transposition: transposition.into(),
            numeric: numeric.into(),
        }
    }

    /// Reject empty keys, non-alphabetic keywords and non-digit numeric keys
    pub fn validate(&self) -> Result<()> {
        check_alphabetic("polybius", &self.polybius)?;
        check_alphabetic("checkerboard", &self.checkerboard)?;
        TranspositionKey::new(&self.transposition)?;
        NumericKey::new(&self.numeric)?;
        Ok(())
    }

    /// Deterministic key set from a passphrase
    pub fn derive(passphrase: &str, lengths: &KeyLengths) -> Result<Self> {
        let mut hasher = Sha3_256::new();
        hasher.update(b"vic_keyset_v1");
        hasher.update(passphrase.as_bytes());
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&hasher.finalize());

        let mut rng = StdRng::from_seed(seed);
        generate_with(&mut rng, lengths)
    }

    /// Hex SHA3-256 over the four keys
    ///
    /// Lets two parties confirm they hold the same set without reading the
    /// keys aloud.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha3_256::new();
        for key in [
            &self.polybius,
            &self.checkerboard,
            &self.transposition,
            &self.numeric,
        ] {
            hasher.update((key.len() as u64).to_le_bytes());
            hasher.update(key.as_bytes());
        }
        hex::encode(hasher.finalize())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a key set
    pub fn from_json(json: &str) -> Result<Self> {
        let keys: Self = serde_json::from_str(json)?;
        keys.validate()?;
        Ok(keys)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Lengths for generated keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLengths {
    pub polybius: usize,
    pub checkerboard: usize,
    pub transposition: usize,
    pub numeric: usize,
}

impl Default for KeyLengths {
    fn default() -> Self {
        Self {
            polybius: DEFAULT_KEY_LENGTH,
            checkerboard: DEFAULT_KEY_LENGTH,
            transposition: DEFAULT_KEY_LENGTH,
            numeric: DEFAULT_KEY_LENGTH,
        }
    }
}

impl KeyLengths {
    fn validate(&self) -> Result<()> {
        if self.polybius == 0 || self.checkerboard == 0 || self.transposition == 0 || self.numeric == 0 {
            return Err(CipherError::KeyError("key lengths must be at least 1".into()));
        }
        Ok(())
    }
}

/// Random key set: A-Z for the keywords, 0-9 for the numeric key
pub fn generate_key_set(lengths: &KeyLengths) -> Result<KeySet> {
    generate_with(&mut rand::thread_rng(), lengths)
}

fn generate_with<R: Rng + ?Sized>(rng: &mut R, lengths: &KeyLengths) -> Result<KeySet> {
    lengths.validate()?;
    let keys = KeySet {
        polybius: random_string(rng, lengths.polybius, b'A', b'Z'),
        checkerboard: random_string(rng, lengths.checkerboard, b'A', b'Z'),
        transposition: random_string(rng, lengths.transposition, b'A', b'Z'),
        numeric: random_string(rng, lengths.numeric, b'0', b'9'),
    };
    tracing::debug!(?lengths, "generated key set");
    Ok(keys)
}

fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize, low: u8, high: u8) -> String {
    (0..len).map(|_| rng.gen_range(low..=high) as char).collect()
}

fn check_alphabetic(name: &str, key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CipherError::KeyError(format!("{} key is empty", name)));
    }
    if let Some(c) = key.chars().find(|c| !c.is_alphabetic()) {
        return Err(CipherError::KeyError(format!(
            "{} key contains non-alphabetic character {:?}",
            name, c
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> KeySet {
        KeySet::new("SECRET", "KEYWORD", "CIPHER", "123456")
    }

    #[test]
    fn test_validate_accepts_sample() {
        sample().validate().unwrap();
        KeySet::new("çiçek", "ağaç", "ışık", "0").validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_keys() {
        let cases = [
            KeySet::new("", "KEYWORD", "CIPHER", "123456"),
            KeySet::new("SECRET", "KEY WORD", "CIPHER", "123456"),
            KeySet::new("SECRET", "KEYWORD", "C1PHER", "123456"),
            KeySet::new("SECRET", "KEYWORD", "CIPHER", "12x456"),
            KeySet::new("SECRET", "KEYWORD", "CIPHER", ""),
        ];
        for keys in cases {
            assert!(matches!(keys.validate(), Err(CipherError::KeyError(_))));
        }
    }

    #[test]
    fn test_generate_respects_lengths_and_charsets() {
        let lengths = KeyLengths {
            polybius: 4,
            checkerboard: 9,
            transposition: 12,
            numeric: 3,
        };
        let keys = generate_key_set(&lengths).unwrap();
        assert_eq!(keys.polybius.len(), 4);
        assert_eq!(keys.checkerboard.len(), 9);
        assert_eq!(keys.transposition.len(), 12);
        assert_eq!(keys.numeric.len(), 3);
        for key in [&keys.polybius, &keys.checkerboard, &keys.transposition] {
            assert!(key.chars().all(|c| c.is_ascii_uppercase()));
        }
        assert!(keys.numeric.chars().all(|c| c.is_ascii_digit()));
        keys.validate().unwrap();
    }

    #[test]
    fn test_zero_length_rejected() {
        let lengths = KeyLengths {
            numeric: 0,
            ..Default::default()
        };
        assert!(generate_key_set(&lengths).is_err());
    }

    #[test]
    fn test_derive_is_deterministic() {
        let lengths = KeyLengths::default();
        let a = KeySet::derive("correct horse", &lengths).unwrap();
        let b = KeySet::derive("correct horse", &lengths).unwrap();
        let c = KeySet::derive("battery staple", &lengths).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.numeric.len(), DEFAULT_KEY_LENGTH);
    }

    #[test]
    fn test_fingerprint() {
        let fp = sample().fingerprint();
        assert_eq!(fp.len(), 64);
        assert_eq!(fp, sample().fingerprint());
        assert_ne!(fp, KeySet::new("SECRET", "KEYWORD", "CIPHER", "123457").fingerprint());
        // Key boundaries are part of the digest
        assert_ne!(
            KeySet::new("AB", "C", "D", "1").fingerprint(),
            KeySet::new("A", "BC", "D", "1").fingerprint()
        );
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keys.json");
        sample().save(&path).unwrap();
        assert_eq!(KeySet::load(&path).unwrap(), sample());
    }

    #[test]
    fn test_from_json_validates() {
        let json = r#"{"polybius":"SECRET","checkerboard":"KEYWORD","transposition":"CIPHER","numeric":"12a"}"#;
        assert!(matches!(KeySet::from_json(json), Err(CipherError::KeyError(_))));
        assert!(matches!(KeySet::from_json("{}"), Err(CipherError::Json(_))));
    }
}
