use crate::alphabet::Alphabet;
use crate::checkerboard::{build_checkerboard_from, Checkerboard};
use crate::config::VicConfig;
use crate::error::Result;
use crate::keys::{generate_key_set, KeyLengths, KeySet};
use crate::pipeline::{
    apply_numeric_stage, defractionate, fractionate, straddle, transpose, unstraddle,
    untranspose, Direction, NumericKey, TranspositionKey,
};
use crate::square::{build_square_from, PolybiusSquare};

/// Everything one encrypt or decrypt call needs, built from keys and config
///
/// Construction validates every key and setting, so a call either fails
/// before any stage runs or produces its whole output.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub alphabet: Alphabet,
    pub square: PolybiusSquare,
    pub checkerboard: Checkerboard,
    pub transposition: TranspositionKey,
    pub numeric: NumericKey,
    pub passes: u8,
    pub chain_addition: bool,
}

impl PipelineContext {
    pub fn new(keys: &KeySet, config: &VicConfig) -> Result<Self> {
        config.validate()?;
        keys.validate()?;

        let alphabet = Alphabet::resolve(config.alphabet.as_deref(), config.language)?;
        let square = build_square_from(
            config.square_type,
            Some(&keys.polybius),
            &alphabet,
            config.mono_params.as_ref(),
        )?;
        let checkerboard = build_checkerboard_from(&keys.checkerboard, &alphabet)?;

        Ok(Self {
            transposition: TranspositionKey::new(&keys.transposition)?,
            numeric: NumericKey::new(&keys.numeric)?,
            alphabet,
            square,
            checkerboard,
            passes: config.passes,
            chain_addition: config.chain_addition,
        })
    }

    /// Square -> checkerboard -> transposition -> numeric addition
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        if plaintext.is_empty() {
            return Ok(String::new());
        }

        let digits = fractionate(plaintext, &self.square)?;
        let letters = straddle(&digits, &self.checkerboard)?;
        let shuffled = transpose(&letters, &self.transposition, self.passes);
        let cipher = apply_numeric_stage(
            &shuffled,
            &self.numeric,
            &self.alphabet,
            Direction::Encrypt,
            self.chain_addition,
        )?;

        tracing::debug!(
            plain = plaintext.chars().count(),
            cipher = cipher.len(),
            passes = self.passes,
            chain = self.chain_addition,
            "encrypted"
        );
        Ok(cipher.into_iter().collect())
    }

    /// The exact mirror of [`PipelineContext::encrypt`]
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        if ciphertext.is_empty() {
            return Ok(String::new());
        }

        let cipher: Vec<char> = ciphertext.chars().collect();
        let shuffled = apply_numeric_stage(
            &cipher,
            &self.numeric,
            &self.alphabet,
            Direction::Decrypt,
            self.chain_addition,
        )?;
        let letters = untranspose(&shuffled, &self.transposition, self.passes);
        let digits = unstraddle(&letters, &self.checkerboard)?;
        let plaintext = defractionate(&digits, &self.square)?;

        tracing::debug!(
            cipher = cipher.len(),
            plain = plaintext.chars().count(),
            passes = self.passes,
            chain = self.chain_addition,
            "decrypted"
        );
        Ok(plaintext)
    }
}

/// Encrypt `plaintext` with the four keys
pub fn encrypt(plaintext: &str, keys: &KeySet, config: &VicConfig) -> Result<String> {
    PipelineContext::new(keys, config)?.encrypt(plaintext)
}

/// Decrypt `ciphertext` with the keys and config used to encrypt it
pub fn decrypt(ciphertext: &str, keys: &KeySet, config: &VicConfig) -> Result<String> {
    PipelineContext::new(keys, config)?.decrypt(ciphertext)
}

/// Generate a fresh key set of default lengths and encrypt with it
pub fn encrypt_with_random_keys(plaintext: &str, config: &VicConfig) -> Result<(String, KeySet)> {
    let keys = generate_key_set(&KeyLengths::default())?;
    let ciphertext = encrypt(plaintext, &keys, config)?;
    Ok((ciphertext, keys))
}
