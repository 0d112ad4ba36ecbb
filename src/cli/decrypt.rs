use crate::cli::options::{ConfigOverrides, KeySource};
use crate::error::{CipherError, Result};
use crate::vic::decrypt;

/// Options for the decrypt command
#[derive(Debug, Clone, Default)]
pub struct DecryptOptions {
    pub keys: KeySource,
    pub config: ConfigOverrides,
}

/// Decrypt a message; all four keys are required
pub fn decrypt_message(ciphertext: &str, options: &DecryptOptions) -> Result<String> {
    let config = options.config.resolve()?;
    let keys = options
        .keys
        .resolve()?
        .ok_or_else(|| CipherError::KeyError("decryption needs all four keys".into()))?;
    decrypt(ciphertext, &keys, &config)
}
