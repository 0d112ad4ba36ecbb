use crate::error::Result;
use crate::keys::{generate_key_set, KeyLengths, KeySet};
use std::path::PathBuf;

/// Options for the keygen command
#[derive(Debug, Clone, Default)]
pub struct KeygenOptions {
    /// Derive the keys from this passphrase instead of at random
    pub passphrase: Option<String>,
    pub lengths: KeyLengths,
    /// Also write the key set to this file
    pub out: Option<PathBuf>,
}

/// Generate a key set and report it as JSON plus its fingerprint
pub fn generate_keys(options: &KeygenOptions) -> Result<String> {
    let keys = match &options.passphrase {
        Some(passphrase) => KeySet::derive(passphrase, &options.lengths)?,
        None => generate_key_set(&options.lengths)?,
    };

    if let Some(path) = &options.out {
        keys.save(path)?;
        tracing::info!(path = %path.display(), "wrote key set");
    }

    let mut output = keys.to_json()?;
    output.push('\n');
    output.push_str(&format!("Fingerprint: {}\n", keys.fingerprint()));
    Ok(output)
}
