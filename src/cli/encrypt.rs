use crate::cli::options::{ConfigOverrides, KeySource};
use crate::error::Result;
use crate::keys::KeySet;
use crate::vic::{encrypt, encrypt_with_random_keys};

/// Options for the encrypt command
#[derive(Debug, Clone, Default)]
pub struct EncryptOptions {
    pub keys: KeySource,
    pub config: ConfigOverrides,
}

/// Ciphertext plus the keys that were generated for it, if any
#[derive(Debug, Clone)]
pub struct EncryptOutcome {
    pub ciphertext: String,
    pub generated_keys: Option<KeySet>,
}

/// Encrypt a message; with no keys given a fresh key set is generated
pub fn encrypt_message(plaintext: &str, options: &EncryptOptions) -> Result<EncryptOutcome> {
    let config = options.config.resolve()?;

    match options.keys.resolve()? {
        Some(keys) => Ok(EncryptOutcome {
            ciphertext: encrypt(plaintext, &keys, &config)?,
            generated_keys: None,
        }),
        None => {
            let (ciphertext, keys) = encrypt_with_random_keys(plaintext, &config)?;
            tracing::info!(fingerprint = %keys.fingerprint(), "no keys given, generated a key set");
            Ok(EncryptOutcome {
                ciphertext,
                generated_keys: Some(keys),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::decrypt::{decrypt_message, DecryptOptions};
    use crate::config::SquareType;

    fn overrides() -> ConfigOverrides {
        ConfigOverrides {
            square_type: Some(SquareType::Keyword),
            alphabet: Some("ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_encrypt_with_flags() {
        let options = EncryptOptions {
            keys: KeySource {
                polybius: Some("SECRET".into()),
                checkerboard: Some("KEYWORD".into()),
                transposition: Some("CIPHER".into()),
                numeric: Some("123456".into()),
                ..Default::default()
            },
            config: overrides(),
        };
        let outcome = encrypt_message("HELLO", &options).unwrap();
        assert_eq!(outcome.ciphertext, "IUVOK2");
        assert!(outcome.generated_keys.is_none());
    }

    #[test]
    fn test_encrypt_generates_keys() {
        let options = EncryptOptions {
            config: overrides(),
            ..Default::default()
        };
        let outcome = encrypt_message("ATTACKATDAWN", &options).unwrap();
        let keys = outcome.generated_keys.unwrap();

        let decrypt_options = DecryptOptions {
            keys: KeySource {
                polybius: Some(keys.polybius),
                checkerboard: Some(keys.checkerboard),
                transposition: Some(keys.transposition),
                numeric: Some(keys.numeric),
                ..Default::default()
            },
            config: overrides(),
        };
        assert_eq!(
            decrypt_message(&outcome.ciphertext, &decrypt_options).unwrap(),
            "ATTACKATDAWN"
        );
    }
}
