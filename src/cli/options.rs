use crate::alphabet::Language;
use crate::config::{MonoParams, SquareType, VicConfig};
use crate::error::{CipherError, Result};
use crate::keys::KeySet;
use std::path::PathBuf;

/// Where the four keys come from
///
/// A key file is read first; individual key flags override its entries.
#[derive(Debug, Clone, Default)]
pub struct KeySource {
    pub keys_file: Option<PathBuf>,
    pub polybius: Option<String>,
    pub checkerboard: Option<String>,
    pub transposition: Option<String>,
    pub numeric: Option<String>,
}

impl KeySource {
    pub fn is_empty(&self) -> bool {
        self.keys_file.is_none()
            && self.polybius.is_none()
            && self.checkerboard.is_none()
            && self.transposition.is_none()
            && self.numeric.is_none()
    }

    /// Assemble the key set, `None` when no key was given at all
    pub fn resolve(&self) -> Result<Option<KeySet>> {
        if self.is_empty() {
            return Ok(None);
        }

        let base = match &self.keys_file {
            Some(path) => Some(KeySet::load(path)?),
            None => None,
        };
        let pick = |flag: &Option<String>, from_file: Option<&String>, name: &str| {
            flag.clone()
                .or_else(|| from_file.cloned())
                .ok_or_else(|| CipherError::KeyError(format!("missing {} key", name)))
        };

        let keys = KeySet {
            polybius: pick(&self.polybius, base.as_ref().map(|k| &k.polybius), "polybius")?,
            checkerboard: pick(
                &self.checkerboard,
                base.as_ref().map(|k| &k.checkerboard),
                "checkerboard",
            )?,
            transposition: pick(
                &self.transposition,
                base.as_ref().map(|k| &k.transposition),
                "transposition",
            )?,
            numeric: pick(&self.numeric, base.as_ref().map(|k| &k.numeric), "numeric")?,
        };
        keys.validate()?;
        Ok(Some(keys))
    }
}

/// Command-line overrides on top of an optional config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub square_type: Option<SquareType>,
    pub alphabet: Option<String>,
    pub language: Option<Language>,
    /// JSON form of [`MonoParams`]
    pub mono_params: Option<String>,
    pub passes: Option<u8>,
    pub chain: bool,
}

impl ConfigOverrides {
    pub fn resolve(&self) -> Result<VicConfig> {
        let mut config = match &self.config_file {
            Some(path) => VicConfig::load(path)?,
            None => VicConfig::default(),
        };

        if let Some(square_type) = self.square_type {
            config.square_type = square_type;
        }
        if let Some(alphabet) = &self.alphabet {
            config.alphabet = Some(alphabet.clone());
        }
        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(json) = &self.mono_params {
            config.mono_params = Some(MonoParams::from_json(json)?);
        }
        if let Some(passes) = self.passes {
            config.passes = passes;
        }
        if self.chain {
            config.chain_addition = true;
        }

        config.validate()?;
        Ok(config)
    }
}
