use crate::alphabet::Language;
use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lowest and highest supported number of transposition passes
pub const MIN_PASSES: u8 = 1;
pub const MAX_PASSES: u8 = 3;

/// Polybius square layout options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SquareType {
    #[default]
    Standard,
    Keyword,
    Caesar,
    Atbash,
    Affine,
}

impl std::str::FromStr for SquareType {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "keyword" => Ok(Self::Keyword),
            "caesar" => Ok(Self::Caesar),
            "atbash" => Ok(Self::Atbash),
            "affine" => Ok(Self::Affine),
            _ => Err(CipherError::ConfigurationError(format!(
                "unsupported square type: {}",
                s
            ))),
        }
    }
}

/// Parameters for the monoalphabetic square variants
///
/// Serialized untagged, so `{"shift": 3}`, `{"a": 5, "b": 8}` and
/// `{"keyword": "zebra"}` all parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MonoParams {
    Shift { shift: i64 },
    Affine { a: i64, b: i64 },
    Keyword { keyword: String },
}

impl MonoParams {
    /// Parse parameters from their JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        parse_settings(json, "mono params")
    }
}

/// Shared pipeline configuration (everything except the four keys)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VicConfig {
    /// Polybius square layout
    pub square_type: SquareType,
    /// Custom alphabet; the language default is used when absent
    pub alphabet: Option<String>,
    /// Language selecting the default alphabet
    pub language: Language,
    /// Parameters for caesar/affine/keyword squares
    pub mono_params: Option<MonoParams>,
    /// Number of columnar transposition passes (1-3)
    pub passes: u8,
    /// Use self-referential chain addition instead of a repeating key
    pub chain_addition: bool,
}

impl Default for VicConfig {
    fn default() -> Self {
        Self {
            square_type: SquareType::default(),
            alphabet: None,
            language: Language::default(),
            mono_params: None,
            passes: MIN_PASSES,
            chain_addition: false,
        }
    }
}

impl VicConfig {
    /// Check the settings that do not depend on keys or alphabet contents
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PASSES..=MAX_PASSES).contains(&self.passes) {
            return Err(CipherError::ConfigurationError(format!(
                "transposition passes must be between {} and {}, got {}",
                MIN_PASSES, MAX_PASSES, self.passes
            )));
        }
        Ok(())
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = parse_settings(json, "configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Well-formed JSON carrying unknown names or wrong shapes is a
/// configuration error; malformed JSON stays a `Json` error
fn parse_settings<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| {
        if e.is_data() {
            CipherError::ConfigurationError(format!("invalid {}: {}", what, e))
        } else {
            CipherError::Json(e)
        }
    })
}
