use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// English letters followed by the ten digits (6x6 square)
pub const ENGLISH_WITH_DIGITS: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Standard Turkish letters followed by digits 0-6 (6x6 square)
pub const TURKISH_WITH_DIGITS: &str = "abcçdefgğhıijklmnoöprsştuüvyz0123456";

/// Language variant selecting the built-in alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Turkish,
}

impl Language {
    /// Built-in square alphabet for this language
    pub fn default_alphabet(self) -> &'static str {
        match self {
            Language::English => ENGLISH_WITH_DIGITS,
            Language::Turkish => TURKISH_WITH_DIGITS,
        }
    }

    /// Single-character lowercase form
    ///
    /// Turkish pairs dotless `I`/`ı` and dotted `İ`/`i`, which the
    /// locale-free mapping gets wrong.
    pub fn to_lower(self, c: char) -> Option<char> {
        match (self, c) {
            (Language::Turkish, 'I') => Some('ı'),
            (Language::Turkish, 'İ') => Some('i'),
            _ => fold_single(c.to_lowercase()),
        }
    }

    /// Single-character uppercase form
    pub fn to_upper(self, c: char) -> Option<char> {
        match (self, c) {
            (Language::Turkish, 'ı') => Some('I'),
            (Language::Turkish, 'i') => Some('İ'),
            _ => fold_single(c.to_uppercase()),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "turkish" | "tr" => Ok(Self::Turkish),
            _ => Err(CipherError::ConfigurationError(format!(
                "unsupported language: {}",
                s
            ))),
        }
    }
}

/// Ordered set of unique characters
///
/// Lookups try the exact character first and then its single-character
/// lowercase and uppercase forms under the alphabet's language, so `'H'`
/// finds `'h'` in a lowercase alphabet and a Turkish `'I'` finds `'ı'`.
/// Characters handed back out are always the alphabet's own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    index: HashMap<char, usize>,
    language: Language,
}

impl Alphabet {
    /// Build an alphabet from a string, rejecting duplicates
    pub fn new(symbols: &str) -> Result<Self> {
        Self::with_language(symbols, Language::default())
    }

    /// Build an alphabet whose lookups fold case the way `language` does
    pub fn with_language(symbols: &str, language: Language) -> Result<Self> {
        let chars: Vec<char> = symbols.chars().collect();
        if chars.is_empty() {
            return Err(CipherError::ConfigurationError("alphabet is empty".into()));
        }

        let mut index = HashMap::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            if index.insert(c, i).is_some() {
                return Err(CipherError::ConfigurationError(format!(
                    "alphabet contains duplicate character {:?}",
                    c
                )));
            }
        }

        Ok(Self {
            chars,
            index,
            language,
        })
    }

    /// Resolve an optional custom alphabet, falling back to the language default
    pub fn resolve(custom: Option<&str>, language: Language) -> Result<Self> {
        Self::with_language(custom.unwrap_or_else(|| language.default_alphabet()), language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character at `index`, wrapping modulo the alphabet length
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index % self.chars.len()]
    }

    /// Position of `c`, case-folded if the exact character is absent
    pub fn index_of(&self, c: char) -> Option<usize> {
        if let Some(&i) = self.index.get(&c) {
            return Some(i);
        }
        self.language
            .to_lower(c)
            .and_then(|lower| self.index.get(&lower))
            .or_else(|| {
                self.language
                    .to_upper(c)
                    .and_then(|upper| self.index.get(&upper))
            })
            .copied()
    }

    /// Canonical alphabet form of `c`
    pub fn canonical(&self, c: char) -> Option<char> {
        self.index_of(c).map(|i| self.chars[i])
    }

    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    /// Keyword characters (first occurrence, folded into the alphabet) followed
    /// by the remaining alphabet characters in order
    ///
    /// Keyword characters missing from the alphabet are skipped. The result is
    /// always a permutation of the whole alphabet.
    pub fn keyed(&self, keyword: &str) -> Vec<char> {
        let mut seen = vec![false; self.chars.len()];
        let mut sequence = Vec::with_capacity(self.chars.len());

        for i in keyword.chars().filter_map(|c| self.index_of(c)) {
            if !seen[i] {
                seen[i] = true;
                sequence.push(self.chars[i]);
            }
        }
        for (i, &c) in self.chars.iter().enumerate() {
            if !seen[i] {
                sequence.push(c);
            }
        }

        sequence
    }
}

fn fold_single(mut folded: impl Iterator<Item = char>) -> Option<char> {
    let first = folded.next()?;
    match folded.next() {
        Some(_) => None,
        None => Some(first),
    }
}
