use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};
use crate::pipeline::Direction;
use std::collections::VecDeque;

/// Cyclic sequence of decimal shift digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericKey {
    digits: Vec<u8>,
}

impl NumericKey {
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::KeyError("numeric key is empty".into()));
        }
        let digits = key
            .chars()
            .map(|c| {
                c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                    CipherError::KeyError(format!(
                        "numeric key contains non-digit character {:?}",
                        c
                    ))
                })
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { digits })
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Shift for position `i` in static mode
    pub fn shift_at(&self, i: usize) -> u8 {
        self.digits[i % self.digits.len()]
    }
}

/// Self-referential keystream for chain addition
///
/// Seeded with the numeric key. Each call to `next` yields the leading digit
/// and drops it; [`ChainKeystream::feed`] appends the digit derived from the
/// ciphertext character just produced (encrypt) or just consumed (decrypt),
/// so both directions see the same buffer.
#[derive(Debug, Clone)]
pub struct ChainKeystream {
    buffer: VecDeque<u8>,
}

impl ChainKeystream {
    pub fn new(key: &NumericKey) -> Self {
        Self {
            buffer: key.digits().iter().copied().collect(),
        }
    }

    /// Append the feedback digit for a ciphertext alphabet index
    pub fn feed(&mut self, cipher_index: usize) {
        self.buffer.push_back((cipher_index % 10) as u8);
    }
}

impl Iterator for ChainKeystream {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.buffer.pop_front()
    }
}

/// Shift every character by the repeating key, modulo the alphabet length
pub fn add_numeric_key(
    text: &[char],
    key: &NumericKey,
    alphabet: &Alphabet,
    direction: Direction,
) -> Result<Vec<char>> {
    let n = alphabet.len();
    let out = text
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let index = alphabet_index(alphabet, c)?;
            Ok(alphabet.char_at(shift(index, key.shift_at(i), n, direction)))
        })
        .collect::<Result<Vec<char>>>()?;
    tracing::debug!(len = out.len(), ?direction, "applied numeric key");
    Ok(out)
}

/// Chain addition: the keystream is fed with ciphertext as it goes
///
/// Decryption must run strictly in order, since each shift depends on
/// ciphertext that appears one key length earlier.
pub fn chain_addition(
    text: &[char],
    key: &NumericKey,
    alphabet: &Alphabet,
    direction: Direction,
) -> Result<Vec<char>> {
    let n = alphabet.len();
    let mut keystream = ChainKeystream::new(key);
    let mut out = Vec::with_capacity(text.len());

    for &c in text {
        let index = alphabet_index(alphabet, c)?;
        let digit = keystream
            .next()
            .ok_or_else(|| CipherError::KeyError("chain keystream exhausted".into()))?;
        let shifted = shift(index, digit, n, direction);
        keystream.feed(match direction {
            Direction::Encrypt => shifted,
            Direction::Decrypt => index,
        });
        out.push(alphabet.char_at(shifted));
    }

    tracing::debug!(len = out.len(), ?direction, "applied chain addition");
    Ok(out)
}

/// Dispatch to chain or static addition
pub fn apply_numeric_stage(
    text: &[char],
    key: &NumericKey,
    alphabet: &Alphabet,
    direction: Direction,
    chain: bool,
) -> Result<Vec<char>> {
    if chain {
        chain_addition(text, key, alphabet, direction)
    } else {
        add_numeric_key(text, key, alphabet, direction)
    }
}

fn alphabet_index(alphabet: &Alphabet, c: char) -> Result<usize> {
    alphabet.index_of(c).ok_or(CipherError::LookupError {
        character: c,
        table: "alphabet",
    })
}

fn shift(index: usize, digit: u8, n: usize, direction: Direction) -> usize {
    let digit = digit as usize % n;
    match direction {
        Direction::Encrypt => (index + digit) % n,
        Direction::Decrypt => (index + n - digit) % n,
    }
}
