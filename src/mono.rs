//! Monoalphabetic transforms applied to a whole alphabet before it is laid
//! out as a square.
//!
//! Each transform works in index space, so it applies to any alphabet
//! (digits and non-Latin letters included) and always yields a permutation.

use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};

/// Rotate the alphabet: `out[i] = A[(i + shift) mod n]`
pub fn caesar(alphabet: &Alphabet, shift: i64) -> Vec<char> {
    let n = alphabet.len() as i64;
    let shift = shift.rem_euclid(n);
    (0..n)
        .map(|i| alphabet.char_at((i + shift).rem_euclid(n) as usize))
        .collect()
}

/// Reverse the alphabet
pub fn atbash(alphabet: &Alphabet) -> Vec<char> {
    alphabet.chars().iter().rev().copied().collect()
}

/// Affine map: `out[i] = A[(a*i + b) mod n]`
///
/// `a` must be coprime with the alphabet length or the map is not a
/// permutation.
pub fn affine(alphabet: &Alphabet, a: i64, b: i64) -> Result<Vec<char>> {
    let n = alphabet.len() as i64;
    let (a, b) = (a.rem_euclid(n), b.rem_euclid(n));
    if gcd(a, n) != 1 {
        return Err(CipherError::ConfigurationError(format!(
            "affine multiplier {} must be coprime with alphabet length {}",
            a, n
        )));
    }
    Ok((0..n)
        .map(|i| alphabet.char_at((a * i + b).rem_euclid(n) as usize))
        .collect())
}

fn gcd(mut x: i64, mut y: i64) -> i64 {
    while y != 0 {
        let t = y;
        y = x % y;
        x = t;
    }
    x.abs()
}
