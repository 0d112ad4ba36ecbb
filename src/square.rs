use crate::alphabet::{Alphabet, Language};
use crate::config::{MonoParams, SquareType};
use crate::error::{CipherError, Result};
use crate::mono;
use std::collections::HashMap;
use std::fmt;

/// Rows and columns of the square
pub const SQUARE_SIZE: usize = 6;

/// Characters held by a full square
pub const SQUARE_CELLS: usize = SQUARE_SIZE * SQUARE_SIZE;

/// Row/column line identifiers, index 0-5
pub const SQUARE_LABELS: [char; SQUARE_SIZE] = ['A', 'D', 'F', 'G', 'V', 'X'];

/// Keyword used by keyword squares when none is supplied
pub const DEFAULT_SQUARE_KEYWORD: &str = "SECRET";

/// Immutable 6x6 grid with a bijective character <-> (row, col) mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolybiusSquare {
    cells: [char; SQUARE_CELLS],
    positions: HashMap<char, usize>,
    alphabet: Alphabet,
}

impl PolybiusSquare {
    /// Lay out the first 36 characters of `sequence` row-major
    fn from_sequence(sequence: &[char], alphabet: Alphabet) -> Result<Self> {
        if sequence.len() < SQUARE_CELLS {
            return Err(CipherError::ConfigurationError(format!(
                "a {}x{} square needs {} characters, got {}",
                SQUARE_SIZE,
                SQUARE_SIZE,
                SQUARE_CELLS,
                sequence.len()
            )));
        }

        let mut cells = [' '; SQUARE_CELLS];
        let mut positions = HashMap::with_capacity(SQUARE_CELLS);
        for (i, &c) in sequence.iter().take(SQUARE_CELLS).enumerate() {
            if positions.insert(c, i).is_some() {
                return Err(CipherError::ConfigurationError(format!(
                    "square would contain {:?} twice",
                    c
                )));
            }
            cells[i] = c;
        }

        Ok(Self {
            cells,
            positions,
            alphabet,
        })
    }

    /// Coordinates of `c`, case-folded through the source alphabet
    pub fn position(&self, c: char) -> Option<(usize, usize)> {
        let canonical = self.alphabet.canonical(c).unwrap_or(c);
        self.positions
            .get(&canonical)
            .map(|&i| (i / SQUARE_SIZE, i % SQUARE_SIZE))
    }

    /// Character at `(row, col)`
    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        if row < SQUARE_SIZE && col < SQUARE_SIZE {
            Some(self.cells[row * SQUARE_SIZE + col])
        } else {
            None
        }
    }

    /// Row-major contents
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// One string per row
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(SQUARE_SIZE)
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl fmt::Display for PolybiusSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for label in SQUARE_LABELS {
            write!(f, " {}", label)?;
        }
        writeln!(f)?;
        for (label, row) in SQUARE_LABELS.iter().zip(self.cells.chunks(SQUARE_SIZE)) {
            write!(f, "{}", label)?;
            for c in row {
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Build a Polybius square
///
/// - `Standard` lays the alphabet out row-major.
/// - `Keyword` puts the deduplicated keyword first. The keyword is `keyword`,
///   else a `MonoParams::Keyword`, else [`DEFAULT_SQUARE_KEYWORD`].
/// - `Caesar`, `Atbash` and `Affine` transform the whole alphabet first and
///   take their numbers from `mono_params`.
pub fn build_polybius_square(
    square_type: SquareType,
    keyword: Option<&str>,
    alphabet: Option<&str>,
    mono_params: Option<&MonoParams>,
    language: Language,
) -> Result<PolybiusSquare> {
    let alphabet = Alphabet::resolve(alphabet, language)?;
    build_square_from(square_type, keyword, &alphabet, mono_params)
}

/// Build a square over an already resolved alphabet
pub fn build_square_from(
    square_type: SquareType,
    keyword: Option<&str>,
    alphabet: &Alphabet,
    mono_params: Option<&MonoParams>,
) -> Result<PolybiusSquare> {
    if alphabet.len() < SQUARE_CELLS {
        return Err(CipherError::ConfigurationError(format!(
            "alphabet has {} usable characters, a Polybius square needs {}",
            alphabet.len(),
            SQUARE_CELLS
        )));
    }

    let sequence = match (square_type, mono_params) {
        (SquareType::Standard, _) => alphabet.chars().to_vec(),
        (SquareType::Keyword, params) => {
            let keyword = keyword
                .or(match params {
                    Some(MonoParams::Keyword { keyword }) => Some(keyword.as_str()),
                    _ => None,
                })
                .unwrap_or(DEFAULT_SQUARE_KEYWORD);
            alphabet.keyed(keyword)
        }
        (SquareType::Caesar, Some(MonoParams::Shift { shift })) => mono::caesar(alphabet, *shift),
        (SquareType::Atbash, _) => mono::atbash(alphabet),
        (SquareType::Affine, Some(MonoParams::Affine { a, b })) => mono::affine(alphabet, *a, *b)?,
        (SquareType::Caesar, _) => {
            return Err(CipherError::ConfigurationError(
                "caesar square requires mono params {\"shift\": n}".into(),
            ))
        }
        (SquareType::Affine, _) => {
            return Err(CipherError::ConfigurationError(
                "affine square requires mono params {\"a\": n, \"b\": n}".into(),
            ))
        }
    };

    tracing::trace!(?square_type, "built polybius square");
    PolybiusSquare::from_sequence(&sequence, alphabet.clone())
}
