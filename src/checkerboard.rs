use crate::alphabet::{Alphabet, Language};
use crate::error::{CipherError, Result};
use std::collections::HashMap;
use std::fmt;

/// Rows in the board
pub const BOARD_ROWS: usize = 3;

/// Columns per row, one per decimal digit
pub const BOARD_COLUMNS: usize = 10;

/// Minimum alphabet size accepted by the builder
pub const MIN_BOARD_ALPHABET: usize = 30;

/// Row-0 columns reserved as prefixes for rows 1 and 2
pub const ROW_PREFIXES: [u8; 2] = [1, 2];

/// Column appended after a prefix digit that ends the stream
pub const PAD_DIGIT: u8 = 0;

/// Variable-length digit code of a board character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardCode {
    Single(u8),
    Double(u8, u8),
}

impl BoardCode {
    pub fn push_digits(self, out: &mut Vec<u8>) {
        match self {
            BoardCode::Single(d) => out.push(d),
            BoardCode::Double(prefix, col) => {
                out.push(prefix);
                out.push(col);
            }
        }
    }
}

/// Straddling checkerboard
///
/// Row 0 holds single-digit codes. Its prefix columns stay empty, so a prefix
/// digit always starts a two-digit code. Rows 1 and 2 hold the codes
/// `1x` and `2x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkerboard {
    rows: [[Option<char>; BOARD_COLUMNS]; BOARD_ROWS],
    codes: HashMap<char, BoardCode>,
    alphabet: Option<Alphabet>,
}

impl Checkerboard {
    /// Build a board from an explicit layout
    ///
    /// Fails with `AmbiguityError` if row 0 occupies a prefix column and with
    /// `ConfigurationError` if a character appears twice.
    pub fn from_rows(rows: [[Option<char>; BOARD_COLUMNS]; BOARD_ROWS]) -> Result<Self> {
        for prefix in ROW_PREFIXES {
            if let Some(c) = rows[0][prefix as usize] {
                return Err(CipherError::AmbiguityError(format!(
                    "row 0 column {} holds {:?} but {} is a row prefix",
                    prefix, c, prefix
                )));
            }
        }

        let mut codes = HashMap::new();
        for (r, row) in rows.iter().enumerate() {
            for (col, cell) in row.iter().enumerate() {
                let Some(c) = *cell else { continue };
                let code = if r == 0 {
                    BoardCode::Single(col as u8)
                } else {
                    BoardCode::Double(ROW_PREFIXES[r - 1], col as u8)
                };
                if codes.insert(c, code).is_some() {
                    return Err(CipherError::ConfigurationError(format!(
                        "checkerboard contains {:?} twice",
                        c
                    )));
                }
            }
        }

        Ok(Self {
            rows,
            codes,
            alphabet: None,
        })
    }

    /// Character addressed by a single digit
    pub fn single(&self, digit: u8) -> Option<char> {
        if ROW_PREFIXES.contains(&digit) {
            return None;
        }
        self.rows[0].get(digit as usize).copied().flatten()
    }

    /// Character addressed by a prefix digit and column
    pub fn double(&self, prefix: u8, col: u8) -> Option<char> {
        let row = ROW_PREFIXES.iter().position(|&p| p == prefix)? + 1;
        self.rows[row].get(col as usize).copied().flatten()
    }

    pub fn is_prefix(&self, digit: u8) -> bool {
        ROW_PREFIXES.contains(&digit)
    }

    /// Digit code of `c`, case-folded through the source alphabet
    pub fn code(&self, c: char) -> Option<BoardCode> {
        let canonical = self
            .alphabet
            .as_ref()
            .and_then(|a| a.canonical(c))
            .unwrap_or(c);
        self.codes.get(&canonical).copied()
    }

    pub fn rows(&self) -> &[[Option<char>; BOARD_COLUMNS]; BOARD_ROWS] {
        &self.rows
    }

    /// Number of characters placed on the board
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl fmt::Display for Checkerboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_COLUMNS {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for (r, row) in self.rows.iter().enumerate() {
            if r == 0 {
                write!(f, " ")?;
            } else {
                write!(f, "{}", ROW_PREFIXES[r - 1])?;
            }
            for cell in row {
                write!(f, " {}", cell.unwrap_or('.'))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Build a straddling checkerboard from a keyword
///
/// The keyed alphabet fills the free row-0 columns, then row 1, then row 2.
pub fn build_checkerboard(
    keyword: &str,
    alphabet: Option<&str>,
    language: Language,
) -> Result<Checkerboard> {
    let alphabet = Alphabet::resolve(alphabet, language)?;
    build_checkerboard_from(keyword, &alphabet)
}

/// Build a checkerboard over an already resolved alphabet
pub fn build_checkerboard_from(keyword: &str, alphabet: &Alphabet) -> Result<Checkerboard> {
    if alphabet.len() < MIN_BOARD_ALPHABET {
        return Err(CipherError::ConfigurationError(format!(
            "alphabet has {} usable characters, a checkerboard needs {}",
            alphabet.len(),
            MIN_BOARD_ALPHABET
        )));
    }

    let slots = (0..BOARD_COLUMNS)
        .filter(|&col| !ROW_PREFIXES.contains(&(col as u8)))
        .map(|col| (0, col))
        .chain((1..BOARD_ROWS).flat_map(|r| (0..BOARD_COLUMNS).map(move |col| (r, col))));

    let mut rows = [[None; BOARD_COLUMNS]; BOARD_ROWS];
    for ((r, col), c) in slots.zip(alphabet.keyed(keyword)) {
        rows[r][col] = Some(c);
    }

    let mut board = Checkerboard::from_rows(rows)?;
    board.alphabet = Some(alphabet.clone());
    tracing::trace!(placed = board.len(), "built straddling checkerboard");
    Ok(board)
}
