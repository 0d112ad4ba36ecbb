use crate::checkerboard::{BoardCode, Checkerboard, PAD_DIGIT};
use crate::error::{CipherError, Result};

/// Re-encode a digit stream as board characters
///
/// Greedy left to right: a prefix digit consumes the next digit as its
/// column, any other digit is a row-0 code. A prefix digit with nothing after
/// it takes [`PAD_DIGIT`] as its column.
pub fn straddle(digits: &[u8], board: &Checkerboard) -> Result<Vec<char>> {
    let mut letters = Vec::with_capacity(digits.len());
    let mut i = 0;

    while i < digits.len() {
        let digit = digits[i];
        let c = if board.is_prefix(digit) {
            let col = match digits.get(i + 1) {
                Some(&col) => {
                    i += 2;
                    col
                }
                None => {
                    i += 1;
                    PAD_DIGIT
                }
            };
            board.double(digit, col).ok_or_else(|| missing_code(col))?
        } else {
            i += 1;
            board.single(digit).ok_or_else(|| missing_code(digit))?
        };
        letters.push(c);
    }

    tracing::debug!(digits = digits.len(), letters = letters.len(), "straddled");
    Ok(letters)
}

/// Expand board characters back into their digit codes
///
/// An odd total means the last code carried the end-of-stream pad, which is
/// dropped again. Any other odd stream cannot have come from [`straddle`].
pub fn unstraddle(letters: &[char], board: &Checkerboard) -> Result<Vec<u8>> {
    let mut digits = Vec::with_capacity(letters.len() * 2);
    let mut last = None;

    for &c in letters {
        let code = board.code(c).ok_or(CipherError::LookupError {
            character: c,
            table: "straddling checkerboard",
        })?;
        code.push_digits(&mut digits);
        last = Some(code);
    }

    if digits.len() % 2 != 0 {
        match last {
            Some(BoardCode::Double(_, PAD_DIGIT)) => {
                digits.pop();
            }
            _ => {
                return Err(CipherError::AmbiguityError(format!(
                    "{} digits decoded and the final code is not a padded prefix",
                    digits.len()
                )))
            }
        }
    }

    tracing::debug!(letters = letters.len(), digits = digits.len(), "unstraddled");
    Ok(digits)
}

fn missing_code(digit: u8) -> CipherError {
    CipherError::LookupError {
        character: char::from_digit(digit as u32, 10).unwrap_or('?'),
        table: "straddling checkerboard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Language;
    use crate::checkerboard::build_checkerboard;

    fn board() -> Checkerboard {
        build_checkerboard(
            "KEYWORD",
            Some("ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"),
            Language::English,
        )
        .unwrap()
    }

    fn text(letters: &[char]) -> String {
        letters.iter().collect()
    }

    #[test]
    fn test_straddle_hello_digits() {
        let letters = straddle(&[1, 4, 0, 1, 2, 2, 2, 2, 2, 5], &board()).unwrap();
        assert_eq!(text(&letters), "HKFSSW");
    }

    #[test]
    fn test_unstraddle_hello() {
        let letters: Vec<char> = "HKFSSW".chars().collect();
        assert_eq!(
            unstraddle(&letters, &board()).unwrap(),
            vec![1, 4, 0, 1, 2, 2, 2, 2, 2, 5]
        );
    }

    #[test]
    fn test_trailing_prefix_is_padded() {
        let board = board();
        let letters = straddle(&[0, 3, 2], &board).unwrap();
        // 0 -> K, 3 -> E, lone 2 -> 20 -> P
        assert_eq!(text(&letters), "KEP");
        assert_eq!(unstraddle(&letters, &board).unwrap(), vec![0, 3, 2]);
    }

    #[test]
    fn test_single_digit_codes() {
        let letters = straddle(&[0, 3, 4, 5], &board()).unwrap();
        assert_eq!(text(&letters), "KEYW");
    }

    #[test]
    fn test_unpadded_odd_stream_is_ambiguous() {
        // K, E and Y are single-digit codes: three digits and no pad
        let letters: Vec<char> = "KEY".chars().collect();
        let err = unstraddle(&letters, &board()).unwrap_err();
        assert!(matches!(err, CipherError::AmbiguityError(_)));
    }

    #[test]
    fn test_unknown_letter() {
        let letters: Vec<char> = "K9".chars().collect();
        let err = unstraddle(&letters, &board()).unwrap_err();
        assert!(matches!(
            err,
            CipherError::LookupError { character: '9', .. }
        ));
    }

    #[test]
    fn test_empty_stream() {
        assert!(straddle(&[], &board()).unwrap().is_empty());
        assert!(unstraddle(&[], &board()).unwrap().is_empty());
    }
}
