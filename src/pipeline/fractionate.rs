use crate::error::{CipherError, Result};
use crate::square::{PolybiusSquare, SQUARE_LABELS};

/// Replace every character with its (row, column) label pair
pub fn substitute(text: &str, square: &PolybiusSquare) -> Result<String> {
    let mut labels = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        let (row, col) = square.position(c).ok_or(CipherError::LookupError {
            character: c,
            table: "polybius square",
        })?;
        labels.push(SQUARE_LABELS[row]);
        labels.push(SQUARE_LABELS[col]);
    }
    Ok(labels)
}

/// Read label pairs back through the square
pub fn unsubstitute(labels: &str, square: &PolybiusSquare) -> Result<String> {
    let digits = labels_to_digits(labels)?;
    defractionate(&digits, square)
}

/// Label index (0-5) of each label
pub fn labels_to_digits(labels: &str) -> Result<Vec<u8>> {
    labels
        .chars()
        .map(|c| {
            SQUARE_LABELS
                .iter()
                .position(|&label| label == c.to_ascii_uppercase())
                .map(|i| i as u8)
                .ok_or(CipherError::LookupError {
                    character: c,
                    table: "fractionation labels",
                })
        })
        .collect()
}

/// Label for each digit (0-5)
pub fn digits_to_labels(digits: &[u8]) -> Result<String> {
    digits.iter().map(|&d| label_for(d)).collect()
}

/// Substitute and flatten straight to the digit stream
pub fn fractionate(text: &str, square: &PolybiusSquare) -> Result<Vec<u8>> {
    let digits = labels_to_digits(&substitute(text, square)?)?;
    tracing::debug!(chars = text.chars().count(), digits = digits.len(), "fractionated");
    Ok(digits)
}

/// Rebuild text from a digit stream read as fixed (row, column) pairs
pub fn defractionate(digits: &[u8], square: &PolybiusSquare) -> Result<String> {
    if digits.len() % 2 != 0 {
        return Err(CipherError::AmbiguityError(format!(
            "{} digits cannot be split into (row, column) pairs",
            digits.len()
        )));
    }

    let mut text = String::with_capacity(digits.len() / 2);
    for pair in digits.chunks_exact(2) {
        let c = square
            .char_at(pair[0] as usize, pair[1] as usize)
            .ok_or(CipherError::LookupError {
                character: char::from_digit(pair[0].max(pair[1]) as u32, 10).unwrap_or('?'),
                table: "fractionation labels",
            })?;
        text.push(c);
    }
    tracing::debug!(digits = digits.len(), chars = digits.len() / 2, "defractionated");
    Ok(text)
}

fn label_for(digit: u8) -> Result<char> {
    SQUARE_LABELS
        .get(digit as usize)
        .copied()
        .ok_or(CipherError::LookupError {
            character: char::from_digit(digit as u32, 10).unwrap_or('?'),
            table: "fractionation labels",
        })
}
