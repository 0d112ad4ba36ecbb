use crate::error::{CipherError, Result};

/// Keyword driving the columnar transposition
///
/// Columns are read in the stable ascending order of the (lowercased) key
/// characters, ties broken left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspositionKey {
    order: Vec<usize>,
}

impl TranspositionKey {
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::KeyError("transposition key is empty".into()));
        }
        if let Some(c) = key.chars().find(|c| !c.is_alphabetic()) {
            return Err(CipherError::KeyError(format!(
                "transposition key contains non-alphabetic character {:?}",
                c
            )));
        }

        let folded: Vec<char> = key
            .chars()
            .map(|c| c.to_lowercase().next().unwrap_or(c))
            .collect();
        let mut order: Vec<usize> = (0..folded.len()).collect();
        order.sort_by_key(|&i| folded[i]);

        Ok(Self { order })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.order.len()
    }

    /// Column indices in reading order
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Write row-major, read columns in key order
    pub fn encrypt_pass(&self, text: &[char]) -> Vec<char> {
        let width = self.width();
        let mut out = Vec::with_capacity(text.len());
        for &col in &self.order {
            out.extend(text.iter().skip(col).step_by(width));
        }
        out
    }

    /// Refill the columns in key order, read row-major
    pub fn decrypt_pass(&self, text: &[char]) -> Vec<char> {
        let width = self.width();
        let len = text.len();
        let full_rows = len / width;
        let remainder = len % width;

        // Columns left of the remainder carry one extra character
        let empty: &[char] = &[];
        let mut columns = vec![empty; width];
        let mut pos = 0;
        for &col in &self.order {
            let col_len = full_rows + usize::from(col < remainder);
            columns[col] = &text[pos..pos + col_len];
            pos += col_len;
        }

        let mut out = Vec::with_capacity(len);
        for row in 0..full_rows + usize::from(remainder > 0) {
            for column in &columns {
                if let Some(&c) = column.get(row) {
                    out.push(c);
                }
            }
        }
        out
    }
}

/// Apply `passes` encryption passes with the same key
pub fn transpose(text: &[char], key: &TranspositionKey, passes: u8) -> Vec<char> {
    let mut current = text.to_vec();
    for _ in 0..passes {
        current = key.encrypt_pass(&current);
    }
    tracing::debug!(len = current.len(), width = key.width(), passes, "transposed");
    current
}

/// Undo [`transpose`] with the same key and pass count
///
/// Every pass uses the identical key, so running the single-pass inverse
/// `passes` times undoes the passes in reverse order.
pub fn untranspose(text: &[char], key: &TranspositionKey, passes: u8) -> Vec<char> {
    let mut current = text.to_vec();
    for _ in 0..passes {
        current = key.decrypt_pass(&current);
    }
    tracing::debug!(len = current.len(), width = key.width(), passes, "untransposed");
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn text(letters: &[char]) -> String {
        letters.iter().collect()
    }

    #[test]
    fn test_key_order_is_stable() {
        assert_eq!(TranspositionKey::new("CIPHER").unwrap().order(), &[0, 4, 3, 1, 2, 5]);
        // Repeated letters keep their left-to-right order
        assert_eq!(TranspositionKey::new("BABA").unwrap().order(), &[1, 3, 0, 2]);
        // Case does not affect ordering
        assert_eq!(
            TranspositionKey::new("cIpHeR").unwrap().order(),
            TranspositionKey::new("CIPHER").unwrap().order()
        );
    }

    #[test]
    fn test_invalid_keys() {
        assert!(matches!(
            TranspositionKey::new(""),
            Err(CipherError::KeyError(_))
        ));
        assert!(matches!(
            TranspositionKey::new("KEY1"),
            Err(CipherError::KeyError(_))
        ));
    }

    #[test]
    fn test_single_pass() {
        let key = TranspositionKey::new("CIPHER").unwrap();
        assert_eq!(text(&transpose(&chars("HKFSSW"), &key, 1)), "HSSKFW");
        assert_eq!(text(&untranspose(&chars("HSSKFW"), &key, 1)), "HKFSSW");
    }

    #[test]
    fn test_uneven_columns() {
        let key = TranspositionKey::new("CIPHER").unwrap();
        let plain = chars("ABCDEFGHIJK");
        let once = transpose(&plain, &key, 1);
        // Columns: AG BH CI DJ EK F, read in order 0 4 3 1 2 5
        assert_eq!(text(&once), "AGEKDJBHCIF");
        assert_eq!(untranspose(&once, &key, 1), plain);
    }

    #[test]
    fn test_multi_pass_equals_repeated_single_pass() {
        let key = TranspositionKey::new("CIPHER").unwrap();
        let plain = chars("ABCDEFGHIJK");
        let twice = transpose(&plain, &key, 2);
        assert_eq!(twice, transpose(&transpose(&plain, &key, 1), &key, 1));
        assert_eq!(text(&twice), "ABDFKIGHECJ");
    }

    #[test]
    fn test_multi_pass_roundtrip() {
        let plain = chars("THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG");
        for key in ["ZEBRAS", "A", "KEYWORD", "SECRETSECRET"] {
            let key = TranspositionKey::new(key).unwrap();
            for passes in 1..=3 {
                let cipher = transpose(&plain, &key, passes);
                assert_eq!(untranspose(&cipher, &key, passes), plain);
            }
        }
    }

    #[test]
    fn test_key_wider_than_text() {
        let key = TranspositionKey::new("LONGERKEY").unwrap();
        let plain = chars("ABC");
        let cipher = transpose(&plain, &key, 1);
        assert_eq!(untranspose(&cipher, &key, 1), plain);
    }

    #[test]
    fn test_empty_text() {
        let key = TranspositionKey::new("KEY").unwrap();
        assert!(transpose(&[], &key, 3).is_empty());
        assert!(untranspose(&[], &key, 3).is_empty());
    }
}
