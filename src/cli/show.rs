use crate::alphabet::Alphabet;
use crate::checkerboard::build_checkerboard_from;
use crate::cli::options::ConfigOverrides;
use crate::error::{CipherError, Result};
use crate::square::build_square_from;

/// Which table to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Table {
    #[default]
    Square,
    Checkerboard,
}

impl std::str::FromStr for Table {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "square" | "polybius" => Ok(Self::Square),
            "checkerboard" | "board" => Ok(Self::Checkerboard),
            _ => Err(CipherError::ConfigurationError(format!(
                "unknown table: {}",
                s
            ))),
        }
    }
}

/// Options for the show command
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub keyword: Option<String>,
    pub config: ConfigOverrides,
}

/// Render the square or checkerboard built from a keyword and config
pub fn show_table(table: Table, options: &ShowOptions) -> Result<String> {
    let config = options.config.resolve()?;
    let alphabet = Alphabet::resolve(config.alphabet.as_deref(), config.language)?;
    let keyword = options.keyword.as_deref();

    let mut output = String::new();
    match table {
        Table::Square => {
            let square = build_square_from(
                config.square_type,
                keyword,
                &alphabet,
                config.mono_params.as_ref(),
            )?;
            output.push_str(&format!("Polybius square ({:?})\n", config.square_type));
            output.push_str(&format!("{}\n", "=".repeat(24)));
            output.push_str(&square.to_string());
        }
        Table::Checkerboard => {
            let board = build_checkerboard_from(keyword.unwrap_or(""), &alphabet)?;
            output.push_str("Straddling checkerboard\n");
            output.push_str(&format!("{}\n", "=".repeat(23)));
            output.push_str(&board.to_string());
        }
    }
    Ok(output)
}
