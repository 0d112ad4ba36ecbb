pub mod addition;
pub mod fractionate;
pub mod straddle;
pub mod transpose;

pub use addition::*;
pub use fractionate::*;
pub use straddle::*;
pub use transpose::*;

/// Which way a reversible stage runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}
