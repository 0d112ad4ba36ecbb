pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod options;
pub mod show;

pub use decrypt::*;
pub use encrypt::*;
pub use keygen::*;
pub use options::*;
pub use show::*;
