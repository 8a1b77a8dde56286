pub mod compiler;
pub mod error;
pub mod song;

pub use compiler::Compiler;
pub use error::Error;
