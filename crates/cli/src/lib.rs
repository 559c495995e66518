pub mod commands;
pub mod error;
pub mod format;
pub mod glyph;
pub mod printer;

pub use error::{Error, Result};
