pub mod error;
pub mod reader;

use std::fmt;

pub use error::IoError;

/// Shape of the text a command reads from its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// First line, hashed byte for byte.
    Line,
    /// First line, parsed as comma-separated lengths.
    Lengths,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Lengths => "lengths",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
