use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is not valid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("length #{index} is not a non-negative integer: `{value}`")]
    InvalidLength { index: usize, value: String },
}
