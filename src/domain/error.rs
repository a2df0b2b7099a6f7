use thiserror::Error;

use crate::engine::error::KnotError;
use crate::io::{InputKind, IoError};

/// Errors produced by the `hash` command boundary.
#[derive(Debug, Error)]
pub enum HashError {
    /// Input line could not be read.
    #[error("failed to read {kind} input: {source}")]
    ReadInput {
        kind: InputKind,
        #[source]
        source: IoError,
    },

    /// Digest could not be written to the output stream.
    #[error("failed to write digest: {source}")]
    WriteOutput {
        #[source]
        source: std::io::Error,
    },
}

/// Errors produced by the `product` command boundary.
#[derive(Debug, Error)]
pub enum ProductError {
    /// Length list could not be read or parsed.
    #[error("failed to read {kind} input: {source}")]
    ReadInput {
        kind: InputKind,
        #[source]
        source: IoError,
    },

    /// Ring size or lengths are outside the supported range.
    #[error("invalid knot parameters: {source}")]
    Knot {
        #[source]
        source: KnotError,
    },

    /// Product could not be written to the output stream.
    #[error("failed to write product: {source}")]
    WriteOutput {
        #[source]
        source: std::io::Error,
    },
}
