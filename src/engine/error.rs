use thiserror::Error;

/// Errors raised while setting up or driving a knot computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnotError {
    /// Ring sizes below two cannot produce a first-two product.
    #[error("ring size must be between 2 and {max}, got {size}")]
    RingSize { size: usize, max: usize },

    /// A segment length does not fit inside the ring.
    #[error("length #{index} ({length}) exceeds ring size {size}")]
    LengthOutOfRange {
        index: usize,
        length: usize,
        size: usize,
    },
}
