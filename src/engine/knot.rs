use crate::engine::digest::Digest;
use crate::engine::error::KnotError;
use crate::engine::ring::{RING_SIZE, Ring};

/// Number of rounds applied by the dense knot hash.
pub const ROUNDS: usize = 64;

/// Lengths appended after the input bytes in every dense round.
pub const LENGTH_SUFFIX: [usize; 5] = [17, 31, 73, 47, 23];

/// Ring plus skip counter for one knot computation.
///
/// Cursor and skip persist across rounds; nothing is shared between states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnotState {
    ring: Ring,
    skip: usize,
}

impl KnotState {
    pub fn new(size: usize) -> Result<Self, KnotError> {
        Ok(Self {
            ring: Ring::new(size)?,
            skip: 0,
        })
    }

    pub fn standard() -> Self {
        Self {
            ring: Ring::standard(),
            skip: 0,
        }
    }

    /// Reverse `length` elements at the cursor, advance past them plus the skip,
    /// then bump the skip.
    pub fn apply(&mut self, length: usize) {
        self.ring.reverse_segment(length);
        self.ring.advance(length + self.skip);
        self.skip += 1;
    }

    pub fn run_round(&mut self, lengths: &[usize]) {
        for &length in lengths {
            self.apply(length);
        }
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn skip(&self) -> usize {
        self.skip
    }
}

/// Per-round length sequence for the dense hash: input bytes, then [`LENGTH_SUFFIX`].
pub fn lengths_from_bytes(bytes: &[u8]) -> Vec<usize> {
    bytes
        .iter()
        .map(|&byte| usize::from(byte))
        .chain(LENGTH_SUFFIX)
        .collect()
}

/// Final 256-element ring after [`ROUNDS`] rounds over `bytes`.
pub fn sparse_hash(bytes: &[u8]) -> Vec<u32> {
    let lengths = lengths_from_bytes(bytes);
    debug_assert!(lengths.iter().all(|&length| length <= RING_SIZE));

    let mut state = KnotState::standard();
    for _ in 0..ROUNDS {
        state.run_round(&lengths);
    }
    state.ring.snapshot().to_vec()
}

/// Dense knot hash of `bytes`.
pub fn knot_hash(bytes: &[u8]) -> Digest {
    Digest::fold(&sparse_hash(bytes))
}

/// Run a single round of raw `lengths` over a ring of `size` and multiply the
/// first two elements.
///
/// Lengths are used as given: no byte conversion, no suffix, one round.
pub fn first_two_product(lengths: &[usize], size: usize) -> Result<u64, KnotError> {
    let mut state = KnotState::new(size)?;
    if let Some((index, &length)) = lengths
        .iter()
        .enumerate()
        .find(|(_, length)| **length > size)
    {
        return Err(KnotError::LengthOutOfRange {
            index,
            length,
            size,
        });
    }
    state.run_round(lengths);
    Ok(state.ring.first_two_product())
}
