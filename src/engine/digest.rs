use std::fmt;

use crate::engine::ring::RING_SIZE;
use crate::util::hex;

/// Number of bytes in a dense knot digest.
pub const DIGEST_LEN: usize = 16;

/// Number of sparse-hash elements folded into each digest byte.
pub const BLOCK_LEN: usize = RING_SIZE / DIGEST_LEN;

/// Dense knot digest: sixteen XOR-folded blocks of the final ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Fold a 256-element sparse hash into sixteen bytes.
    ///
    /// Block `i` is the XOR of indices `[16 * i, 16 * i + 16)`.
    ///
    /// # Panics
    ///
    /// Panics when `sparse` is not exactly [`RING_SIZE`] long.
    pub fn fold(sparse: &[u32]) -> Self {
        assert_eq!(
            sparse.len(),
            RING_SIZE,
            "sparse hash must hold {RING_SIZE} elements"
        );
        let mut bytes = [0u8; DIGEST_LEN];
        for (byte, block) in bytes.iter_mut().zip(sparse.chunks_exact(BLOCK_LEN)) {
            let folded = block.iter().fold(0u32, |acc, &value| acc ^ value);
            // values of a 256-element ring are all below 256
            *byte = (folded & 0xff) as u8;
        }
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// 32 lowercase hex characters, most significant nibble first.
    pub fn to_hex(&self) -> String {
        hex::encode_lower(&self.0)
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(value: [u8; DIGEST_LEN]) -> Self {
        Self(value)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
