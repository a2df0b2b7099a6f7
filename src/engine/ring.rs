use crate::engine::error::KnotError;

/// Number of elements in the ring used by the dense knot hash.
pub const RING_SIZE: usize = 256;

/// Largest ring accepted by [`Ring::new`].
pub const MAX_RING_SIZE: usize = 1 << 16;

/// Circular buffer of `0..size` addressed through a movable cursor.
///
/// The cursor is a plain offset into `elements`; every logical position is
/// resolved as `(cursor + k) % size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    elements: Vec<u32>,
    cursor: usize,
}

impl Ring {
    /// Build a ring holding `0..size` in ascending order with the cursor at 0.
    pub fn new(size: usize) -> Result<Self, KnotError> {
        if !(2..=MAX_RING_SIZE).contains(&size) {
            return Err(KnotError::RingSize {
                size,
                max: MAX_RING_SIZE,
            });
        }
        Ok(Self::filled(size))
    }

    /// The 256-element ring used by the dense knot hash.
    pub fn standard() -> Self {
        Self::filled(RING_SIZE)
    }

    fn filled(size: usize) -> Self {
        // size <= MAX_RING_SIZE, so every index fits in u32.
        Self {
            elements: (0..size as u32).collect(),
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Reverse the `length` elements starting at the cursor, wrapping past the end.
    ///
    /// # Panics
    ///
    /// Panics when `length` exceeds the ring size. Callers validate lengths
    /// before they reach the ring.
    pub fn reverse_segment(&mut self, length: usize) {
        let size = self.elements.len();
        assert!(
            length <= size,
            "segment length {length} exceeds ring size {size}"
        );
        for k in 0..length / 2 {
            let front = (self.cursor + k) % size;
            let back = (self.cursor + length - 1 - k) % size;
            self.elements.swap(front, back);
        }
    }

    /// Move the cursor forward by `offset`, wrapping modulo the ring size.
    pub fn advance(&mut self, offset: usize) {
        let size = self.elements.len();
        self.cursor = (self.cursor + offset % size) % size;
    }

    /// Move the cursor backward by `offset`, wrapping modulo the ring size.
    pub fn retreat(&mut self, offset: usize) {
        let size = self.elements.len();
        self.cursor = (self.cursor + size - offset % size) % size;
    }

    /// Contents in absolute index order, regardless of the cursor.
    pub fn snapshot(&self) -> &[u32] {
        &self.elements
    }

    /// Product of the elements at absolute indices 0 and 1.
    pub fn first_two_product(&self) -> u64 {
        u64::from(self.elements[0]) * u64::from(self.elements[1])
    }
}
