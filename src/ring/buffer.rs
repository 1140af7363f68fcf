use super::{RingError, wrap};
use std::fmt;

/// Fixed-capacity ring of bytes.
///
/// `len` alone says how much data is buffered, so the full capacity is usable
/// and `head == tail` is never consulted to tell full from empty. The arena is
/// sized once in [`RingBuffer::new`] and never reallocated.
pub struct RingBuffer {
    pub(crate) buf: Box<[u8]>,
    pub(crate) head: usize,
    pub(crate) len: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        if capacity == 0 {
            return Err(RingError::InvalidCapacity {
                capacity,
                reason: "must be greater than zero",
            });
        }

        Ok(Self {
            buf: vec![0; capacity].into_boxed_slice(),
            head: 0,
            len: 0,
        })
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn free(&self) -> usize {
        self.capacity() - self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Offset where the next written byte lands.
    #[inline(always)]
    pub(crate) fn tail(&self) -> usize {
        wrap::advance(self.head, self.len, self.capacity())
    }

    /// Drops every unread byte. The arena keeps its old contents.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Unread bytes in order, as the run up to the end of the arena and the
    /// run that continues from offset 0.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let (first, second) = wrap::split(self.head, self.len, self.capacity());
        (&self.buf[first], &self.buf[second])
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("head", &self.head)
            .field("len", &self.len)
            .finish()
    }
}
