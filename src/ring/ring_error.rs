use std::io;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("Invalid buffer: {requested} bytes requested, destination holds {provided} bytes")]
    InvalidBuffer { requested: usize, provided: usize },

    /// `available == 0` means there was nothing to consume at all.
    #[error("Ring buffer empty: {requested} bytes requested, {available} bytes buffered")]
    Empty { requested: usize, available: usize },

    #[error("Not enough space in ring buffer: required {required} bytes, available {available} bytes")]
    NotEnoughSpace { required: usize, available: usize },

    #[error("Invalid capacity {capacity}: {reason}")]
    InvalidCapacity {
        capacity: usize,
        reason: &'static str,
    },
}

impl RingError {
    #[inline]
    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    #[inline]
    pub fn is_invalid_buffer(&self) -> bool {
        matches!(self, Self::InvalidBuffer { .. })
    }
}

impl From<RingError> for io::Error {
    fn from(err: RingError) -> Self {
        let kind = match err {
            RingError::InvalidBuffer { .. } | RingError::InvalidCapacity { .. } => {
                io::ErrorKind::InvalidInput
            }
            RingError::Empty { .. } => io::ErrorKind::UnexpectedEof,
            RingError::NotEnoughSpace { .. } => io::ErrorKind::WriteZero,
        };
        io::Error::new(kind, err)
    }
}
