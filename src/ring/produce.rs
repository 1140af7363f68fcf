use super::{RingBuffer, RingError, wrap};

impl RingBuffer {
    /// Appends as much of `data` as fits and returns the count accepted.
    ///
    /// A full buffer accepts nothing and returns 0; the caller retries with
    /// the remainder once space has been freed.
    #[inline]
    pub fn write(&mut self, data: &[u8]) -> usize {
        let count = data.len().min(self.free());
        if count == 0 {
            return 0;
        }

        let tail = self.tail();
        wrap::copy_in(&mut self.buf, tail, &data[..count]);
        self.len += count;
        count
    }

    /// Appends all of `data` or nothing.
    #[inline]
    pub fn write_exact(&mut self, data: &[u8]) -> Result<(), RingError> {
        let available = self.free();
        if data.len() > available {
            return Err(RingError::NotEnoughSpace {
                required: data.len(),
                available,
            });
        }

        self.write(data);
        Ok(())
    }
}
