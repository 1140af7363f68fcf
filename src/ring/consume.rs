use super::{RingBuffer, RingError, wrap};

impl RingBuffer {
    /// Moves up to `dst.len()` unread bytes into `dst` and returns the count.
    /// An empty buffer yields 0.
    #[inline]
    pub fn read(&mut self, dst: &mut [u8]) -> usize {
        let count = dst.len().min(self.len);
        if count == 0 {
            return 0;
        }

        wrap::copy_out(&self.buf, self.head, &mut dst[..count]);
        self.consume(count);
        count
    }

    /// Moves exactly `n` bytes into `dst[..n]`.
    #[inline]
    pub fn read_n(&mut self, n: usize, dst: &mut [u8]) -> Result<(), RingError> {
        self.peek(n, dst)?;
        self.consume(n);
        Ok(())
    }

    /// Copies exactly `n` bytes into `dst[..n]` without consuming them.
    #[inline]
    pub fn peek(&self, n: usize, dst: &mut [u8]) -> Result<(), RingError> {
        if dst.len() < n {
            return Err(RingError::InvalidBuffer {
                requested: n,
                provided: dst.len(),
            });
        }
        self.check_available(n)?;

        wrap::copy_out(&self.buf, self.head, &mut dst[..n]);
        Ok(())
    }

    /// Discards exactly `n` unread bytes. Never discards fewer.
    #[inline]
    pub fn skip(&mut self, n: usize) -> Result<(), RingError> {
        self.check_available(n)?;
        self.consume(n);
        Ok(())
    }

    #[inline(always)]
    fn check_available(&self, n: usize) -> Result<(), RingError> {
        if n > self.len {
            return Err(RingError::Empty {
                requested: n,
                available: self.len,
            });
        }
        Ok(())
    }

    #[inline(always)]
    fn consume(&mut self, n: usize) {
        self.head = wrap::advance(self.head, n, self.capacity());
        self.len -= n;
    }
}
