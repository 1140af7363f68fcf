//! `std::io` adapters so the buffer can sit between a socket and a framing
//! layer. Both directions keep the partial-transfer contract.

use super::RingBuffer;
use std::io;

impl io::Write for RingBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(RingBuffer::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for RingBuffer {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(RingBuffer::read(self, buf))
    }
}
