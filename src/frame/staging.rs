use super::FrameHeader;
use crate::ring::{RingBuffer, RingError};

/// Stages one frame, header then payload. Nothing is written unless the
/// whole frame fits.
pub fn write_frame(
    ring: &mut RingBuffer,
    header: &FrameHeader,
    payload: &[u8],
) -> Result<(), RingError> {
    if payload.len() != header.payload_len as usize {
        return Err(RingError::InvalidBuffer {
            requested: header.payload_len as usize,
            provided: payload.len(),
        });
    }

    let total_size = header.total_size();
    if total_size > ring.free() {
        return Err(RingError::NotEnoughSpace {
            required: total_size,
            available: ring.free(),
        });
    }

    ring.write_exact(&header.encode())?;
    ring.write_exact(payload)
}

/// Stages copies of one frame until the ring has no room for another and
/// returns how many were written. Errors other than running out of space are
/// returned as-is.
pub fn fill_frames(
    ring: &mut RingBuffer,
    header: &FrameHeader,
    payload: &[u8],
) -> Result<u64, RingError> {
    let mut staged = 0;
    loop {
        match write_frame(ring, header, payload) {
            Ok(()) => staged += 1,
            Err(RingError::NotEnoughSpace { .. }) => return Ok(staged),
            Err(e) => return Err(e),
        }
    }
}

/// Takes the next complete frame off the ring, copying its payload into
/// `scratch[..payload_len]`.
///
/// Returns `Ok(None)` while the ring holds only part of a frame; those bytes
/// stay buffered until the rest arrives. A header announcing a frame larger
/// than the ring fails with `NotEnoughSpace` and is left in place.
pub fn next_frame(
    ring: &mut RingBuffer,
    scratch: &mut [u8],
) -> Result<Option<FrameHeader>, RingError> {
    let mut raw = [0u8; FrameHeader::SIZE];
    match ring.peek(FrameHeader::SIZE, &mut raw) {
        Ok(()) => {}
        Err(e) if e.is_insufficient() => return Ok(None),
        Err(e) => return Err(e),
    }

    let header = FrameHeader::decode(raw);
    if header.total_size() > ring.capacity() {
        return Err(RingError::NotEnoughSpace {
            required: header.total_size(),
            available: ring.capacity(),
        });
    }
    if ring.len() < header.total_size() {
        return Ok(None);
    }

    let payload_len = header.payload_len as usize;
    if scratch.len() < payload_len {
        return Err(RingError::InvalidBuffer {
            requested: payload_len,
            provided: scratch.len(),
        });
    }

    ring.skip(FrameHeader::SIZE)?;
    ring.read_n(payload_len, scratch)?;
    Ok(Some(header))
}
