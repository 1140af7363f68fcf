#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub kind: u8,
    pub flags: u8,
    pub payload_len: u16,
}

impl FrameHeader {
    pub const SIZE: usize = 4;

    pub fn new(kind: u8, payload_len: u16) -> Self {
        Self {
            kind,
            flags: 0,
            payload_len,
        }
    }

    pub fn total_size(&self) -> usize {
        Self::SIZE + self.payload_len as usize
    }

    #[inline]
    pub fn encode(&self) -> [u8; Self::SIZE] {
        let [lo, hi] = self.payload_len.to_le_bytes();
        [self.kind, self.flags, lo, hi]
    }

    #[inline]
    pub fn decode(bytes: [u8; Self::SIZE]) -> Self {
        Self {
            kind: bytes[0],
            flags: bytes[1],
            payload_len: u16::from_le_bytes([bytes[2], bytes[3]]),
        }
    }
}
