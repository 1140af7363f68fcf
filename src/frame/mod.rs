//! Length-prefixed frames staged through a [`RingBuffer`](crate::ring::RingBuffer).
//!
//! The ring itself is format-agnostic; this is the layer a connection handler
//! puts on top of it. A frame is a 4-byte header (`kind`, `flags`,
//! little-endian `payload_len`) followed by the payload.

pub mod header;
pub mod staging;

pub use header::FrameHeader;
pub use staging::{fill_frames, next_frame, write_frame};
