pub mod buffer;
pub mod consume;
pub mod produce;
pub mod ring_error;
pub mod stream;
pub mod wrap;

pub use buffer::RingBuffer;
pub use ring_error::*;
