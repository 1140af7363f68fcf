pub mod consumer;
pub mod frame;
pub mod ring;
