use crate::frame::FrameHeader;
pub mod dispatcher;

pub trait FrameConsumer: Send {
    fn consume(&mut self, header: &FrameHeader, payload: &[u8]) -> bool;

    fn flush(&mut self) {}

    fn name(&self) -> &str;
}
