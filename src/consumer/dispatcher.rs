use super::FrameConsumer;
use crate::frame::{self, FrameHeader};
use crate::ring::{RingBuffer, RingError};

/// Fans complete frames out of a ring to every registered consumer.
///
/// Payloads are copied into a scratch arena sized for the largest possible
/// frame, so draining never allocates.
pub struct FrameDispatcher {
    consumers: Vec<Box<dyn FrameConsumer>>,
    scratch: Box<[u8]>,
}

impl Default for FrameDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDispatcher {
    pub fn new() -> Self {
        Self {
            consumers: Vec::new(),
            scratch: vec![0u8; u16::MAX as usize].into_boxed_slice(),
        }
    }

    pub fn add_consumer<C: FrameConsumer + 'static>(&mut self, consumer: C) {
        self.consumers.push(Box::new(consumer));
    }

    pub fn consumer_count(&self) -> usize {
        self.consumers.len()
    }

    /// Delivers every complete frame, then flushes the consumers. A trailing
    /// partial frame stays in the ring.
    pub fn drain(&mut self, ring: &mut RingBuffer) -> Result<DrainStats, RingError> {
        let stats = self.drain_batch(ring, usize::MAX)?;
        for consumer in &mut self.consumers {
            consumer.flush();
        }
        tracing::trace!(
            frames = stats.frames_read,
            buffered = ring.len(),
            "drained ring"
        );
        Ok(stats)
    }

    /// Delivers at most `limit` frames without flushing.
    pub fn drain_batch(
        &mut self,
        ring: &mut RingBuffer,
        limit: usize,
    ) -> Result<DrainStats, RingError> {
        let mut stats = DrainStats::default();
        for _ in 0..limit {
            let Some(header) = frame::next_frame(ring, &mut self.scratch)? else {
                break;
            };
            stats.frames_read += 1;
            self.dispatch(&header, &mut stats);
        }
        Ok(stats)
    }

    #[inline]
    fn dispatch(&mut self, header: &FrameHeader, stats: &mut DrainStats) {
        let payload = &self.scratch[..header.payload_len as usize];
        for consumer in &mut self.consumers {
            if consumer.consume(header, payload) {
                stats.frames_delivered += 1;
            } else {
                stats.frames_failed += 1;
                tracing::debug!(
                    consumer = consumer.name(),
                    kind = header.kind,
                    len = header.payload_len,
                    "consumer rejected frame"
                );
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DrainStats {
    pub frames_read: u64,
    pub frames_delivered: u64,
    pub frames_failed: u64,
}

impl DrainStats {
    #[inline]
    pub fn success_rate(&self) -> f64 {
        let total = self.frames_delivered + self.frames_failed;
        if total == 0 {
            1.0
        } else {
            self.frames_delivered as f64 / total as f64
        }
    }

    pub fn merge(&mut self, other: DrainStats) {
        self.frames_read += other.frames_read;
        self.frames_delivered += other.frames_delivered;
        self.frames_failed += other.frames_failed;
    }
}
