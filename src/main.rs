use anyhow::Context;
use circle::consumer::FrameConsumer;
use circle::consumer::dispatcher::{DrainStats, FrameDispatcher};
use circle::frame::{self, FrameHeader};
use circle::ring::RingBuffer;
use clap::Parser;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Stages synthetic frames through a ring buffer and drains them to consumers.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Ring buffer capacity in bytes.
    #[arg(long, default_value_t = 64 * 1024)]
    capacity: usize,

    /// Payload bytes per frame.
    #[arg(long, default_value_t = 64)]
    payload_len: u16,

    /// Seconds between status reports.
    #[arg(long, default_value_t = 5)]
    report_secs: u64,
}

struct ChecksumConsumer {
    frames: u64,
    checksum: u64,
}

impl FrameConsumer for ChecksumConsumer {
    fn consume(&mut self, _header: &FrameHeader, payload: &[u8]) -> bool {
        self.frames += 1;
        self.checksum = payload
            .iter()
            .fold(self.checksum, |acc, &b| acc.wrapping_mul(31).wrapping_add(b as u64));
        true
    }

    fn flush(&mut self) {
        tracing::trace!(frames = self.frames, checksum = self.checksum, "checksum");
    }

    fn name(&self) -> &str {
        "checksum"
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    tracing::info!("circle v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Press Ctrl+C to stop");

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        tracing::info!("Shutting down...");
        r.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    let mut ring = RingBuffer::new(args.capacity).context("failed to create ring buffer")?;
    let header = FrameHeader::new(1, args.payload_len);
    anyhow::ensure!(
        header.total_size() <= ring.capacity(),
        "frame of {} bytes never fits a {} byte ring",
        header.total_size(),
        ring.capacity()
    );

    let mut dispatcher = FrameDispatcher::new();
    dispatcher.add_consumer(ChecksumConsumer {
        frames: 0,
        checksum: 0,
    });

    let payload: Vec<u8> = (0..args.payload_len).map(|i| i as u8).collect();
    let report_every = Duration::from_secs(args.report_secs);
    let mut total = DrainStats::default();
    let mut frames_staged = 0u64;
    let mut last_report = Instant::now();

    tracing::info!(capacity = ring.capacity(), "Service running");

    while running.load(Ordering::SeqCst) {
        frames_staged += frame::fill_frames(&mut ring, &header, &payload)?;

        let stats = dispatcher.drain(&mut ring)?;
        total.merge(stats);

        if last_report.elapsed() >= report_every {
            tracing::info!(
                frames_staged,
                frames_read = total.frames_read,
                success_rate = total.success_rate(),
                ring_used = ring.len(),
                ring_free = ring.free(),
                "status"
            );
            last_report = Instant::now();
        }

        std::thread::sleep(Duration::from_millis(10));
    }

    tracing::info!(frames = total.frames_read, "Total frames processed");
    Ok(())
}
