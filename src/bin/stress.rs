use anyhow::Context;
use circle::ring::RingBuffer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const CAPACITY: usize = 64 * 1024;
const CHUNKS: [usize; 5] = [1, 7, 113, 4093, 9001];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("ring buffer stress test, one writer and one reader behind a mutex");

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    let ring = Mutex::new(RingBuffer::new(CAPACITY)?);

    std::thread::scope(|scope| -> anyhow::Result<()> {
        let writer_running = running.clone();
        let ring_ref = &ring;
        let writer = scope.spawn(move || {
            let mut pattern = [0u8; 9001];
            for (i, b) in pattern.iter_mut().enumerate() {
                *b = i as u8;
            }

            let mut written = 0u64;
            let mut turn = 0usize;
            loop {
                let chunk = CHUNKS[turn % CHUNKS.len()];
                turn += 1;
                let offset = (written % 256) as usize;
                let data = &pattern[offset..offset + chunk.min(pattern.len() - offset)];

                let Ok(mut ring) = ring_ref.lock() else {
                    break;
                };
                // Checked under the lock so the reader never exits ahead of a final write.
                if !writer_running.load(Ordering::Relaxed) {
                    break;
                }
                let n = ring.write(data);
                drop(ring);
                if n == 0 {
                    std::thread::yield_now();
                }
                written += n as u64;
            }
            written
        });

        let reader_running = running.clone();
        let reader = scope.spawn(move || -> anyhow::Result<u64> {
            let mut buf = [0u8; 4096];
            let mut read = 0u64;

            loop {
                let n = {
                    let mut ring = ring_ref
                        .lock()
                        .map_err(|_| anyhow::anyhow!("ring mutex poisoned"))?;
                    if !reader_running.load(Ordering::Relaxed) && ring.is_empty() {
                        break;
                    }
                    ring.read(&mut buf)
                };
                if n == 0 {
                    std::thread::yield_now();
                    continue;
                }

                for (i, &b) in buf[..n].iter().enumerate() {
                    let expected = (read + i as u64) as u8;
                    anyhow::ensure!(
                        b == expected,
                        "byte {} out of order: got {}, expected {}",
                        read + i as u64,
                        b,
                        expected
                    );
                }
                read += n as u64;
            }

            Ok(read)
        });

        tracing::info!("Running for 5 seconds...");
        std::thread::sleep(Duration::from_secs(5));
        running.store(false, Ordering::SeqCst);

        let written = writer
            .join()
            .map_err(|_| anyhow::anyhow!("writer thread panicked"))?;
        let read = reader
            .join()
            .map_err(|_| anyhow::anyhow!("reader thread panicked"))??;

        tracing::info!(written, read, "Results");
        tracing::info!(
            "Throughput: {:.2} MB/sec",
            read as f64 / 5.0 / 1024.0 / 1024.0
        );
        anyhow::ensure!(written == read, "lost {} bytes", written - read);

        Ok(())
    })
}
