//! Background sensor reader
//!
//! Pulls bytes from any `Read` source (a serial device node, a pipe, a
//! recorded trace), frames them into lines and forwards parsed samples over a
//! bounded channel. Each frame the loop drains whatever arrived and keeps only
//! the newest sample, so the bird follows the sensor without queueing lag.

use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};
use std::thread::{self, JoinHandle};

use super::line_buffer::LineBuffer;
use super::parse::parse_sample;

/// Samples buffered between frames before new ones are dropped
pub const DEFAULT_QUEUE_LEN: usize = 64;

const READ_CHUNK: usize = 64;

/// Handle to a running sensor reader thread
#[derive(Debug)]
pub struct SensorFeed {
    samples: Receiver<i32>,
    closed: bool,
    handle: Option<JoinHandle<io::Result<()>>>,
}

impl SensorFeed {
    /// Spawn a reader thread over `source`
    pub fn spawn<R>(source: R) -> io::Result<Self>
    where
        R: Read + Send + 'static,
    {
        let (tx, rx) = mpsc::sync_channel(DEFAULT_QUEUE_LEN);
        let handle = thread::Builder::new()
            .name("sensor-reader".into())
            .spawn(move || pump(source, LineBuffer::default(), tx))?;
        Ok(Self {
            samples: rx,
            closed: false,
            handle: Some(handle),
        })
    }

    /// Drain everything pending and return the most recent sample; never blocks
    pub fn latest_sample(&mut self) -> Option<i32> {
        let mut latest = None;
        loop {
            match self.samples.try_recv() {
                Ok(sample) => latest = Some(sample),
                Err(TryRecvError::Empty) => return latest,
                Err(TryRecvError::Disconnected) => {
                    self.closed = true;
                    return latest;
                }
            }
        }
    }

    /// Source hit EOF (or failed) and every sample has been consumed
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Wait for the reader thread and surface its I/O result
    pub fn join(mut self) -> io::Result<()> {
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("sensor reader panicked"))),
            None => Ok(()),
        }
    }
}

/// Reader thread body: frame, parse, forward until EOF or the feed is dropped
fn pump<R: Read>(mut source: R, mut lines: LineBuffer, tx: SyncSender<i32>) -> io::Result<()> {
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        let n = match source.read(&mut chunk) {
            Ok(0) => {
                log::info!("Sensor source closed");
                return Ok(());
            }
            Ok(n) => n,
            // Serial ports report an idle line as a read timeout
            Err(e) if matches!(e.kind(), io::ErrorKind::Interrupted | io::ErrorKind::TimedOut) => {
                continue;
            }
            Err(e) => {
                log::warn!("Sensor read failed: {}", e);
                return Err(e);
            }
        };
        lines.extend(&chunk[..n]);

        while let Some(line) = lines.next_line() {
            let Some(sample) = parse_sample(&line) else {
                log::trace!("Discarded sensor line {:?}", line);
                continue;
            };
            match tx.try_send(sample) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => log::trace!("Sensor queue full, sample dropped"),
                Err(TrySendError::Disconnected(_)) => return Ok(()),
            }
        }
    }
}
