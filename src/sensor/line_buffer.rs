//! Bounded line framing for the serial byte stream

use std::collections::VecDeque;

/// Bytes read in one go from the serial link in the stock setup
pub const DEFAULT_CAPACITY: usize = 256;

/// Fixed-capacity byte queue that yields newline-terminated lines.
///
/// When a line grows past capacity the oldest bytes are dropped, so a stream
/// without newlines can never grow the buffer.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    bytes: VecDeque<u8>,
    capacity: usize,
    /// Bytes discarded because of overflow
    dropped: u64,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl LineBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            dropped: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Append raw bytes, evicting the oldest ones on overflow
    pub fn extend(&mut self, data: &[u8]) {
        for &byte in data {
            if self.bytes.len() == self.capacity {
                self.bytes.pop_front();
                self.dropped += 1;
            }
            self.bytes.push_back(byte);
        }
    }

    /// Take the next complete line (newline stripped, lossy UTF-8)
    pub fn next_line(&mut self) -> Option<String> {
        let end = self.bytes.iter().position(|&b| b == b'\n')?;
        let line: Vec<u8> = self.bytes.drain(..=end).take(end).collect();
        Some(String::from_utf8_lossy(&line).into_owned())
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_lines() {
        let mut buf = LineBuffer::default();
        buf.extend(b"512,0\r\n600,1\n70");
        assert_eq!(buf.next_line().as_deref(), Some("512,0\r"));
        assert_eq!(buf.next_line().as_deref(), Some("600,1"));
        assert_eq!(buf.next_line(), None);
        assert_eq!(buf.len(), 2);

        buf.extend(b"0,2\n");
        assert_eq!(buf.next_line().as_deref(), Some("700,2"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_empty_line() {
        let mut buf = LineBuffer::default();
        buf.extend(b"\n");
        assert_eq!(buf.next_line().as_deref(), Some(""));
    }

    #[test]
    fn test_overflow_drops_oldest() {
        let mut buf = LineBuffer::with_capacity(8);
        buf.extend(b"garbage-garbage");
        assert_eq!(buf.len(), 8);
        assert_eq!(buf.dropped(), 7);

        buf.clear();
        buf.extend(b"xxxxx12,3\n");
        // Only the last 8 bytes survive
        assert_eq!(buf.next_line().as_deref(), Some("xxx12,3"));
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let mut buf = LineBuffer::default();
        buf.extend(&[0xff, b'1', b'\n']);
        let line = buf.next_line().unwrap();
        assert!(line.ends_with('1'));
    }
}
