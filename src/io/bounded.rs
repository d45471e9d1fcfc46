use std::io::{self, Read};

use super::Mark;

/// A reader that stops after a fixed number of bytes
///
/// Reads beyond `max` report end of input without touching the wrapped
/// reader. While a mark is set, reads are also limited to the mark's read
/// limit so that [`Mark::reset`] can always honor it.
#[derive(Debug)]
pub struct BoundedReader<R> {
    target: R,
    bytes_read: u64,
    max: u64,
    marked_at: Option<u64>,
    read_ahead_limit: u64,
}

impl<R: Read> BoundedReader<R> {
    pub fn new(target: R, max: u64) -> Self {
        Self {
            target,
            bytes_read: 0,
            max,
            marked_at: None,
            read_ahead_limit: 0,
        }
    }

    /// Skips up to `n` bytes, returning how many were skipped
    pub fn skip(&mut self, n: u64) -> io::Result<u64> {
        io::copy(&mut self.by_ref().take(n), &mut io::sink())
    }

    pub fn into_inner(self) -> R {
        self.target
    }

    fn remaining(&self) -> u64 {
        let remaining = self.max.saturating_sub(self.bytes_read);
        match self.marked_at {
            Some(marked_at) => {
                let window_end = marked_at.saturating_add(self.read_ahead_limit);
                remaining.min(window_end.saturating_sub(self.bytes_read))
            }
            None => remaining,
        }
    }
}

impl<R: Read> Read for BoundedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = self.remaining();
        if remaining == 0 || buf.is_empty() {
            return Ok(0);
        }

        let len = usize::try_from(remaining).map_or(buf.len(), |r| r.min(buf.len()));
        let n = self.target.read(&mut buf[..len])?;
        self.bytes_read += n as u64;
        Ok(n)
    }
}

impl<R: Read + Mark> Mark for BoundedReader<R> {
    fn mark_supported(&self) -> bool {
        self.target.mark_supported()
    }

    fn mark(&mut self, read_limit: usize) -> io::Result<()> {
        self.target.mark(read_limit)?;
        self.marked_at = Some(self.bytes_read);
        self.read_ahead_limit = read_limit as u64;
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        self.target.reset()?;
        if let Some(marked_at) = self.marked_at {
            self.bytes_read = marked_at;
        }
        Ok(())
    }
}
