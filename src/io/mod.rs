//! Small stream decorators
//!
//! - [`BoundedReader`] caps how many bytes may be read from a source
//! - [`NullReader`] is a sized source that produces generated bytes
//! - [`DemuxReader`] and [`DemuxWriter`] share one object between threads,
//!   each thread reading or writing its own bound stream
//!
//! `std::io::Read` has no notion of marking a position and rewinding to it, so
//! that capability lives in the [`Mark`] trait. [`MarkableReader`] adds it to
//! any reader by remembering the bytes read since the mark.

mod bounded;
mod demux;
mod null;

pub use bounded::BoundedReader;
pub use demux::{Binding, Demux, DemuxReader, DemuxWriter};
pub use null::{ByteGenerator, NullReader, Zeros};

use std::io::{self, Read};

/// Readers that can return to a previously marked position
pub trait Mark {
    /// Whether [`Mark::mark`] and [`Mark::reset`] are usable
    fn mark_supported(&self) -> bool {
        true
    }

    /// Remembers the current position
    ///
    /// `read_limit` is the number of bytes that may be read before the mark
    /// stops being valid.
    fn mark(&mut self, read_limit: usize) -> io::Result<()>;

    /// Returns to the marked position
    fn reset(&mut self) -> io::Result<()>;
}

pub(crate) fn mark_not_supported() -> io::Error {
    io::Error::new(io::ErrorKind::Unsupported, "Mark not supported")
}

pub(crate) fn no_mark() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "No position has been marked")
}

/// Adds [`Mark`] support to any reader
///
/// Bytes read after [`Mark::mark`] are kept so that [`Mark::reset`] can serve
/// them again. Once more than the read limit has been read the mark is dropped.
///
/// # Examples
/// ```
/// use filename_utils::io::{Mark, MarkableReader};
/// use std::io::Read;
///
/// let mut reader = MarkableReader::new("abcdef".as_bytes());
/// reader.mark(3).unwrap();
/// let mut buf = [0u8; 3];
/// reader.read_exact(&mut buf).unwrap();
/// reader.reset().unwrap();
///
/// let mut rest = String::new();
/// reader.read_to_string(&mut rest).unwrap();
/// assert_eq!(rest, "abcdef");
/// ```
#[derive(Debug)]
pub struct MarkableReader<R> {
    inner: R,
    buffer: Vec<u8>,
    position: usize,
    read_limit: Option<usize>,
}

impl<R: Read> MarkableReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
            position: 0,
            read_limit: None,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for MarkableReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.position < self.buffer.len() {
            let replay = &self.buffer[self.position..];
            let n = replay.len().min(buf.len());
            buf[..n].copy_from_slice(&replay[..n]);
            self.position += n;
            return Ok(n);
        }

        let n = self.inner.read(buf)?;
        if let Some(limit) = self.read_limit {
            if self.buffer.len() + n > limit {
                self.read_limit = None;
                self.buffer.clear();
                self.position = 0;
            } else {
                self.buffer.extend_from_slice(&buf[..n]);
                self.position += n;
            }
        }
        Ok(n)
    }
}

impl<R: Read> Mark for MarkableReader<R> {
    fn mark(&mut self, read_limit: usize) -> io::Result<()> {
        self.buffer.drain(..self.position);
        self.position = 0;
        self.read_limit = Some(read_limit);
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        if self.read_limit.is_none() {
            return Err(no_mark());
        }
        self.position = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_string(reader: &mut impl Read, len: usize) -> String {
        let mut buf = vec![0u8; len];
        let n = reader.read(&mut buf).unwrap();
        String::from_utf8_lossy(&buf[..n]).into_owned()
    }

    #[test]
    fn test_markable_reader_replays_after_reset() {
        let mut reader = MarkableReader::new("0123456789".as_bytes());
        assert_eq!(read_string(&mut reader, 2), "01");

        reader.mark(5).unwrap();
        assert_eq!(read_string(&mut reader, 3), "234");
        reader.reset().unwrap();
        assert_eq!(read_string(&mut reader, 2), "23");
        assert_eq!(read_string(&mut reader, 10), "4");
        assert_eq!(read_string(&mut reader, 10), "56789");
    }

    #[test]
    fn test_markable_reader_remark_while_replaying() {
        let mut reader = MarkableReader::new("abcdef".as_bytes());
        reader.mark(6).unwrap();
        assert_eq!(read_string(&mut reader, 4), "abcd");
        reader.reset().unwrap();
        assert_eq!(read_string(&mut reader, 1), "a");

        reader.mark(6).unwrap();
        assert_eq!(read_string(&mut reader, 2), "bc");
        reader.reset().unwrap();
        assert_eq!(read_string(&mut reader, 3), "bcd");
    }

    #[test]
    fn test_markable_reader_drops_mark_past_limit() {
        let mut reader = MarkableReader::new("abcdef".as_bytes());
        reader.mark(2).unwrap();
        assert_eq!(read_string(&mut reader, 3), "abc");
        let err = reader.reset().unwrap_err();
        assert_eq!(err.to_string(), "No position has been marked");
    }

    #[test]
    fn test_markable_reader_reset_without_mark() {
        let mut reader = MarkableReader::new("abc".as_bytes());
        assert!(reader.reset().is_err());
        assert!(reader.mark_supported());
        assert_eq!(reader.into_inner(), b"abc");
    }
}
