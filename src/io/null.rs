use std::io::{self, Read};

use super::{mark_not_supported, no_mark, Mark};

/// Supplies the byte found at each position of a [`NullReader`]
pub trait ByteGenerator {
    fn byte_at(&mut self, position: u64) -> u8;
}

/// Generates zero bytes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Zeros;

impl ByteGenerator for Zeros {
    fn byte_at(&mut self, _position: u64) -> u8 {
        0
    }
}

/// A reader of a fixed size whose content is generated rather than stored
///
/// Useful for testing code that consumes large inputs without allocating
/// them. After the last byte has been read, the next read reports end of
/// input (or fails with [`io::ErrorKind::UnexpectedEof`] when configured to).
/// Any read after that is an error until the reader is reset or closed.
///
/// # Examples
/// ```
/// use filename_utils::io::NullReader;
/// use std::io::Read;
///
/// let mut reader = NullReader::new(4);
/// let mut buf = [1u8; 8];
/// assert_eq!(reader.read(&mut buf).unwrap(), 4);
/// assert_eq!(&buf[..4], &[0, 0, 0, 0]);
/// assert_eq!(reader.read(&mut buf).unwrap(), 0);
/// assert!(reader.read(&mut buf).is_err());
/// ```
#[derive(Debug)]
pub struct NullReader<G = Zeros> {
    size: u64,
    position: u64,
    mark: Option<u64>,
    read_limit: u64,
    eof: bool,
    throw_eof: bool,
    mark_supported: bool,
    generator: G,
}

impl NullReader<Zeros> {
    /// A reader of `size` zero bytes that supports marking
    pub fn new(size: u64) -> Self {
        Self::with_options(size, true, false)
    }

    pub fn with_options(size: u64, mark_supported: bool, throw_eof: bool) -> Self {
        Self::with_generator(size, mark_supported, throw_eof, Zeros)
    }
}

impl<G: ByteGenerator> NullReader<G> {
    pub fn with_generator(size: u64, mark_supported: bool, throw_eof: bool, generator: G) -> Self {
        Self {
            size,
            position: 0,
            mark: None,
            read_limit: 0,
            eof: false,
            throw_eof,
            mark_supported,
            generator,
        }
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Rewinds to the start and clears the mark and end-of-input state
    pub fn close(&mut self) {
        self.eof = false;
        self.position = 0;
        self.mark = None;
    }

    /// Skips up to `n` bytes
    ///
    /// Returns `Ok(None)` when already at the end, mirroring the end-of-input
    /// read.
    pub fn skip(&mut self, n: u64) -> io::Result<Option<u64>> {
        if self.eof {
            return Err(io::Error::new(io::ErrorKind::Other, "Skip after end of file"));
        }
        if self.position == self.size {
            self.end_of_file()?;
            return Ok(None);
        }
        let skipped = n.min(self.size - self.position);
        self.position += skipped;
        Ok(Some(skipped))
    }

    fn end_of_file(&mut self) -> io::Result<()> {
        self.eof = true;
        if self.throw_eof {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "End of file"));
        }
        Ok(())
    }
}

impl<G: ByteGenerator> Read for NullReader<G> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.eof {
            return Err(io::Error::new(io::ErrorKind::Other, "Read after end of file"));
        }
        if self.position == self.size {
            self.end_of_file()?;
            return Ok(0);
        }

        let available = self.size - self.position;
        let n = usize::try_from(available).map_or(buf.len(), |a| a.min(buf.len()));
        for (offset, byte) in buf[..n].iter_mut().enumerate() {
            *byte = self.generator.byte_at(self.position + offset as u64);
        }
        self.position += n as u64;
        Ok(n)
    }
}

impl<G: ByteGenerator> Mark for NullReader<G> {
    fn mark_supported(&self) -> bool {
        self.mark_supported
    }

    fn mark(&mut self, read_limit: usize) -> io::Result<()> {
        if !self.mark_supported {
            return Err(mark_not_supported());
        }
        self.mark = Some(self.position);
        self.read_limit = read_limit as u64;
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        if !self.mark_supported {
            return Err(mark_not_supported());
        }
        let mark = self.mark.ok_or_else(no_mark)?;
        if self.position > mark.saturating_add(self.read_limit) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!(
                    "Marked position [{}] is no longer valid - passed the read limit [{}]",
                    mark, self.read_limit
                ),
            ));
        }
        self.position = mark;
        self.eof = false;
        Ok(())
    }
}
