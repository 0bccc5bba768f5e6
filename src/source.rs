//! Peekable byte source.
//!
//! The interface-typed decode path needs to read one code byte, decide the
//! wire does not hold a string, and hand that byte back so the generic
//! decoder sees the stream untouched. Raw transports are not assumed to be
//! rewindable, so [`ByteSource`] keeps a one-byte pushback buffer of its
//! own: [`ByteSource::unread_byte`] re-queues the most recently read byte,
//! and only that byte.

use std::io::Read;

use crate::error::{PackError, Result};

/// Byte reader with one byte of pushback.
#[derive(Debug)]
pub struct ByteSource<R> {
    inner: R,
    /// Byte pushed back by `unread_byte`, returned by the next read.
    pushback: Option<u8>,
    /// Most recently consumed byte, eligible for one pushback.
    last: Option<u8>,
}

impl<R: Read> ByteSource<R> {
    /// Wrap a reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pushback: None,
            last: None,
        }
    }

    /// Read a single byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        if let Some(b) = self.pushback.take() {
            self.last = Some(b);
            return Ok(b);
        }
        let mut buf = [0u8; 1];
        self.inner.read_exact(&mut buf)?;
        self.last = Some(buf[0]);
        Ok(buf[0])
    }

    /// Push the most recently read byte back so the next read returns it
    /// again. At most one byte can be outstanding.
    pub fn unread_byte(&mut self) -> Result<()> {
        match self.last.take() {
            Some(b) => {
                self.pushback = Some(b);
                Ok(())
            }
            None => Err(PackError::NothingToUnread),
        }
    }

    /// Fill `buf` exactly, honoring any pushback byte first.
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut start = 0;
        if let Some(b) = self.pushback.take() {
            if buf.is_empty() {
                self.pushback = Some(b);
                return Ok(());
            }
            buf[0] = b;
            start = 1;
        }
        self.inner.read_exact(&mut buf[start..])?;
        if let Some(&b) = buf.last() {
            self.last = Some(b);
        }
        Ok(())
    }

    /// Read `n` bytes into a fresh buffer.
    pub fn read_n(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Read a big-endian `u16`.
    pub fn read_u16(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Read a big-endian `u32`.
    pub fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }

    /// Read a big-endian `u64`.
    pub fn read_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.read_exact(&mut buf)?;
        Ok(u64::from_be_bytes(buf))
    }
}
