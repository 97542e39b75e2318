//! Byte source trait for sequential decoding

use pkix_core::{PkixError, PkixResult};
use std::io;

/// Outcome of a single read from a [`ByteSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadEvent {
    /// The leading `n` bytes of the buffer were filled (`n > 0`).
    Bytes(usize),
    /// No bytes are available right now, but the source is not exhausted.
    /// The caller should retry.
    Pending,
    /// True end of input.
    Eof,
}

/// Sequential byte source interface for the stream decoder
///
/// A source delivers bytes in order and distinguishes three conditions:
/// bytes delivered, nothing available yet (retry), and end of input. Hard
/// source failures are returned as [`PkixError::Read`] and are expected to
/// be sticky: once a source has failed, later reads keep failing.
pub trait ByteSource {
    /// Read up to `buf.len()` bytes into `buf`.
    fn read(&mut self, buf: &mut [u8]) -> PkixResult<ReadEvent>;
}

/// Byte source over an in-memory slice
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Number of bytes handed out so far.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl ByteSource for SliceSource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> PkixResult<ReadEvent> {
        let rest = &self.data[self.pos..];
        if rest.is_empty() {
            return Ok(ReadEvent::Eof);
        }
        if buf.is_empty() {
            return Ok(ReadEvent::Pending);
        }
        let n = rest.len().min(buf.len());
        buf[..n].copy_from_slice(&rest[..n]);
        self.pos += n;
        Ok(ReadEvent::Bytes(n))
    }
}

/// Byte source over any [`std::io::Read`]
///
/// `Ok(0)` from the inner reader maps to [`ReadEvent::Eof`];
/// `WouldBlock` and `Interrupted` map to [`ReadEvent::Pending`]. The first
/// hard error is latched, and every later read reports it again.
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
    failed: Option<io::ErrorKind>,
}

impl<R: io::Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            failed: None,
        }
    }

    /// The latched error kind, if a read has failed.
    pub fn last_error(&self) -> Option<io::ErrorKind> {
        self.failed
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: io::Read> ByteSource for IoSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> PkixResult<ReadEvent> {
        if let Some(kind) = self.failed {
            return Err(PkixError::Read(io::Error::from(kind)));
        }
        match self.inner.read(buf) {
            Ok(0) if buf.is_empty() => Ok(ReadEvent::Pending),
            Ok(0) => Ok(ReadEvent::Eof),
            Ok(n) => Ok(ReadEvent::Bytes(n)),
            Err(e) if matches!(
                e.kind(),
                io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
            ) =>
            {
                Ok(ReadEvent::Pending)
            }
            Err(e) => {
                self.failed = Some(e.kind());
                Err(PkixError::Read(e))
            }
        }
    }
}
