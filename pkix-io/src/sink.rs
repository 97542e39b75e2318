//! Byte sink trait for sequential encoding

use bytes::{BufMut, BytesMut};
use pkix_core::{PkixError, PkixResult};
use std::io::Write;

/// Sequential byte sink interface for the encoder
pub trait ByteSink {
    /// Append all of `data` to the sink.
    fn write(&mut self, data: &[u8]) -> PkixResult<()>;
}

impl ByteSink for Vec<u8> {
    fn write(&mut self, data: &[u8]) -> PkixResult<()> {
        self.extend_from_slice(data);
        Ok(())
    }
}

impl ByteSink for BytesMut {
    fn write(&mut self, data: &[u8]) -> PkixResult<()> {
        self.put_slice(data);
        Ok(())
    }
}

/// Byte sink over any [`std::io::Write`]
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ByteSink for IoSink<W> {
    fn write(&mut self, data: &[u8]) -> PkixResult<()> {
        self.inner.write_all(data).map_err(PkixError::Write)
    }
}
