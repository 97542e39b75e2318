//! Sequential byte I/O for the pkix codec
//!
//! This crate provides the byte source and sink abstractions consumed by
//! the BER codec, with in-memory and `std::io`-backed implementations.

pub mod sink;
pub mod source;

pub use pkix_core::{PkixError, PkixResult};
pub use sink::{ByteSink, IoSink};
pub use source::{ByteSource, IoSource, ReadEvent, SliceSource};
