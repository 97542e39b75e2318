//! Core types and utilities for X.509/CMS parsing
//!
//! This crate provides the shared error type and the value converters
//! (object identifier and ASN.1 time normalization) used by the BER codec
//! and the structure parsers built on top of it.

pub mod error;
pub mod oid;
pub mod time;

pub use error::{PkixError, PkixResult, HEADER_TOO_LARGE, PREMATURE_EOF};
