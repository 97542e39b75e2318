//! BER (Basic Encoding Rules) TLV codec for ASN.1 structures
//!
//! This crate decodes and encodes the tag+length prefix ("TL") of BER/DER
//! TLV records, and layers typed value parsers on top of the raw decoder.
//! It is the byte-level foundation the certificate and message-syntax
//! parsers are built on, and it assumes the input is attacker-controlled:
//! malformed encodings are rejected without reading out of bounds or
//! overflowing length arithmetic.
//!
//! # TLV Encoding Overview
//!
//! Each BER value is a TLV (Tag-Length-Value) triplet:
//!
//! ```text
//! [Tag] [Length] [Value]
//! ```
//!
//! First tag octet, bits 8..1: two class bits, one constructed bit, five
//! tag-number bits (`0b11111` escapes into the multi-byte form, each
//! continuation octet contributing seven bits). The length octet is either
//! a literal (high bit clear), the indefinite-length marker `0x80` (legal
//! in BER, flagged as non-DER here), the forbidden value `0xFF`, or a
//! long-form count of big-endian length octets.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use pkix_ber::Cursor;
//!
//! # fn demo(data: &[u8]) -> pkix_ber::PkixResult<()> {
//! let mut cur = Cursor::new(data);
//! let seq = cur.read_sequence()?;
//! let serial = cur.read_integer()?;
//! cur.skip(serial.length)?;
//! # Ok(())
//! # }
//! ```

pub mod decoder;
pub mod encoder;
pub mod stream;
pub mod types;

mod parse;

pub use decoder::{Cursor, MAX_VALUE_LEN};
pub use pkix_core::{PkixError, PkixResult};
pub use types::{HeaderBytes, TagClass, TlvHeader, MAX_HEADER_LEN};
pub use types::{
    TAG_BIT_STRING, TAG_BOOLEAN, TAG_ENUMERATED, TAG_GENERALIZED_TIME, TAG_INTEGER, TAG_NULL,
    TAG_OBJECT_ID, TAG_OCTET_STRING, TAG_SEQUENCE, TAG_SET, TAG_UTC_TIME,
};
