//! pkix - X.509/CMS parsing building blocks
//!
//! This library provides the byte-level BER/DER machinery certificate and
//! message-syntax parsers are built on.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `pkix-core`: Error handling and the OID/time value converters
//! - `pkix-io`: Sequential byte source/sink abstraction
//! - `pkix-ber`: BER/DER TLV codec (stream and buffer decoders, the TL
//!   encoder family, typed value parsers)
//!
//! # Usage
//!
//! ```no_run
//! use pkix::ber::Cursor;
//!
//! # fn demo(data: &[u8]) -> pkix::PkixResult<()> {
//! let mut cur = Cursor::new(data);
//! let tbs = cur.read_sequence()?;
//! let oid = cur.read_object_id()?;
//! # Ok(())
//! # }
//! ```

// Re-export core types
pub use pkix_core::{PkixError, PkixResult, HEADER_TOO_LARGE, PREMATURE_EOF};
pub use pkix_core::{oid, time};

// Re-export the codec API
pub mod ber {
    pub use pkix_ber::*;
}

// Re-export the byte I/O layer
pub mod io {
    pub use pkix_io::*;
}
