use thiserror::Error;

/// Diagnostic text for a header that ended before its length was complete.
///
/// Calling code compares against this string verbatim; it must not change.
pub const PREMATURE_EOF: &str = "premature EOF";

/// Diagnostic text for a tag+length header exceeding the fixed header
/// capacity.
///
/// Calling code compares against this string verbatim; it must not change.
pub const HEADER_TOO_LARGE: &str = "tag+length header too large";

/// Main error type for pkix operations
#[derive(Error, Debug)]
pub enum PkixError {
    /// Clean end of input at a header boundary, with no header bytes
    /// consumed. Stream decoding only; callers loop until they see this.
    #[error("end of input")]
    EndOfInput,

    /// Input ended or the buffer was exhausted in the middle of a
    /// tag+length header. Always fatal to the current parse attempt.
    #[error("premature EOF")]
    PrematureEof,

    /// The underlying byte source reported an error.
    #[error("read error: {0}")]
    Read(#[source] std::io::Error),

    /// The underlying byte sink reported an error.
    #[error("write error: {0}")]
    Write(#[source] std::io::Error),

    /// Structurally invalid BER encoding.
    #[error("malformed BER: {0}")]
    MalformedBer(&'static str),

    /// Header size plus decoded length does not fit the size arithmetic.
    #[error("header+length would overflow")]
    LengthOverflow,

    /// Decoded length exceeds the sanity ceiling or a caller-supplied
    /// maximum.
    #[error("length too large")]
    LengthTooLarge,

    /// A type requiring non-empty content decoded a zero length.
    #[error("value too short")]
    ValueTooShort,

    /// Decoded class/tag/constructed-bit does not match the expectation of
    /// a typed parser. Callers may probe an alternative interpretation.
    #[error("unexpected type")]
    UnexpectedType,

    /// Valid context-tag TLV, but the tag number differs from the expected
    /// one. Distinct from [`PkixError::UnexpectedType`] for tagged-choice
    /// dispatch.
    #[error("tag mismatch")]
    TagMismatch,

    /// The requested encoding is not supported (tag numbers >= 31).
    #[error("not implemented")]
    NotImplemented,

    /// The caller-supplied target buffer cannot hold the encoding.
    #[error("target buffer too small")]
    BufferTooSmall,

    /// The value octets are not a valid object identifier.
    #[error("invalid object identifier: {0}")]
    InvalidOid(&'static str),

    /// The value octets are not a valid UTCTime/GeneralizedTime.
    #[error("invalid time: {0}")]
    InvalidTime(&'static str),
}

impl PkixError {
    /// Stable diagnostic text for the kinds whose message callers match
    /// verbatim.
    pub fn diagnostic(&self) -> Option<&'static str> {
        match self {
            PkixError::PrematureEof => Some(PREMATURE_EOF),
            PkixError::MalformedBer(s) => Some(s),
            PkixError::Read(_) => Some("read error"),
            _ => None,
        }
    }
}

/// Result type alias for pkix operations
pub type PkixResult<T> = Result<T, PkixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premature_eof_text_is_stable() {
        assert_eq!(PkixError::PrematureEof.to_string(), PREMATURE_EOF);
        assert_eq!(PkixError::PrematureEof.diagnostic(), Some(PREMATURE_EOF));
    }

    #[test]
    fn header_too_large_text_is_stable() {
        let err = PkixError::MalformedBer(HEADER_TOO_LARGE);
        assert_eq!(err.diagnostic(), Some(HEADER_TOO_LARGE));
        assert_eq!(err.to_string(), "malformed BER: tag+length header too large");
    }

    #[test]
    fn read_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err = PkixError::Read(io);
        assert_eq!(err.diagnostic(), Some("read error"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
