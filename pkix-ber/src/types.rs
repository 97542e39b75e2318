//! BER header types (tag class, header record, raw header buffer)

use pkix_core::{PkixError, PkixResult, HEADER_TOO_LARGE};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Universal tag numbers used by the typed parsers.
pub const TAG_BOOLEAN: u32 = 1;
pub const TAG_INTEGER: u32 = 2;
pub const TAG_BIT_STRING: u32 = 3;
pub const TAG_OCTET_STRING: u32 = 4;
pub const TAG_NULL: u32 = 5;
pub const TAG_OBJECT_ID: u32 = 6;
pub const TAG_ENUMERATED: u32 = 10;
pub const TAG_SEQUENCE: u32 = 16;
pub const TAG_SET: u32 = 17;
pub const TAG_UTC_TIME: u32 = 23;
pub const TAG_GENERALIZED_TIME: u32 = 24;

/// Maximum number of octets a tag+length header may occupy.
///
/// Exceeding this is a hard parse failure with the
/// [`HEADER_TOO_LARGE`](pkix_core::HEADER_TOO_LARGE) diagnostic.
pub const MAX_HEADER_LEN: usize = 16;

/// BER tag class, from bits 7-6 of the first header octet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagClass {
    #[default]
    Universal = 0,
    Application = 1,
    Context = 2,
    Private = 3,
}

impl TagClass {
    /// Extract the class from a first header octet.
    pub fn from_octet(octet: u8) -> Self {
        match (octet >> 6) & 0x03 {
            0 => TagClass::Universal,
            1 => TagClass::Application,
            2 => TagClass::Context,
            _ => TagClass::Private,
        }
    }

    /// The class bits, positioned for a first header octet.
    pub fn to_bits(self) -> u8 {
        (self as u8) << 6
    }
}

/// The literal tag+length octets of one decoded or encoded header
///
/// A bounded inline buffer: `push` itself reports capacity exhaustion, so
/// no call site needs a separate index check, and the stored length can
/// never exceed [`MAX_HEADER_LEN`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HeaderBytes {
    buf: [u8; MAX_HEADER_LEN],
    len: u8,
}

impl HeaderBytes {
    /// Append one octet.
    ///
    /// # Errors
    ///
    /// `MalformedBer(HEADER_TOO_LARGE)` when the buffer is full.
    pub fn push(&mut self, octet: u8) -> PkixResult<()> {
        let at = usize::from(self.len);
        if at == MAX_HEADER_LEN {
            return Err(PkixError::MalformedBer(HEADER_TOO_LARGE));
        }
        self.buf[at] = octet;
        self.len += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..usize::from(self.len)]
    }
}

impl AsRef<[u8]> for HeaderBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl TryFrom<&[u8]> for HeaderBytes {
    type Error = PkixError;

    fn try_from(octets: &[u8]) -> PkixResult<Self> {
        let mut out = HeaderBytes::default();
        for &octet in octets {
            out.push(octet)?;
        }
        Ok(out)
    }
}

impl fmt::Debug for HeaderBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for octet in self.as_slice() {
            write!(f, "{:02x}", octet)?;
        }
        Ok(())
    }
}

impl Serialize for HeaderBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_slice())
    }
}

impl<'de> Deserialize<'de> for HeaderBytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HeaderBytesVisitor;

        impl<'de> Visitor<'de> for HeaderBytesVisitor {
            type Value = HeaderBytes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "at most {} header octets", MAX_HEADER_LEN)
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<HeaderBytes, E> {
                HeaderBytes::try_from(v).map_err(|_| E::invalid_length(v.len(), &self))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<HeaderBytes, A::Error> {
                let mut out = HeaderBytes::default();
                while let Some(octet) = seq.next_element::<u8>()? {
                    out.push(octet)
                        .map_err(|_| de::Error::invalid_length(MAX_HEADER_LEN + 1, &self))?;
                }
                Ok(out)
            }
        }

        deserializer.deserialize_bytes(HeaderBytesVisitor)
    }
}

/// Decoded tag+length header of one TLV record
///
/// Produced fresh by every decode call; the caller owns it outright. The
/// `length` field is meaningful only when `ndef` is false: an
/// indefinite-length header always carries `length == 0` and is flagged
/// `non_der`. The raw header octets are kept for diagnostics and
/// re-encoding; their count (`nhdr`) is the number of bytes the decoder
/// consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlvHeader {
    /// Tag number within its class. Multi-byte tags accumulate seven bits
    /// per continuation octet; overflow wraps silently.
    pub tag: u32,
    pub class: TagClass,
    /// Bit 5 of the first octet.
    pub constructed: bool,
    /// Number of value octets. Valid only when `ndef` is false.
    pub length: usize,
    /// True when the length octet was the indefinite-length marker.
    pub ndef: bool,
    /// True when the encoding uses a feature forbidden under strict DER.
    pub non_der: bool,
    /// The literal header octets consumed.
    pub raw: HeaderBytes,
}

impl TlvHeader {
    /// Count of header octets consumed (tag octets + length octets).
    pub fn nhdr(&self) -> usize {
        self.raw.len()
    }

    /// True when class, tag number and constructed-bit all match.
    pub fn is(&self, class: TagClass, tag: u32, constructed: bool) -> bool {
        self.class == class && self.tag == tag && self.constructed == constructed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_class_from_octet() {
        assert_eq!(TagClass::from_octet(0x02), TagClass::Universal);
        assert_eq!(TagClass::from_octet(0x60), TagClass::Application);
        assert_eq!(TagClass::from_octet(0xa3), TagClass::Context);
        assert_eq!(TagClass::from_octet(0xdf), TagClass::Private);
    }

    #[test]
    fn class_bits_round_trip() {
        for class in [
            TagClass::Universal,
            TagClass::Application,
            TagClass::Context,
            TagClass::Private,
        ] {
            assert_eq!(TagClass::from_octet(class.to_bits()), class);
        }
    }

    #[test]
    fn header_bytes_push_reports_capacity() {
        let mut raw = HeaderBytes::default();
        for i in 0..MAX_HEADER_LEN {
            raw.push(i as u8).unwrap();
        }
        assert_eq!(raw.len(), MAX_HEADER_LEN);
        let err = raw.push(0xff).unwrap_err();
        assert_eq!(err.diagnostic(), Some(HEADER_TOO_LARGE));
        // The failed push must not have changed the contents.
        assert_eq!(raw.len(), MAX_HEADER_LEN);
        assert_eq!(raw.as_slice()[MAX_HEADER_LEN - 1], (MAX_HEADER_LEN - 1) as u8);
    }

    #[test]
    fn header_bytes_try_from_slice() {
        let raw = HeaderBytes::try_from(&[0x30u8, 0x82, 0x01, 0x00][..]).unwrap();
        assert_eq!(raw.as_slice(), &[0x30, 0x82, 0x01, 0x00]);
        assert!(HeaderBytes::try_from(&[0u8; MAX_HEADER_LEN + 1][..]).is_err());
    }

    #[test]
    fn header_matches_expectation() {
        let hdr = TlvHeader {
            tag: TAG_SEQUENCE,
            class: TagClass::Universal,
            constructed: true,
            ..Default::default()
        };
        assert!(hdr.is(TagClass::Universal, TAG_SEQUENCE, true));
        assert!(!hdr.is(TagClass::Universal, TAG_SEQUENCE, false));
        assert!(!hdr.is(TagClass::Context, TAG_SEQUENCE, true));
    }
}
