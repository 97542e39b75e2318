//! Typed value parsers
//!
//! Thin validators layered on the buffer TL decoder. Each decodes one
//! header on a probe copy of the cursor, checks the class, tag and
//! constructed-bit expected for its ASN.1 type plus the length
//! constraints, and commits the probe only on full success. The cursor is
//! therefore unmodified on every failure path, and a caller probing for
//! one of several alternatives can retry at the same position. A
//! class/tag/constructed mismatch is `UnexpectedType` ("try the next
//! alternative"), never confused with a malformed encoding.

use crate::decoder::Cursor;
use crate::types::{
    TagClass, TlvHeader, TAG_BOOLEAN, TAG_ENUMERATED, TAG_GENERALIZED_TIME, TAG_INTEGER,
    TAG_NULL, TAG_OBJECT_ID, TAG_OCTET_STRING, TAG_SEQUENCE, TAG_UTC_TIME,
};
use pkix_core::{oid, time, PkixError, PkixResult};

const VALUE_PAST_END: &str = "value exceeds remaining buffer";

impl<'a> Cursor<'a> {
    /// Parse a SEQUENCE header: universal, tag 16, constructed.
    pub fn read_sequence(&mut self) -> PkixResult<TlvHeader> {
        let mut probe = *self;
        let hdr = probe.read_header()?;
        if !hdr.is(TagClass::Universal, TAG_SEQUENCE, true) {
            return Err(PkixError::UnexpectedType);
        }
        if hdr.length > probe.remaining() {
            return Err(PkixError::MalformedBer(VALUE_PAST_END));
        }
        *self = probe;
        Ok(hdr)
    }

    /// Parse a constructed context-specific tag with number `tag`.
    ///
    /// A valid context TLV whose tag number differs is `TagMismatch`, so
    /// the caller can compare against other tag values; anything that is
    /// not a constructed context tag at all is `UnexpectedType`.
    pub fn read_context_tag(&mut self, tag: u32) -> PkixResult<TlvHeader> {
        let mut probe = *self;
        let hdr = probe.read_header()?;
        if !(hdr.class == TagClass::Context && hdr.constructed) {
            return Err(PkixError::UnexpectedType);
        }
        if hdr.length > probe.remaining() {
            return Err(PkixError::MalformedBer(VALUE_PAST_END));
        }
        if hdr.tag != tag {
            return Err(PkixError::TagMismatch);
        }
        *self = probe;
        Ok(hdr)
    }

    /// Parse an ENUMERATED header: universal, tag 10, primitive,
    /// non-empty. `max_len` additionally caps the value length.
    pub fn read_enumerated(&mut self, max_len: Option<usize>) -> PkixResult<TlvHeader> {
        let mut probe = *self;
        let hdr = probe.read_header()?;
        if !hdr.is(TagClass::Universal, TAG_ENUMERATED, false) {
            return Err(PkixError::UnexpectedType);
        }
        if hdr.length == 0 {
            return Err(PkixError::ValueTooShort);
        }
        if max_len.is_some_and(|max| hdr.length > max) {
            return Err(PkixError::LengthTooLarge);
        }
        if hdr.length > probe.remaining() {
            return Err(PkixError::MalformedBer(VALUE_PAST_END));
        }
        *self = probe;
        Ok(hdr)
    }

    /// Parse an INTEGER header: universal, tag 2, primitive, non-empty.
    pub fn read_integer(&mut self) -> PkixResult<TlvHeader> {
        self.read_primitive(TAG_INTEGER)
    }

    /// Parse an OCTET STRING header: universal, tag 4, primitive,
    /// non-empty.
    pub fn read_octet_string(&mut self) -> PkixResult<TlvHeader> {
        self.read_primitive(TAG_OCTET_STRING)
    }

    fn read_primitive(&mut self, tag: u32) -> PkixResult<TlvHeader> {
        let mut probe = *self;
        let hdr = probe.read_header()?;
        if !hdr.is(TagClass::Universal, tag, false) {
            return Err(PkixError::UnexpectedType);
        }
        if hdr.length == 0 {
            return Err(PkixError::ValueTooShort);
        }
        if hdr.length > probe.remaining() {
            return Err(PkixError::MalformedBer(VALUE_PAST_END));
        }
        *self = probe;
        Ok(hdr)
    }

    /// Parse an optional BOOLEAN, value octet included.
    ///
    /// When the next TLV is a primitive universal BOOLEAN its value is
    /// stored in `value` and the cursor moves past header and value. Any
    /// other type is treated as the field being absent: `value` keeps the
    /// caller-seeded default, the cursor stays put, and the result is
    /// still success. A BOOLEAN whose length is not exactly one octet is
    /// malformed, not absent.
    pub fn read_optional_boolean(&mut self, value: &mut bool) -> PkixResult<()> {
        let mut probe = *self;
        let hdr = probe.read_header()?;
        if hdr.length == 0 {
            return Err(PkixError::ValueTooShort);
        }
        if hdr.length > probe.remaining() {
            return Err(PkixError::MalformedBer(VALUE_PAST_END));
        }
        if hdr.is(TagClass::Universal, TAG_BOOLEAN, false) {
            if hdr.length != 1 {
                return Err(PkixError::MalformedBer("boolean of invalid length"));
            }
            *value = probe.read_byte()? != 0;
            *self = probe;
        }
        Ok(())
    }

    /// Parse an optional NULL.
    ///
    /// `seen` is cleared first and set only when a NULL was consumed.
    /// Absence follows the same rules as [`read_optional_boolean`]; a
    /// NULL with a non-zero length is malformed.
    ///
    /// [`read_optional_boolean`]: Cursor::read_optional_boolean
    pub fn read_optional_null(&mut self, seen: &mut bool) -> PkixResult<()> {
        *seen = false;
        let mut probe = *self;
        let hdr = probe.read_header()?;
        if hdr.length > probe.remaining() {
            return Err(PkixError::MalformedBer(VALUE_PAST_END));
        }
        if hdr.is(TagClass::Universal, TAG_NULL, false) {
            if hdr.length != 0 {
                return Err(PkixError::MalformedBer("NULL with a value"));
            }
            *seen = true;
            *self = probe;
        }
        Ok(())
    }

    /// Parse an OBJECT IDENTIFIER into its dotted-string form.
    ///
    /// Consumes header and value octets on success.
    pub fn read_object_id(&mut self) -> PkixResult<String> {
        let mut probe = *self;
        let hdr = probe.read_header()?;
        if !hdr.is(TagClass::Universal, TAG_OBJECT_ID, false) {
            return Err(PkixError::UnexpectedType);
        }
        if hdr.length == 0 {
            return Err(PkixError::ValueTooShort);
        }
        if hdr.length > probe.remaining() {
            return Err(PkixError::MalformedBer(VALUE_PAST_END));
        }
        let oid = oid::to_string(&probe.rest()[..hdr.length])?;
        probe.skip(hdr.length)?;
        *self = probe;
        Ok(oid)
    }

    /// Parse a UTCTime or GeneralizedTime into `YYYYMMDDTHHMMSS` form.
    ///
    /// The tag selects two- vs four-digit year parsing. Consumes header
    /// and value octets on success.
    pub fn read_time(&mut self) -> PkixResult<String> {
        let mut probe = *self;
        let hdr = probe.read_header()?;
        let time_tag = hdr.tag == TAG_UTC_TIME || hdr.tag == TAG_GENERALIZED_TIME;
        if !(hdr.class == TagClass::Universal && time_tag && !hdr.constructed) {
            return Err(PkixError::UnexpectedType);
        }
        if hdr.length > probe.remaining() {
            return Err(PkixError::MalformedBer(VALUE_PAST_END));
        }
        let iso = time::to_iso(&probe.rest()[..hdr.length], hdr.tag == TAG_UTC_TIME)?;
        probe.skip(hdr.length)?;
        *self = probe;
        Ok(iso)
    }
}
