//! Stream TL decoder
//!
//! Decodes one tag+length header at a time from a sequential
//! [`ByteSource`]. The source may block, deliver short reads, or report
//! "nothing yet"; a read that delivers neither bytes nor an error is
//! retried, never treated as end of input.

use crate::types::{TagClass, TlvHeader};
use log::trace;
use pkix_core::{PkixError, PkixResult};
use pkix_io::{ByteSource, ReadEvent};

/// Read one byte, retrying reads that deliver nothing without error.
///
/// `Ok(None)` is true end of input. A source error is returned as-is.
fn read_byte<S: ByteSource + ?Sized>(src: &mut S) -> PkixResult<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match src.read(&mut buf)? {
            ReadEvent::Bytes(_) => return Ok(Some(buf[0])),
            ReadEvent::Pending => continue,
            ReadEvent::Eof => return Ok(None),
        }
    }
}

/// Decode the tag and length of the next TLV record from `src`.
///
/// End of input before the first header octet is `EndOfInput`, the
/// caller's loop terminator rather than a fault. End of input after any header
/// octet is `PrematureEof`: a partial header can never be valid. A source
/// error is propagated ahead of either classification.
pub fn read_header<S: ByteSource + ?Sized>(src: &mut S) -> PkixResult<TlvHeader> {
    let mut hdr = TlvHeader::default();

    let first = match read_byte(src)? {
        Some(octet) => octet,
        None => return Err(PkixError::EndOfInput),
    };
    hdr.raw.push(first)?;
    hdr.class = TagClass::from_octet(first);
    hdr.constructed = first & 0x20 != 0;

    let mut tag = u32::from(first & 0x1f);
    if tag == 0x1f {
        tag = 0;
        loop {
            // Overflow of the accumulated tag number wraps silently.
            let octet = read_byte(src)?.ok_or(PkixError::PrematureEof)?;
            hdr.raw.push(octet)?;
            tag = (tag << 7) | u32::from(octet & 0x7f);
            if octet & 0x80 == 0 {
                break;
            }
        }
    }
    hdr.tag = tag;

    let octet = read_byte(src)?.ok_or(PkixError::PrematureEof)?;
    hdr.raw.push(octet)?;

    if octet & 0x80 == 0 {
        hdr.length = usize::from(octet);
    } else if octet == 0x80 {
        hdr.ndef = true;
        hdr.non_der = true;
    } else if octet == 0xff {
        return Err(PkixError::MalformedBer("forbidden length value"));
    } else {
        let count = usize::from(octet & 0x7f);
        if count > size_of::<usize>() {
            return Err(PkixError::MalformedBer("oversized length count"));
        }
        let mut len: usize = 0;
        for _ in 0..count {
            let octet = read_byte(src)?.ok_or(PkixError::PrematureEof)?;
            hdr.raw.push(octet)?;
            len = (len << 8) | usize::from(octet);
        }
        hdr.length = len;
    }

    if hdr.raw.len().checked_add(hdr.length).is_none() {
        return Err(PkixError::LengthOverflow);
    }

    // Some deployed certificates carry a broken header here; a universal
    // tag 0 always counts as zero-length.
    if hdr.class == TagClass::Universal && hdr.tag == 0 {
        hdr.length = 0;
    }

    trace!(
        "TL {:?}/{} constructed={} length={} ndef={}",
        hdr.class, hdr.tag, hdr.constructed, hdr.length, hdr.ndef
    );
    Ok(hdr)
}
