//! TL encoder family
//!
//! Three ways to emit one tag+length header: append to a [`ByteSink`],
//! write into a caller-supplied buffer, or just count the octets to
//! pre-size a buffer. All three run the same header builder, so the count
//! always agrees byte-for-byte with what the other two produce.

use crate::types::{HeaderBytes, TagClass, TAG_NULL};
use pkix_core::{PkixError, PkixResult};
use pkix_io::ByteSink;

/// Build the header octets once; every public variant instantiates this.
///
/// Branching rules: universal tag 0 (the end-of-contents marker) and the
/// universal NULL tag always take a single zero length octet, whatever
/// `length` says; a zero `length` on any other tag means indefinite; the
/// short form covers lengths below 128; everything else gets the minimal
/// 1-4 big-endian length octets behind a count octet.
fn build_header(
    tag: u32,
    class: TagClass,
    constructed: bool,
    length: usize,
) -> PkixResult<HeaderBytes> {
    let mut out = HeaderBytes::default();

    if tag >= 0x1f {
        // No high-tag-number form on the encoding side.
        return Err(PkixError::NotImplemented);
    }
    let mut first = class.to_bits() | tag as u8;
    if constructed {
        first |= 0x20;
    }
    out.push(first)?;

    if tag == 0 && class == TagClass::Universal {
        out.push(0)?; // end-of-contents marker
    } else if tag == TAG_NULL && class == TagClass::Universal {
        out.push(0)?; // NULL carries no value
    } else if length == 0 {
        out.push(0x80)?; // indefinite length
    } else if length < 128 {
        out.push(length as u8)?;
    } else {
        if length > u32::MAX as usize {
            return Err(PkixError::LengthTooLarge);
        }
        let count = if length <= 0xff {
            1
        } else if length <= 0xffff {
            2
        } else if length <= 0xff_ffff {
            3
        } else {
            4
        };
        out.push(0x80 | count as u8)?;
        for shift in (0..count).rev() {
            out.push((length >> (8 * shift)) as u8)?;
        }
    }

    Ok(out)
}

/// Append an encoded TL header to `sink`.
///
/// A failure from the underlying write is returned unchanged.
pub fn write_header<W: ByteSink + ?Sized>(
    sink: &mut W,
    tag: u32,
    class: TagClass,
    constructed: bool,
    length: usize,
) -> PkixResult<()> {
    let hdr = build_header(tag, class, constructed, length)?;
    sink.write(hdr.as_slice())
}

/// Encode a TL header into the front of `buf`, returning the octet count.
///
/// Size `buf` with [`count_header`] first; a buffer that cannot hold the
/// encoding is `BufferTooSmall`.
pub fn encode_header(
    buf: &mut [u8],
    tag: u32,
    class: TagClass,
    constructed: bool,
    length: usize,
) -> PkixResult<usize> {
    let hdr = build_header(tag, class, constructed, length)?;
    let out = buf
        .get_mut(..hdr.len())
        .ok_or(PkixError::BufferTooSmall)?;
    out.copy_from_slice(hdr.as_slice());
    Ok(hdr.len())
}

/// Count the octets a TL header encoding will occupy, without writing.
pub fn count_header(
    tag: u32,
    class: TagClass,
    constructed: bool,
    length: usize,
) -> PkixResult<usize> {
    Ok(build_header(tag, class, constructed, length)?.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Cursor;
    use crate::types::TAG_INTEGER;

    const CLASSES: [TagClass; 4] = [
        TagClass::Universal,
        TagClass::Application,
        TagClass::Context,
        TagClass::Private,
    ];

    const LENGTHS: [usize; 10] = [
        0, 1, 127, 128, 255, 256, 65535, 65536, 16777215, 16777216,
    ];

    #[test]
    fn count_agrees_with_encode_and_decode_round_trips() {
        for tag in 0..=30u32 {
            for class in CLASSES {
                for constructed in [false, true] {
                    for length in LENGTHS {
                        let mut encoded = Vec::new();
                        write_header(&mut encoded, tag, class, constructed, length).unwrap();

                        let counted = count_header(tag, class, constructed, length).unwrap();
                        assert_eq!(counted, encoded.len(), "count mismatch for {:?}/{}/{}/{}", class, tag, constructed, length);

                        let mut buf = [0u8; 8];
                        let written =
                            encode_header(&mut buf, tag, class, constructed, length).unwrap();
                        assert_eq!(&buf[..written], &encoded[..]);

                        let mut cur = Cursor::new(&encoded);
                        let hdr = cur.read_header().unwrap();
                        assert_eq!(cur.position(), encoded.len());
                        assert_eq!(hdr.class, class);
                        assert_eq!(hdr.tag, tag);
                        assert_eq!(hdr.constructed, constructed);

                        if class == TagClass::Universal && (tag == 0 || tag == TAG_NULL) {
                            // Single zero length octet, decoded as length 0.
                            assert_eq!(encoded[1], 0);
                            assert_eq!(hdr.length, 0);
                            assert!(!hdr.ndef);
                        } else if length == 0 {
                            // Indefinite marker.
                            assert_eq!(encoded[1], 0x80);
                            assert!(hdr.ndef && hdr.non_der);
                            assert_eq!(hdr.length, 0);
                        } else {
                            assert_eq!(hdr.length, length);
                            assert!(!hdr.ndef);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn minimal_length_octets() {
        let mut buf = [0u8; 8];
        let n = encode_header(&mut buf, 4, TagClass::Universal, false, 127).unwrap();
        assert_eq!(&buf[..n], &[0x04, 0x7f]);
        let n = encode_header(&mut buf, 4, TagClass::Universal, false, 128).unwrap();
        assert_eq!(&buf[..n], &[0x04, 0x81, 0x80]);
        let n = encode_header(&mut buf, 4, TagClass::Universal, false, 256).unwrap();
        assert_eq!(&buf[..n], &[0x04, 0x82, 0x01, 0x00]);
        let n = encode_header(&mut buf, 4, TagClass::Universal, false, 16777216).unwrap();
        assert_eq!(&buf[..n], &[0x04, 0x84, 0x01, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn constructed_bit_and_class_bits() {
        let mut buf = [0u8; 8];
        let n = encode_header(&mut buf, 16, TagClass::Universal, true, 3).unwrap();
        assert_eq!(&buf[..n], &[0x30, 0x03]);
        let n = encode_header(&mut buf, 3, TagClass::Context, true, 5).unwrap();
        assert_eq!(&buf[..n], &[0xa3, 0x05]);
    }

    #[test]
    fn null_and_end_markers_ignore_length() {
        let mut buf = [0u8; 8];
        let n = encode_header(&mut buf, TAG_NULL, TagClass::Universal, false, 999).unwrap();
        assert_eq!(&buf[..n], &[0x05, 0x00]);
        let n = encode_header(&mut buf, 0, TagClass::Universal, false, 999).unwrap();
        assert_eq!(&buf[..n], &[0x00, 0x00]);
        // Context-class tag 0 is an ordinary tag, not the end marker.
        let n = encode_header(&mut buf, 0, TagClass::Context, true, 5).unwrap();
        assert_eq!(&buf[..n], &[0xa0, 0x05]);
    }

    #[test]
    fn high_tag_numbers_are_not_implemented() {
        let mut buf = [0u8; 8];
        let mut sink = Vec::new();
        assert!(matches!(
            write_header(&mut sink, 31, TagClass::Universal, false, 1),
            Err(PkixError::NotImplemented)
        ));
        assert!(sink.is_empty());
        assert!(matches!(
            encode_header(&mut buf, 31, TagClass::Universal, false, 1),
            Err(PkixError::NotImplemented)
        ));
        assert!(matches!(
            count_header(31, TagClass::Universal, false, 1),
            Err(PkixError::NotImplemented)
        ));
    }

    #[test]
    fn target_buffer_too_small() {
        let mut buf = [0u8; 2];
        assert!(matches!(
            encode_header(&mut buf, TAG_INTEGER, TagClass::Universal, false, 300),
            Err(PkixError::BufferTooSmall)
        ));
    }

    #[test]
    fn oversized_length_is_rejected_not_truncated() {
        if size_of::<usize>() > 4 {
            let mut sink = Vec::new();
            assert!(matches!(
                write_header(
                    &mut sink,
                    4,
                    TagClass::Universal,
                    false,
                    (u32::MAX as usize) + 1
                ),
                Err(PkixError::LengthTooLarge)
            ));
        }
    }
}
