//! Object identifier conversion
//!
//! Converts the raw value octets of a BER OBJECT IDENTIFIER into the usual
//! dotted-decimal string form (e.g. `1.2.840.113549`).

use crate::error::{PkixError, PkixResult};

/// Convert raw OBJECT IDENTIFIER value octets to a dotted-decimal string.
///
/// The octets are a sequence of base-128 subidentifiers, most significant
/// group first, with the high bit set on every octet except the last of
/// each subidentifier. The first subidentifier combines the two leading
/// arcs: values below 40 belong to arc 0, below 80 to arc 1, everything
/// else to arc 2.
///
/// # Errors
///
/// Returns `InvalidOid` for an empty value, a subidentifier that overflows
/// `u64`, or a final subidentifier whose continuation bit is still set.
pub fn to_string(octets: &[u8]) -> PkixResult<String> {
    if octets.is_empty() {
        return Err(PkixError::InvalidOid("empty value"));
    }

    let mut out = String::new();
    let mut sub: u64 = 0;
    let mut first = true;
    let mut continued = false;

    for &octet in octets {
        sub = sub
            .checked_mul(128)
            .and_then(|s| s.checked_add(u64::from(octet & 0x7f)))
            .ok_or(PkixError::InvalidOid("subidentifier overflow"))?;
        continued = octet & 0x80 != 0;
        if continued {
            continue;
        }

        if first {
            let (arc0, arc1) = if sub < 40 {
                (0, sub)
            } else if sub < 80 {
                (1, sub - 40)
            } else {
                (2, sub - 80)
            };
            out.push_str(&format!("{}.{}", arc0, arc1));
            first = false;
        } else {
            out.push_str(&format!(".{}", sub));
        }
        sub = 0;
    }

    if continued {
        return Err(PkixError::InvalidOid("truncated subidentifier"));
    }
    Ok(out)
}
