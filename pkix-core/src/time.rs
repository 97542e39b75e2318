//! ASN.1 time normalization
//!
//! Converts the raw value octets of a UTCTime or GeneralizedTime into the
//! normalized `YYYYMMDDTHHMMSS` form used throughout the certificate
//! parsers.

use crate::error::{PkixError, PkixResult};

/// Convert UTCTime/GeneralizedTime value octets to `YYYYMMDDTHHMMSS`.
///
/// `utc_form` selects the two-digit-year UTCTime layout; years below 50
/// map to 20xx, the rest to 19xx. GeneralizedTime carries a four-digit
/// year. Seconds are optional and default to `00`; a fractional-seconds
/// part is accepted and discarded. The only zone designator accepted is a
/// trailing `Z` (or none at all); the certificate profiles this feeds
/// require Zulu time.
pub fn to_iso(octets: &[u8], utc_form: bool) -> PkixResult<String> {
    let mut rest = octets;

    let year = if utc_form {
        let yy = take_digits2(&mut rest)?;
        if yy < 50 { 2000 + yy } else { 1900 + yy }
    } else {
        let hi = take_digits2(&mut rest)?;
        let lo = take_digits2(&mut rest)?;
        hi * 100 + lo
    };

    let month = take_digits2(&mut rest)?;
    let day = take_digits2(&mut rest)?;
    let hour = take_digits2(&mut rest)?;
    let minute = take_digits2(&mut rest)?;

    let second = if rest.first().is_some_and(|b| b.is_ascii_digit()) {
        take_digits2(&mut rest)?
    } else {
        0
    };

    if matches!(rest.first(), Some(&(b'.' | b','))) {
        rest = &rest[1..];
        let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return Err(PkixError::InvalidTime("empty fractional part"));
        }
        rest = &rest[digits..];
    }

    match rest {
        [] | [b'Z'] => {}
        _ => return Err(PkixError::InvalidTime("trailing garbage or non-Z zone")),
    }

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(PkixError::InvalidTime("date out of range"));
    }
    if hour > 23 || minute > 59 || second > 59 {
        return Err(PkixError::InvalidTime("time of day out of range"));
    }

    Ok(format!(
        "{:04}{:02}{:02}T{:02}{:02}{:02}",
        year, month, day, hour, minute, second
    ))
}

/// Consume exactly two ASCII digits from the front of `rest`.
fn take_digits2(rest: &mut &[u8]) -> PkixResult<u32> {
    if rest.len() < 2 || !rest[0].is_ascii_digit() || !rest[1].is_ascii_digit() {
        return Err(PkixError::InvalidTime("expected two digits"));
    }
    let value = u32::from(rest[0] - b'0') * 10 + u32::from(rest[1] - b'0');
    *rest = &rest[2..];
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_time_with_seconds_and_zulu() {
        assert_eq!(to_iso(b"250807123045Z", true).unwrap(), "20250807T123045");
    }

    #[test]
    fn utc_time_year_pivot() {
        assert_eq!(to_iso(b"4901011200Z", true).unwrap(), "20490101T120000");
        assert_eq!(to_iso(b"5001011200Z", true).unwrap(), "19500101T120000");
    }

    #[test]
    fn utc_time_without_seconds_defaults_to_zero() {
        assert_eq!(to_iso(b"9912312359Z", true).unwrap(), "19991231T235900");
    }

    #[test]
    fn generalized_time_four_digit_year() {
        assert_eq!(
            to_iso(b"20250807123045Z", false).unwrap(),
            "20250807T123045"
        );
    }

    #[test]
    fn generalized_time_fraction_is_discarded() {
        assert_eq!(
            to_iso(b"20250807123045.123Z", false).unwrap(),
            "20250807T123045"
        );
    }

    #[test]
    fn rejects_offset_zone() {
        assert!(matches!(
            to_iso(b"250807123045+0100", true),
            Err(PkixError::InvalidTime(_))
        ));
    }

    #[test]
    fn rejects_empty_and_short_values() {
        assert!(to_iso(b"", true).is_err());
        assert!(to_iso(b"2508", true).is_err());
        assert!(to_iso(b"20250807", false).is_err());
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(matches!(
            to_iso(b"251307123045Z", true),
            Err(PkixError::InvalidTime("date out of range"))
        ));
        assert!(matches!(
            to_iso(b"250807250045Z", true),
            Err(PkixError::InvalidTime("time of day out of range"))
        ));
    }
}
