use std::borrow::Cow;

use crate::error::FormatError;

// ---------------------------------------------------------------------------
// Response layout
// ---------------------------------------------------------------------------

/// Every response starts with this marker byte.
pub const HEADER_MARKER: char = '#';

/// Separator between values; the instrument also terminates the list with it.
pub const VALUE_DELIMITER: char = ',';

/// Decode a raw VNA response into its numeric values.
///
/// Layout: `#<N><N header bytes><v0>,<v1>,...,<vk>,`
///
/// * `N` is a single ASCII digit giving the header length in bytes.
/// * The payload is a comma-separated list of float literals, terminated by
///   a trailing comma. The empty segment after that comma is checked and
///   dropped; anything other than whitespace there is an error, since it
///   would be a value the instrument never terminated.
/// * `nan`, `inf` and `infinity` parse as floats but are rejected.
pub fn decode_response(response: &str) -> Result<Vec<f64>, FormatError> {
    let payload = strip_header(response)?;
    parse_values(&payload)
}

/// Remove `#`, the length digit, and the header it announces.
fn strip_header(response: &str) -> Result<Cow<'_, str>, FormatError> {
    let mut chars = response.chars();
    let marker = chars.next().ok_or(FormatError::Empty)?;
    if marker != HEADER_MARKER {
        return Err(FormatError::MissingMarker(marker));
    }
    let digit = chars.next().ok_or(FormatError::Truncated {
        len: response.len(),
        needed: 2,
    })?;
    let header_len = digit
        .to_digit(10)
        .ok_or(FormatError::BadHeaderDigit(digit))? as usize;

    // '#' and the digit are one byte each.
    let start = 2 + header_len;
    let bytes = response.as_bytes();
    if bytes.len() < start {
        return Err(FormatError::Truncated {
            len: bytes.len(),
            needed: start,
        });
    }
    // A header that ends inside a multi-byte character leaves garbage at
    // the front of the payload, which then fails as a bad first value.
    Ok(String::from_utf8_lossy(&bytes[start..]))
}

fn parse_values(payload: &str) -> Result<Vec<f64>, FormatError> {
    let Some((body, tail)) = payload.rsplit_once(VALUE_DELIMITER) else {
        // No delimiter at all: only an empty payload is acceptable.
        return if payload.trim().is_empty() {
            Ok(Vec::new())
        } else {
            Err(FormatError::MissingTrailingDelimiter(payload.to_string()))
        };
    };

    if !tail.trim().is_empty() {
        return Err(FormatError::MissingTrailingDelimiter(tail.to_string()));
    }

    body.split(VALUE_DELIMITER)
        .enumerate()
        .map(|(index, segment)| {
            let value = segment
                .trim()
                .parse::<f64>()
                .map_err(|source| FormatError::BadValue {
                    index,
                    segment: segment.to_string(),
                    source,
                })?;
            // JSON has no representation for NaN or infinities.
            if !value.is_finite() {
                return Err(FormatError::NonFinite {
                    index,
                    segment: segment.to_string(),
                });
            }
            Ok(value)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Encoding (synthetic responses)
// ---------------------------------------------------------------------------

/// Encode `values` in the instrument's response layout.
///
/// Returns `None` when `header` is longer than the 9 bytes a single length
/// digit can announce.
pub fn encode_response(header: &str, values: &[f64]) -> Option<String> {
    if header.len() > 9 {
        return None;
    }
    let mut out = format!("{HEADER_MARKER}{}{header}", header.len());
    for v in values {
        out.push_str(&format!("{v:E}"));
        out.push(VALUE_DELIMITER);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_values_between_header_and_trailing_comma() {
        let values = decode_response("#5xxxxx1.0,2.0,3.0,").unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn decodes_with_nine_byte_header() {
        let values = decode_response("#9000012345+1.0E9,-2.5E-3,").unwrap();
        assert_eq!(values, vec![1.0e9, -2.5e-3]);
    }

    #[test]
    fn zero_length_header() {
        assert_eq!(decode_response("#04.5,").unwrap(), vec![4.5]);
    }

    #[test]
    fn empty_payload_yields_no_values() {
        assert!(decode_response("#3abc").unwrap().is_empty());
    }

    #[test]
    fn tolerates_line_terminator_after_trailing_comma() {
        assert_eq!(decode_response("#11 1.5, 2.5,\n").unwrap(), vec![1.5, 2.5]);
    }

    #[test]
    fn two_digit_header_length_is_not_supported() {
        // '1' announces a single header byte ('5'); the x's are payload.
        let err = decode_response("#15xxxxxxxxxxxxxxx1.0,2.0,3.0,").unwrap_err();
        assert!(matches!(err, FormatError::BadValue { index: 0, .. }));
    }

    #[test]
    fn rejects_missing_marker() {
        let err = decode_response("15xxxxx1.0,").unwrap_err();
        assert!(matches!(err, FormatError::MissingMarker('1')));
    }

    #[test]
    fn rejects_empty_response() {
        assert!(matches!(decode_response(""), Err(FormatError::Empty)));
    }

    #[test]
    fn rejects_non_digit_header_length() {
        let err = decode_response("#Axx1.0,").unwrap_err();
        assert!(matches!(err, FormatError::BadHeaderDigit('A')));
    }

    #[test]
    fn rejects_truncated_header() {
        let err = decode_response("#9abc").unwrap_err();
        assert!(matches!(err, FormatError::Truncated { len: 5, needed: 11 }));

        let err = decode_response("#").unwrap_err();
        assert!(matches!(err, FormatError::Truncated { len: 1, needed: 2 }));
    }

    #[test]
    fn rejects_non_numeric_segment() {
        let err = decode_response("#0 1.0,abc,3.0,").unwrap_err();
        match err {
            FormatError::BadValue { index, segment, .. } => {
                assert_eq!(index, 1);
                assert_eq!(segment, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_finite_values() {
        for (raw, bad_index, bad) in [
            ("#01.0,nan,", 1, "nan"),
            ("#0inf,2.0,", 0, "inf"),
            ("#01.0,2.0, -inf,", 2, " -inf"),
            ("#0Infinity,", 0, "Infinity"),
        ] {
            match decode_response(raw).unwrap_err() {
                FormatError::NonFinite { index, segment } => {
                    assert_eq!(index, bad_index, "{raw}");
                    assert_eq!(segment, bad, "{raw}");
                }
                other => panic!("{raw}: unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_empty_segment_in_body() {
        let err = decode_response("#01.0,,2.0,").unwrap_err();
        assert!(matches!(err, FormatError::BadValue { index: 1, .. }));
    }

    #[test]
    fn rejects_missing_trailing_delimiter() {
        let err = decode_response("#01.0,2.0").unwrap_err();
        assert!(matches!(err, FormatError::MissingTrailingDelimiter(ref s) if s == "2.0"));

        let err = decode_response("#07.0").unwrap_err();
        assert!(matches!(err, FormatError::MissingTrailingDelimiter(_)));
    }

    #[test]
    fn encoded_values_decode_back() {
        let values = [1.5e9, -0.001234, 0.0, 3.0, 6.02214076e23, -7.5e-12];
        let raw = encode_response("HDR", &values).unwrap();
        assert!(raw.starts_with("#3HDR"));
        assert!(raw.ends_with(','));

        let decoded = decode_response(&raw).unwrap();
        assert_eq!(decoded.len(), values.len());
        for (a, b) in decoded.iter().zip(values.iter()) {
            assert!((a - b).abs() <= f64::EPSILON * b.abs());
        }
    }

    #[test]
    fn encode_refuses_oversized_header() {
        assert!(encode_response("0123456789", &[1.0]).is_none());
    }
}
