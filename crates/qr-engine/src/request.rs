//! Request parameter validation.
//!
//! The `data` length bound is checked on the escaped form, before the
//! path-style percent-decode. A missing or unparseable `size` silently falls
//! back to the default, while an explicit out-of-range value is rejected.

use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::{
    DATA_MAX_LENGTH, DEFAULT_IMAGE_SIZE, EngineError, IMAGE_MAX_SIZE, IMAGE_MIN_SIZE,
    ValidationError,
};

/// A validated QR generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Decoded text to encode in the symbol.
    pub text: String,
    /// Side length of the square output image in pixels.
    pub output_size: u32,
}

impl GenerationRequest {
    /// Build a request from the raw `data` and `size` query values.
    pub fn from_raw(data: Option<&str>, size: Option<&str>) -> Result<Self, EngineError> {
        let raw = match data {
            Some(d) if !d.is_empty() => d,
            _ => return Err(ValidationError::DataMissing.into()),
        };
        if raw.len() > DATA_MAX_LENGTH {
            return Err(ValidationError::DataTooLong.into());
        }

        let text = path_unescape(raw)?;
        let output_size = parse_size(size)?;

        debug!(len = text.len(), output_size, "Validated generation request");
        Ok(Self { text, output_size })
    }
}

fn parse_size(raw: Option<&str>) -> Result<u32, ValidationError> {
    // Sign prefixes are not part of the accepted syntax.
    let parsed = raw
        .filter(|s| !s.starts_with('+'))
        .and_then(|s| s.parse::<u64>().ok());
    let Some(size) = parsed else {
        return Ok(DEFAULT_IMAGE_SIZE);
    };

    if size > IMAGE_MAX_SIZE {
        return Err(ValidationError::SizeTooBig);
    }
    if size < IMAGE_MIN_SIZE {
        return Err(ValidationError::SizeTooSmall);
    }
    // Bounded by IMAGE_MAX_SIZE above.
    Ok(size as u32)
}

/// Strict decode of one query-string component: `+` is a space, then the
/// same escape rules as the path-style decode apply.
pub fn query_unescape(raw: &str) -> Result<String, EngineError> {
    path_unescape(&raw.replace('+', " "))
}

/// Strict percent-decode: every `%` must start a two-digit hex escape and
/// the result must be UTF-8. `+` is left as-is.
fn path_unescape(raw: &str) -> Result<String, EngineError> {
    let bytes = raw.as_bytes();
    for (i, _) in raw.match_indices('%') {
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(EngineError::Decode(format!("invalid escape at byte {i}")));
        }
    }

    percent_decode_str(raw)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| EngineError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_err(data: Option<&str>, size: Option<&str>) -> ValidationError {
        match GenerationRequest::from_raw(data, size) {
            Err(EngineError::Validation(v)) => v,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn missing_data_is_rejected() {
        assert_eq!(validation_err(None, None), ValidationError::DataMissing);
        assert_eq!(validation_err(Some(""), Some("300")), ValidationError::DataMissing);
    }

    #[test]
    fn data_length_bound_is_inclusive() {
        let ok = "a".repeat(DATA_MAX_LENGTH);
        let req = GenerationRequest::from_raw(Some(&ok), None).unwrap();
        assert_eq!(req.text.len(), DATA_MAX_LENGTH);

        let too_long = "a".repeat(DATA_MAX_LENGTH + 1);
        assert_eq!(
            validation_err(Some(&too_long), None),
            ValidationError::DataTooLong
        );
    }

    #[test]
    fn length_is_measured_before_decoding() {
        // 255 escaped bytes decode to 85 characters, still accepted.
        let escaped = "%41".repeat(85);
        let req = GenerationRequest::from_raw(Some(&escaped), None).unwrap();
        assert_eq!(req.text, "A".repeat(85));

        // 258 escaped bytes decode to 86 characters, rejected on the raw length.
        let escaped = "%41".repeat(86);
        assert_eq!(validation_err(Some(&escaped), None), ValidationError::DataTooLong);
    }

    #[test]
    fn data_is_percent_decoded() {
        let req = GenerationRequest::from_raw(Some("hello%20world%21"), None).unwrap();
        assert_eq!(req.text, "hello world!");

        let req = GenerationRequest::from_raw(Some("caf%C3%A9"), None).unwrap();
        assert_eq!(req.text, "café");
    }

    #[test]
    fn plus_is_kept_literally() {
        let req = GenerationRequest::from_raw(Some("a+b"), None).unwrap();
        assert_eq!(req.text, "a+b");
    }

    #[test]
    fn malformed_escape_is_a_decode_error() {
        for data in ["%zz", "abc%", "abc%4", "%%41"] {
            let err = GenerationRequest::from_raw(Some(data), None).unwrap_err();
            assert!(matches!(err, EngineError::Decode(_)), "{data}: {err:?}");
        }
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let err = GenerationRequest::from_raw(Some("%FF%FE"), None).unwrap_err();
        assert!(matches!(err, EngineError::Decode(_)));
    }

    #[test]
    fn decode_error_wins_over_size_error() {
        let err = GenerationRequest::from_raw(Some("%zz"), Some("5000")).unwrap_err();
        assert!(matches!(err, EngineError::Decode(_)));
    }

    #[test]
    fn query_unescape_turns_plus_into_space() {
        assert_eq!(query_unescape("a+b%2Bc").unwrap(), "a b+c");
        assert_eq!(query_unescape("%2541").unwrap(), "%41");
        assert!(matches!(query_unescape("%zz"), Err(EngineError::Decode(_))));
    }

    #[test]
    fn absent_or_unparseable_size_uses_default() {
        let sizes = [
            None,
            Some(""),
            Some("abc"),
            Some("-5"),
            Some("+500"),
            Some("+50"),
            Some("12.5"),
            Some("99999999999999999999999"),
        ];
        for size in sizes {
            let req = GenerationRequest::from_raw(Some("x"), size).unwrap();
            assert_eq!(req.output_size, DEFAULT_IMAGE_SIZE, "{size:?}");
        }
    }

    #[test]
    fn explicit_size_out_of_range_is_rejected() {
        assert_eq!(validation_err(Some("x"), Some("50")), ValidationError::SizeTooSmall);
        assert_eq!(validation_err(Some("x"), Some("99")), ValidationError::SizeTooSmall);
        assert_eq!(validation_err(Some("x"), Some("0")), ValidationError::SizeTooSmall);
        assert_eq!(validation_err(Some("x"), Some("1001")), ValidationError::SizeTooBig);
        assert_eq!(validation_err(Some("x"), Some("2000")), ValidationError::SizeTooBig);
    }

    #[test]
    fn size_bounds_are_inclusive() {
        for (raw, expected) in [("100", 100), ("1000", 1000), ("500", 500)] {
            let req = GenerationRequest::from_raw(Some("x"), Some(raw)).unwrap();
            assert_eq!(req.output_size, expected);
        }
    }
}
