//! # Embedded-Form Scanner
//!
//! Finds an order number inside widget template text such as
//! `foo{"ordernumber":"ORD001"}bar`.
//!
//! Grammar, scanning left to right:
//!
//! ```text
//! match      := KEYWORD delimiters value
//! KEYWORD    := "ordernumber"                 (ASCII case-insensitive)
//! delimiters := DELIM (DELIM | SPACE)*
//! DELIM      := ' | " | : | \
//! value      := (any char except TERM)+       (trimmed, must be non-empty)
//! TERM       := ' | " | } | & | \' | \"
//! ```
//!
//! A lone backslash inside the value is kept; only an escaped quote ends it.
//!
//! The first keyword occurrence that forms a complete match wins. An
//! occurrence that does not (no delimiter, or a blank value) is skipped and
//! scanning resumes after it.

use super::errors::{ExtractError, ExtractResult};

const KEYWORD: &[u8] = b"ordernumber";

fn is_delimiter(b: u8) -> bool {
    matches!(b, b'\'' | b'"' | b':' | b'\\')
}

/// Length of the value at the start of `rest`
fn value_len(rest: &[u8]) -> usize {
    let mut len = 0;
    while let Some(&b) = rest.get(len) {
        match b {
            b'\'' | b'"' | b'}' | b'&' => break,
            b'\\' if matches!(rest.get(len + 1), Some(b'\'' | b'"')) => break,
            _ => len += 1,
        }
    }
    len
}

/// Extract the order number from an embedded-form token
pub fn extract_embedded(raw: &str) -> ExtractResult<String> {
    let mut from = 0;
    while let Some(start) = find_keyword(raw.as_bytes(), from) {
        if let Some(value) = capture_value(raw, start + KEYWORD.len()) {
            return Ok(value.to_string());
        }
        from = start + 1;
    }
    Err(ExtractError::InvalidQueryFormat)
}

/// Byte offset of the next keyword at or after `from`
fn find_keyword(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(KEYWORD.len())
        .position(|window| window.eq_ignore_ascii_case(KEYWORD))
        .map(|offset| from + offset)
}

/// Consume delimiters at `pos`, then capture up to the next terminator.
///
/// All boundaries fall next to ASCII bytes, so slicing `raw` is safe.
fn capture_value(raw: &str, pos: usize) -> Option<&str> {
    let rest = raw.as_bytes().get(pos..)?;
    if !rest.first().copied().is_some_and(is_delimiter) {
        return None;
    }

    let delimiters = rest
        .iter()
        .take_while(|&&b| is_delimiter(b) || b.is_ascii_whitespace())
        .count();
    let value_start = pos + delimiters;
    let value_len = value_len(&raw.as_bytes()[value_start..]);

    let value = raw[value_start..value_start + value_len].trim();
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_json_fragment() {
        assert_eq!(extract_embedded(r#""ordernumber":"ORD001""#).unwrap(), "ORD001");
    }

    #[test]
    fn test_surrounding_template_text() {
        assert_eq!(
            extract_embedded(r#"foo{"ordernumber":"ORD001"}bar"#).unwrap(),
            "ORD001"
        );
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        assert_eq!(extract_embedded(r#"{"OrderNumber":"ORD002"}"#).unwrap(), "ORD002");
        assert_eq!(extract_embedded(r#"{"ORDERNUMBER":"ORD002"}"#).unwrap(), "ORD002");
    }

    #[test]
    fn test_value_case_is_preserved() {
        assert_eq!(extract_embedded(r#"ordernumber:"ord001""#).unwrap(), "ord001");
    }

    #[test]
    fn test_unquoted_value_stops_at_terminators() {
        assert_eq!(extract_embedded("ordernumber:ORD003&apikey=x").unwrap(), "ORD003");
        assert_eq!(extract_embedded("{ordernumber:ORD003}").unwrap(), "ORD003");
        assert_eq!(extract_embedded("ordernumber'ORD003'").unwrap(), "ORD003");
    }

    #[test]
    fn test_value_runs_to_end_of_input() {
        assert_eq!(extract_embedded("ordernumber:ORD004").unwrap(), "ORD004");
    }

    #[test]
    fn test_value_is_trimmed() {
        assert_eq!(extract_embedded(r#"ordernumber:"  ORD005  ""#).unwrap(), "ORD005");
    }

    #[test]
    fn test_whitespace_after_colon() {
        assert_eq!(
            extract_embedded(r#"{"ordernumber": "ORD006"}"#).unwrap(),
            "ORD006"
        );
    }

    #[test]
    fn test_colons_inside_value_are_kept() {
        assert_eq!(extract_embedded("ordernumber::A:B}").unwrap(), "A:B");
    }

    #[test]
    fn test_escaped_quotes() {
        assert_eq!(
            extract_embedded(r#"{\"ordernumber\":\"ORD007\"}"#).unwrap(),
            "ORD007"
        );
    }

    #[test]
    fn test_backslash_inside_value_is_kept() {
        assert_eq!(extract_embedded(r#"ordernumber:"AB\CD""#).unwrap(), r"AB\CD");
        assert_eq!(extract_embedded(r"ordernumber:AB\CD&x=1").unwrap(), r"AB\CD");
        // Escaped quote still closes the value
        assert_eq!(extract_embedded(r#"ordernumber:\"AB\CD\""#).unwrap(), r"AB\CD");
    }

    #[test]
    fn test_nested_braces() {
        assert_eq!(
            extract_embedded(r#"{"meta":{"ordernumber":"ORD008"},"x":{}}"#).unwrap(),
            "ORD008"
        );
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            extract_embedded(r#"ordernumber:"A1" ordernumber:"B2""#).unwrap(),
            "A1"
        );
    }

    #[test]
    fn test_incomplete_occurrence_is_skipped() {
        // First occurrence has no delimiter, second is blank, third matches
        assert_eq!(
            extract_embedded(r#"ordernumbers ordernumber:""&ordernumber:"C3""#).unwrap(),
            "C3"
        );
    }

    #[test]
    fn test_no_keyword() {
        assert_eq!(
            extract_embedded("ORD001"),
            Err(ExtractError::InvalidQueryFormat)
        );
    }

    #[test]
    fn test_keyword_without_value() {
        assert_eq!(
            extract_embedded(r#"{"ordernumber":""}"#),
            Err(ExtractError::InvalidQueryFormat)
        );
        assert_eq!(
            extract_embedded("ordernumber"),
            Err(ExtractError::InvalidQueryFormat)
        );
        assert_eq!(
            extract_embedded("ordernumber ORD001"),
            Err(ExtractError::InvalidQueryFormat)
        );
    }

    #[test]
    fn test_widget_placeholder_form() {
        // The raw, unsubstituted widget template carries no assignment
        assert_eq!(
            extract_embedded("{ordernumber}:{{global_custom.Zoomllv.ordernumber}}"),
            Err(ExtractError::InvalidQueryFormat)
        );
    }

    #[test]
    fn test_multibyte_text_around_match() {
        assert_eq!(
            extract_embedded(r#"注文{"ordernumber":"注文001"}です"#).unwrap(),
            "注文001"
        );
    }
}
