//! # Structured-Form Decoder
//!
//! Decodes a URL-escaped JSON object such as `%7B%22ordernumber%22%3A%221001%22%7D`.

use percent_encoding::percent_decode_str;
use serde_json::Value;

use super::errors::{ExtractError, ExtractResult};

/// Field carrying the order number
pub const ORDER_NUMBER_FIELD: &str = "ordernumber";

/// Extract the order number from a structured-form token
pub fn extract_structured(raw: &str) -> ExtractResult<String> {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|e| ExtractError::BadQueryJson(e.to_string()))?;

    let value: Value =
        serde_json::from_str(&decoded).map_err(|e| ExtractError::BadQueryJson(e.to_string()))?;

    match value.get(ORDER_NUMBER_FIELD) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        // Widgets sometimes send numeric order numbers unquoted
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(ExtractError::MissingOrderNumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_escaped_object() {
        assert_eq!(
            extract_structured("%7B%22ordernumber%22%3A%221001%22%7D").unwrap(),
            "1001"
        );
    }

    #[test]
    fn test_already_decoded_object() {
        assert_eq!(extract_structured(r#"{"ordernumber":"ORD001"}"#).unwrap(), "ORD001");
    }

    #[test]
    fn test_numeric_order_number() {
        assert_eq!(extract_structured(r#"{"ordernumber":1001}"#).unwrap(), "1001");
    }

    #[test]
    fn test_extra_fields_ignored() {
        assert_eq!(
            extract_structured(r#"{"name":"x","ordernumber":" ORD002 ","n":[1,2]}"#).unwrap(),
            "ORD002"
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            extract_structured("%7Bnot-json%7D"),
            Err(ExtractError::BadQueryJson(_))
        ));
        assert!(matches!(
            extract_structured(r#"ordernumber":"ORD001"#),
            Err(ExtractError::BadQueryJson(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_escape() {
        assert!(matches!(
            extract_structured("%FF%FE"),
            Err(ExtractError::BadQueryJson(_))
        ));
    }

    #[test]
    fn test_missing_or_empty_field() {
        assert_eq!(
            extract_structured(r#"{"order":"ORD001"}"#),
            Err(ExtractError::MissingOrderNumber)
        );
        assert_eq!(
            extract_structured(r#"{"ordernumber":""}"#),
            Err(ExtractError::MissingOrderNumber)
        );
        assert_eq!(
            extract_structured(r#"{"ordernumber":null}"#),
            Err(ExtractError::MissingOrderNumber)
        );
    }

    #[test]
    fn test_field_name_is_exact() {
        assert_eq!(
            extract_structured(r#"{"OrderNumber":"ORD001"}"#),
            Err(ExtractError::MissingOrderNumber)
        );
    }

    #[test]
    fn test_non_object_json() {
        assert_eq!(
            extract_structured(r#"["ORD001"]"#),
            Err(ExtractError::MissingOrderNumber)
        );
        assert_eq!(
            extract_structured("42"),
            Err(ExtractError::MissingOrderNumber)
        );
    }
}
