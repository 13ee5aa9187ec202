use serde_json::Value;

/// Decoded answer to a bridge call.
///
/// The host replies with text. If that text parses as JSON the caller
/// gets the structured value; if not, the raw text is passed through
/// unchanged. A decode failure is never a protocol failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Json(Value),
    Text(String),
}

impl Response {
    /// Decode a raw success payload.
    pub fn decode(raw: String) -> Self {
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => Response::Json(value),
            Err(_) => Response::Text(raw),
        }
    }

    /// The fixed answer every call gets when no host is attached.
    pub fn mock_ok() -> Self {
        Response::Json(serde_json::json!({ "success": true }))
    }

    /// Whether the response follows the `success: true` convention.
    pub fn is_success(&self) -> bool {
        matches!(self.field("success"), Some(Value::Bool(true)))
    }

    /// Look up a top-level field of a structured response.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Response::Json(Value::Object(map)) => map.get(name),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Response::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_text_decodes_to_structured_value() {
        let response = Response::decode(r#"{"success":true}"#.to_string());
        assert_eq!(response, Response::Json(json!({"success": true})));
        assert!(response.is_success());
    }

    #[test]
    fn non_json_text_passes_through_unchanged() {
        let response = Response::decode("ok".to_string());
        assert_eq!(response, Response::Text("ok".to_string()));
        assert_eq!(response.as_text(), Some("ok"));
        assert!(!response.is_success());
    }

    #[test]
    fn mock_ok_is_the_success_object() {
        assert_eq!(Response::mock_ok(), Response::Json(json!({"success": true})));
    }

    #[test]
    fn success_false_is_not_success() {
        let response = Response::decode(r#"{"success":false}"#.to_string());
        assert!(!response.is_success());
    }

    #[test]
    fn field_lookup_on_non_object_is_none() {
        let response = Response::decode("[1,2,3]".to_string());
        assert!(response.field("success").is_none());
    }

    #[test]
    fn bare_json_scalars_still_decode() {
        // Mirrors the permissive decode: any valid JSON counts, not only objects.
        assert_eq!(Response::decode("42".to_string()), Response::Json(json!(42)));
        assert_eq!(
            Response::decode("\"ok\"".to_string()),
            Response::Json(json!("ok"))
        );
    }
}
