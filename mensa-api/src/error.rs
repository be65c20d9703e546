use serde_json::Value;

/// Error taxonomy for API calls.
///
/// Callers surface exactly one user-visible message per failed call and
/// never retry automatically; on [`ApiError::Unauthorized`] they also
/// clear the stored session.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport failure - could not reach the server.
    #[error("could not reach the server: {0}")]
    Network(#[from] reqwest::Error),

    /// 401/403 - the token is missing, expired or insufficient.
    #[error("not authorized - please log in again")]
    Unauthorized,

    /// Any other non-success status, with the message extracted from
    /// the JSON error body.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response from the server: {0}")]
    Decode(String),
}

/// Extract a user-facing message from a JSON error body.
///
/// The backend reports errors as `{"detail": "..."}` or
/// `{"non_field_errors": ["..."]}`; anything else falls back to a
/// generic message.
pub(crate) fn extract_message(body: &str) -> String {
    const FALLBACK: &str = "the request was rejected by the server";

    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return FALLBACK.to_string();
    };
    if let Some(detail) = json.get("detail").and_then(Value::as_str) {
        return detail.to_string();
    }
    if let Some(errors) = json.get("non_field_errors").and_then(Value::as_array) {
        let joined: Vec<&str> = errors.iter().filter_map(Value::as_str).collect();
        if !joined.is_empty() {
            return joined.join("; ");
        }
    }
    // Field-level rejections come back as {"field": ["message"]}.
    if let Some(object) = json.as_object() {
        for (field, messages) in object {
            if let Some(first) = messages
                .as_array()
                .and_then(|m| m.first())
                .and_then(Value::as_str)
            {
                return format!("{field}: {first}");
            }
        }
    }
    FALLBACK.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_detail() {
        assert_eq!(
            extract_message(r#"{"detail": "Giriş bilgileri hatalı."}"#),
            "Giriş bilgileri hatalı."
        );
    }

    #[test]
    fn joins_non_field_errors() {
        assert_eq!(
            extract_message(r#"{"non_field_errors": ["a", "b"]}"#),
            "a; b"
        );
    }

    #[test]
    fn names_field_errors() {
        assert_eq!(
            extract_message(r#"{"email": ["already in use"]}"#),
            "email: already in use"
        );
    }

    #[test]
    fn falls_back_on_garbage() {
        assert_eq!(
            extract_message("<html>502</html>"),
            "the request was rejected by the server"
        );
    }
}
