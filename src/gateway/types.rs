//! Wire types for the `/api/ask` exchange.

use serde::{Deserialize, Serialize};

/// Request body: `{ "query": "..." }`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AskRequest {
    pub query: String,
}

/// Success body: `{ "response": "..." }`. Extra fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AskResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_query_field() {
        let body = serde_json::to_value(AskRequest {
            query: "What's for lunch?".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "query": "What's for lunch?" }));
    }

    #[test]
    fn response_ignores_unknown_fields() {
        let parsed: AskResponse =
            serde_json::from_str(r#"{"response":"<b>Ford</b> is open","events":[]}"#).unwrap();
        assert_eq!(parsed.response, "<b>Ford</b> is open");
    }

    #[test]
    fn response_requires_string_field() {
        assert!(serde_json::from_str::<AskResponse>(r#"{"answer":"x"}"#).is_err());
        assert!(serde_json::from_str::<AskResponse>(r#"{"response":null}"#).is_err());
    }
}
