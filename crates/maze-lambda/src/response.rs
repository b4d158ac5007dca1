//! HTTP-shaped JSON responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body returned for rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A response in the shape HTTP-fronted function hosts expect:
/// `{"statusCode": .., "headers": {..}, "body": "<json string>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

const INTERNAL_ERROR_BODY: &str = r#"{"error":"internal error"}"#;

impl LambdaResponse {
    /// A response with `body` encoded as JSON and a JSON content type.
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self::with_body(status_code, body),
            Err(e) => {
                log::error!("failed to encode response body: {e}");
                Self::with_body(500, INTERNAL_ERROR_BODY.to_owned())
            }
        }
    }

    /// A 400 response carrying `message`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::json(
            400,
            &ErrorBody {
                error: message.into(),
            },
        )
    }

    fn with_body(status_code: u16, body: String) -> Self {
        let headers = BTreeMap::from([("Content-Type".to_owned(), "application/json".to_owned())]);
        Self {
            status_code,
            headers,
            body,
        }
    }

    /// Decode the body back into `T`.
    pub fn parse_body<T: for<'de> Deserialize<'de>>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_shape() {
        let r = LambdaResponse::json(200, &json!({"ok": true}));
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(
            v,
            json!({
                "statusCode": 200,
                "headers": {"Content-Type": "application/json"},
                "body": "{\"ok\":true}"
            })
        );
    }

    #[test]
    fn bad_request_body() {
        let r = LambdaResponse::bad_request("missing field `endNode`");
        assert_eq!(r.status_code, 400);
        let body: ErrorBody = r.parse_body().unwrap();
        assert_eq!(body.error, "missing field `endNode`");
    }
}
