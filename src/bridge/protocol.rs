use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One request frame: `{id, method, params}`.
///
/// `params` may be an array (spread positionally), a single object (fields
/// matched by parameter name), or absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// One response frame: `{id, result}` on success, `{id, error}` on failure.
/// `id` echoes the request's, or is `null` for transport-level failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Response {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Value, message: impl Into<String>) -> Self {
        Self {
            id,
            result: None,
            error: Some(ResponseError {
                message: message.into(),
                details: None,
            }),
        }
    }

    pub fn failure_with_details(id: Value, message: impl Into<String>, details: Value) -> Self {
        Self {
            id,
            result: None,
            error: Some(ResponseError {
                message: message.into(),
                details: Some(details),
            }),
        }
    }
}
