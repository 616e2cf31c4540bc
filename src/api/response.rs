use reqwest::{Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use super::error::ApiError;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

pub async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(ApiError::Decode)
}

/// Turns a non-2xx response into an [`ApiError::Status`], preferring the
/// backend `detail` over the generic status line.
pub async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = extract_detail(&body).unwrap_or_else(|| generic_status_message(status));
    ApiError::Status { status, message }
}

pub fn generic_status_message(status: StatusCode) -> String {
    let reason = status.canonical_reason().unwrap_or("");
    format!("Error {}: {}", status.as_u16(), reason)
        .trim_end()
        .to_string()
}

/// `detail` is a plain string for application errors and a list of
/// `{loc, msg, type}` objects for request validation failures.
fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
