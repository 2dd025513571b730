use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use business::domain::errors::GatewayError;

const MAX_MESSAGE_LEN: usize = 200;

/// Sends the request and turns transport failures and non-2xx answers into errors.
pub(crate) async fn send(request: RequestBuilder) -> Result<Response, GatewayError> {
    let response = request
        .send()
        .await
        .map_err(|e| GatewayError::network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::status(status.as_u16(), error_message(status, &body)))
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| GatewayError::network(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| GatewayError::decode(e.to_string()))
}

/// Best human-readable reason for a failed call: the server's `message`/`error`
/// field, else the raw body, else the canonical status text.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        let field = ["message", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()));
        if let Some(message) = field {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string();
    }

    trimmed.chars().take(MAX_MESSAGE_LEN).collect()
}
