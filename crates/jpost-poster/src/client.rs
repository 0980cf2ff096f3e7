use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::PosterError;

const USER_AGENT: &str = "jpost/0.1 (journal-router)";

/// Builds the shared outbound HTTP client.
///
/// # Errors
///
/// Returns [`PosterError::Http`] if the underlying `reqwest::Client`
/// cannot be constructed (e.g., invalid TLS config).
pub fn build_http_client(timeout_secs: u64) -> Result<Client, PosterError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Sends a request, asserts a 2xx status, and decodes the JSON body.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, reqwest::Error> {
    request.send().await?.error_for_status()?.json::<T>().await
}

/// Reads an identifier that upstreams may encode as a string or a number.
pub(crate) fn id_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn id_string_accepts_strings_and_numbers() {
        assert_eq!(id_string(&json!("abc")), Some("abc".to_string()));
        assert_eq!(id_string(&json!(42)), Some("42".to_string()));
    }

    #[test]
    fn id_string_rejects_other_shapes() {
        assert_eq!(id_string(&json!("")), None);
        assert_eq!(id_string(&json!(null)), None);
        assert_eq!(id_string(&json!({"id": 1})), None);
    }

    #[test]
    fn build_http_client_succeeds() {
        assert!(build_http_client(5).is_ok());
    }
}
