//! HTTP transport for the Comandas BFF API

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Notice used when an auth rejection carries no message body.
const INVALID_CREDENTIALS: &str = "Usuário ou senha inválidos";

/// HTTP client for network requests against the BFF
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request with query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        tracing::debug!(path, "GET");
        let response = self.client.get(self.url(path)).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with query parameters and a JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "PUT");
        let response = self
            .client
            .put(self.url(path))
            .query(query)
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request with query parameters. The success body is
    /// an ack whose content is ignored; it may be empty or non-JSON.
    pub async fn delete(&self, path: &str, query: &[(&str, String)]) -> ClientResult<()> {
        tracing::debug!(path, "DELETE");
        let response = self
            .client
            .delete(self.url(path))
            .query(query)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        response.text().await?;
        Ok(())
    }

    /// Parse a successful response as JSON.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Into::into)
    }

    /// Classify the HTTP status. Error payloads of the BFF shape
    /// (`{"error": ...}` or `{"erro": ...}`) become the error message.
    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = remote_error_message(&text);
        tracing::warn!(%status, "request rejected");
        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(
                message.unwrap_or_else(|| INVALID_CREDENTIALS.to_string()),
            )),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(message.unwrap_or(text))),
            StatusCode::BAD_REQUEST => Err(ClientError::Validation(message.unwrap_or(text))),
            _ => Err(ClientError::Internal(message.unwrap_or(text))),
        }
    }
}

/// Extract the message of a BFF error payload, if the body carries one.
fn remote_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "erro"]
        .iter()
        .find_map(|key| value.get(key))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
