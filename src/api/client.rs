use super::error::ApiError;
use super::types::{GenerationRequest, GenerationResult, HealthStatus, RoleList};
use reqwest::{Client as ReqwestClient, Response};
use serde::de::DeserializeOwned;

/// Base URL used when `API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Client for the inventory backend.
///
/// No timeout or retry is configured; a request is bounded only by the
/// transport. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: ReqwestClient,
}

impl ApiClient {
    /// Creates a client for `base_url`. A trailing `/` is ignored.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_http(base_url, ReqwestClient::new())
    }

    /// Creates a client that reuses an existing reqwest client.
    pub fn with_http(base_url: impl Into<String>, http: ReqwestClient) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /roles?invokable_only=...`
    ///
    /// A body without `items` yields an empty list.
    pub async fn list_roles(&self, invokable_only: bool) -> Result<RoleList, ApiError> {
        let url = self.url("/roles");
        tracing::debug!(%url, invokable_only, "listing roles");
        let response = self
            .http
            .get(&url)
            .query(&[("invokable_only", invokable_only)])
            .send()
            .await?;
        let roles: RoleList = decode(response).await?;
        tracing::debug!(
            received = roles.items.len(),
            reported = ?roles.count,
            "roles received"
        );
        Ok(roles)
    }

    /// `POST /generate/inventory`
    pub async fn generate_inventory(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ApiError> {
        let url = self.url("/generate/inventory");
        tracing::debug!(
            %url,
            host = %request.host,
            style = %request.style,
            ignored = request.ignore.len(),
            "requesting inventory"
        );
        let response = self.http.post(&url).json(request).send().await?;
        decode(response).await
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self.http.get(self.url("/health")).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status,
            detail: error_detail(status, &body),
        });
    }
    Ok(response.json().await?)
}

/// Extracts a readable message from an error body.
///
/// FastAPI-style `{"detail": ...}` bodies are unwrapped, anything else is
/// returned as-is.
pub(crate) fn error_detail(status: reqwest::StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string();
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => match map.get("detail") {
            Some(serde_json::Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
            None => body.to_string(),
        },
        _ => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/roles"), "http://localhost:8000/roles");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_error_detail_from_fastapi_body() {
        let detail = error_detail(
            StatusCode::BAD_REQUEST,
            r#"{"detail":"style must be 'group' or 'hostvars'"}"#,
        );
        assert_eq!(detail, "style must be 'group' or 'hostvars'");
    }

    #[test]
    fn test_error_detail_non_string_detail() {
        let detail = error_detail(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":[{"loc":["body","host"]}]}"#,
        );
        assert!(detail.contains("host"));
    }

    #[test]
    fn test_error_detail_plain_and_empty_body() {
        assert_eq!(
            error_detail(StatusCode::BAD_GATEWAY, "upstream down"),
            "upstream down"
        );
        assert_eq!(
            error_detail(StatusCode::INTERNAL_SERVER_ERROR, "  "),
            "Internal Server Error"
        );
    }
}
