//! Pylon API client.
//!
//! [`PylonApi`] is the seam between tool dispatch and the network. The
//! production implementation, [`PylonClient`], sends each [`ApiRequest`] with
//! reqwest and a bearer token; tests substitute their own implementation.

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, Url, header::ACCEPT};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::endpoint::ApiRequest;
use super::error::ApiError;

/// Default base URL of the Pylon REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.usepylon.com";

/// Executes resolved requests against the Pylon API.
#[async_trait]
pub trait PylonApi: Send + Sync {
    /// Send the request and return the decoded JSON body.
    ///
    /// An empty success body decodes to `Value::Null`.
    async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// reqwest-backed Pylon API client.
///
/// The token and base URL are fixed at construction.
#[derive(Clone)]
pub struct PylonClient {
    http: Client,
    base_url: Url,
    api_token: String,
}

impl PylonClient {
    /// Create a client for the given token and base URL.
    pub fn new(api_token: impl Into<String>, base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = Client::builder()
            .user_agent(concat!("pylon-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_token: api_token.into(),
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(&request.segments);
        url.set_query(request.query_string()?.as_deref());
        Ok(url)
    }
}

impl fmt::Debug for PylonClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PylonClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl PylonApi for PylonClient {
    #[instrument(skip_all, fields(verb = %request.verb, path = %request.path()))]
    async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = self.url_for(&request)?;
        debug!("Sending request to {}", url);

        let mut builder = self
            .http
            .request(request.verb.into(), url)
            .bearer_auth(&self.api_token)
            .header(ACCEPT, "application/json");

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), &text);
            warn!("{}", err);
            return Err(err);
        }

        debug!("Received {} ({} bytes)", status, text.len());

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::pylon::Endpoint;
    use mockito::Matcher;
    use serde_json::{Map, json};

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test arguments must be an object"),
        }
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            PylonClient::new("token", "not a url"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            PylonClient::new("token", "mailto:support@example.com"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = PylonClient::new("secret_token_123", DEFAULT_BASE_URL).unwrap();
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("secret_token_123"));
    }

    #[test]
    fn test_url_encodes_segments_and_keeps_base_path() {
        let client = PylonClient::new("token", "https://api.example.com/v1/").unwrap();
        let request = Endpoint::get("teams/{team_id}")
            .build(&args(json!({ "team_id": "a/b c" })))
            .unwrap();

        let url = client.url_for(&request).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/teams/a%2Fb%20c");
    }

    #[tokio::test]
    async fn test_get_sends_bearer_token_and_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/contacts")
            .match_header("authorization", "Bearer test-token")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("search".into(), "ada".into()),
                Matcher::UrlEncoded("limit".into(), "2".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data":[{"id":"c1"}]}"#)
            .create_async()
            .await;

        let client = PylonClient::new("test-token", &server.url()).unwrap();
        let request = Endpoint::get("contacts")
            .with_query(&["search", "limit"])
            .build(&args(json!({ "search": "ada", "limit": 2 })))
            .unwrap();

        let value = client.execute(request).await.unwrap();
        assert_eq!(value, json!({ "data": [{ "id": "c1" }] }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/issues/iss_1/messages")
            .match_header("authorization", "Bearer test-token")
            .match_body(Matcher::Json(json!({ "content": "hello" })))
            .with_status(201)
            .with_body(r#"{"id":"m1","content":"hello"}"#)
            .create_async()
            .await;

        let client = PylonClient::new("test-token", &server.url()).unwrap();
        let request = Endpoint::post("issues/{issue_id}/messages")
            .with_body(&["content"])
            .build(&args(json!({ "issue_id": "iss_1", "content": "hello" })))
            .unwrap();

        let value = client.execute(request).await.unwrap();
        assert_eq!(value["id"], "m1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/webhooks/wh_1")
            .with_status(204)
            .create_async()
            .await;

        let client = PylonClient::new("test-token", &server.url()).unwrap();
        let request = Endpoint::delete("webhooks/{webhook_id}")
            .build(&args(json!({ "webhook_id": "wh_1" })))
            .unwrap();

        assert_eq!(client.execute(request).await.unwrap(), Value::Null);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_carries_detail() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/issues/missing")
            .with_status(404)
            .with_body(r#"{"message":"not found"}"#)
            .create_async()
            .await;

        let client = PylonClient::new("test-token", &server.url()).unwrap();
        let request = Endpoint::get("issues/{issue_id}")
            .build(&args(json!({ "issue_id": "missing" })))
            .unwrap();

        match client.execute(request).await {
            Err(ApiError::Status { status, detail }) => {
                assert_eq!(status, 404);
                assert_eq!(detail, "not found");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/me")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let client = PylonClient::new("test-token", &server.url()).unwrap();
        let request = Endpoint::get("me").build(&Map::new()).unwrap();

        assert!(matches!(
            client.execute(request).await,
            Err(ApiError::Decode(_))
        ));
    }
}
