use std::time::Duration;

use finder_core::{QueryRequest, ResultPayload};
use finder_logging::{finder_debug, finder_warn};
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Response;
use url::Url;

use crate::wire::{ErrorBody, SimilarityRequestBody, SimilarityResponseBody};
use crate::{FailureKind, QueryError, SetupError};

/// Endpoint path, relative to the configured base URL.
pub const FIND_SIMILAR_PATH: &str = "find_similar_items/";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_response_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_response_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Remote similarity search, as seen by the controller.
#[async_trait::async_trait]
pub trait SimilarityService: Send + Sync {
    async fn find_similar_items(&self, request: &QueryRequest) -> Result<ResultPayload, QueryError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSimilarityService {
    client: reqwest::Client,
    endpoint: Url,
    max_response_bytes: u64,
}

impl ReqwestSimilarityService {
    pub fn new(settings: &ClientSettings) -> Result<Self, SetupError> {
        let endpoint = resolve_endpoint(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SetupError::HttpClient(err.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            max_response_bytes: settings.max_response_bytes,
        })
    }

    /// Endpoint URL for one request, with `generate_graph` set.
    pub fn request_url(&self, generate_graph: bool) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("generate_graph", if generate_graph { "true" } else { "false" });
        url
    }

    async fn read_body(&self, response: Response) -> Result<Vec<u8>, QueryError> {
        if let Some(content_len) = response.content_length() {
            if content_len > self.max_response_bytes {
                return Err(QueryError::transport(
                    FailureKind::TooLarge {
                        max_bytes: self.max_response_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.max_response_bytes {
                return Err(QueryError::transport(
                    FailureKind::TooLarge {
                        max_bytes: self.max_response_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl SimilarityService for ReqwestSimilarityService {
    async fn find_similar_items(&self, request: &QueryRequest) -> Result<ResultPayload, QueryError> {
        let url = self.request_url(request.generate_graph);
        let body = serde_json::to_vec(&SimilarityRequestBody::from(request))
            .map_err(|err| QueryError::transport(FailureKind::MalformedRequest, err.to_string()))?;

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        finder_debug!("find_similar_items responded {}", status);
        let bytes = self.read_body(response).await?;

        if !status.is_success() {
            let error_body: ErrorBody = serde_json::from_slice(&bytes).unwrap_or_default();
            return Err(match error_body.message() {
                Some(detail) => QueryError::Service {
                    status: status.as_u16(),
                    detail: detail.to_string(),
                },
                None => {
                    let preview = String::from_utf8_lossy(&bytes[..bytes.len().min(200)]);
                    finder_warn!("{} without usable detail: {}", status, preview);
                    QueryError::transport(
                        FailureKind::HttpStatus(status.as_u16()),
                        status.to_string(),
                    )
                }
            });
        }

        let parsed: SimilarityResponseBody = serde_json::from_slice(&bytes).map_err(|err| {
            finder_warn!("Unparseable success body ({} bytes): {}", bytes.len(), err);
            QueryError::transport(FailureKind::MalformedResponse, err.to_string())
        })?;
        Ok(parsed.into())
    }
}

fn resolve_endpoint(base_url: &str) -> Result<Url, SetupError> {
    let invalid = |reason: String| SetupError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let mut base = Url::parse(base_url.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", base.scheme())));
    }
    // Relative joins replace the last path segment unless it ends with '/'.
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.set_query(None);
    base.join(FIND_SIMILAR_PATH)
        .map_err(|err| invalid(err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> QueryError {
    if err.is_timeout() {
        return QueryError::transport(FailureKind::Timeout, err.to_string());
    }
    QueryError::transport(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_for(base_url: &str) -> ReqwestSimilarityService {
        let settings = ClientSettings {
            base_url: base_url.to_string(),
            ..ClientSettings::default()
        };
        ReqwestSimilarityService::new(&settings).expect("valid settings")
    }

    #[test]
    fn endpoint_is_resolved_against_base_url() {
        assert_eq!(
            service_for("http://localhost:8000").request_url(false).as_str(),
            "http://localhost:8000/find_similar_items/?generate_graph=false"
        );
        assert_eq!(
            service_for("https://example.com/api").request_url(true).as_str(),
            "https://example.com/api/find_similar_items/?generate_graph=true"
        );
        assert_eq!(
            service_for("https://example.com/api/?x=1").request_url(true).as_str(),
            "https://example.com/api/find_similar_items/?generate_graph=true"
        );
    }

    #[test]
    fn unusable_base_urls_are_rejected() {
        for bad in ["", "localhost:8000", "ftp://example.com", "not a url"] {
            let settings = ClientSettings {
                base_url: bad.to_string(),
                ..ClientSettings::default()
            };
            assert!(
                matches!(
                    ReqwestSimilarityService::new(&settings),
                    Err(SetupError::InvalidBaseUrl { .. })
                ),
                "expected {bad:?} to be rejected"
            );
        }
    }
}
