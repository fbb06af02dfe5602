//! Lightweight HTTP layer over the Skosmos REST API
//!
//! Wraps a single `reqwest::Client` configured once from [`ClientConfig`]
//! (timeout, keep-alive pooling, default `Accept: application/json`).
//! `RestClient::execute` assembles the request URL from hierarchy
//! segments, attaches the diffed parameters, times the round-trip and
//! classifies the outcome into the error taxonomy.

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::api::error::Error;
use crate::rest::params::ParamValue;
use crate::rest::route::build_url;

/// Default HTTP timeout, one fixed duration per client instance.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("skosmos-client/", env!("CARGO_PKG_VERSION"));

/// Client configuration, passed explicitly into client construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST API base URL, e.g. `https://api.finto.fi/rest/v1`.
    /// Construction fails without one.
    pub base_url: Option<String>,
    /// Timeout for the whole request/response exchange.
    pub http_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }
}

/// HTTP request method for an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A raw, successful HTTP response.
#[derive(Debug, Clone)]
pub struct RestResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl RestResponse {
    /// `"<status> <reason> : <body>"`, the detail carried by
    /// [`Error::InvalidResponse`].
    pub fn detail(&self) -> String {
        format!("{} {} : {}", self.status, self.reason, self.body)
    }
}

/// HTTP client bound to one REST API base URL.
#[derive(Debug)]
pub struct RestClient {
    http: Client,
    base_url: Url,
}

impl RestClient {
    /// Create a client from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let base_url = config.base_url.as_deref().ok_or(Error::MissingBaseUrl)?;
        let base_url = Url::parse(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(Error::TransportInit)?;

        Ok(Self { http, base_url })
    }

    /// The configured REST API base URL.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Send one request and classify the outcome.
    ///
    /// `segments` are the URL hierarchy below the base URL; `params` go
    /// into the query string for GET and into a form-encoded body for
    /// POST. Returns the raw response for the success status range; maps
    /// everything else into the error taxonomy.
    pub async fn execute(
        &self,
        method: Method,
        segments: &[&str],
        params: &[(String, ParamValue)],
    ) -> Result<RestResponse, Error> {
        let url = build_url(self.base_url.as_str(), segments);
        let pairs: Vec<(String, String)> = params
            .iter()
            .map(|(name, value)| (name.clone(), value.to_wire()))
            .collect();

        let request = match method {
            Method::Get => self.http.get(&url).query(&pairs),
            Method::Post => self.http.post(&url).form(&pairs),
        };

        let start = Instant::now();
        let response = request.send().await.map_err(|source| {
            warn!(
                "{} request for '{}' with params '{}' failed: {}",
                method.as_str(),
                url,
                serialize_params(&pairs),
                source
            );
            Error::Transport {
                method: method.as_str(),
                url: url.clone(),
                source,
            }
        })?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text().await.map_err(|source| Error::Transport {
            method: method.as_str(),
            url: url.clone(),
            source,
        })?;

        debug!(
            "[{:.4}s] {} request {} params '{}' response: {}",
            start.elapsed().as_secs_f64(),
            method.as_str(),
            url,
            serialize_params(&pairs),
            body
        );

        let response = RestResponse {
            status: status.as_u16(),
            reason,
            body,
        };

        if status.is_success() {
            return Ok(response);
        }

        warn!(
            "{} request for '{}' with params '{}' failed: {}: {}, response content: {}",
            method.as_str(),
            url,
            serialize_params(&pairs),
            response.status,
            response.reason,
            response.body
        );

        Err(classify_failure(response))
    }
}

/// Map a non-success response onto the error taxonomy.
fn classify_failure(response: RestResponse) -> Error {
    match response.status {
        400 => Error::BadRequest(response.body),
        404 => Error::NotFound(response.body),
        _ => Error::InvalidResponse(response.detail()),
    }
}

/// Render parameter pairs as a query string for log lines.
fn serialize_params(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_base_url_is_a_constructor_error() {
        let err = RestClient::new(&ClientConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MissingBaseUrl));
    }

    #[test]
    fn test_invalid_base_url_is_a_constructor_error() {
        let err = RestClient::new(&ClientConfig::with_base_url("not a url")).unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_classify_bad_request() {
        let err = classify_failure(RestResponse {
            status: 400,
            reason: "Bad Request".to_string(),
            body: "missing parameter".to_string(),
        });
        assert!(matches!(err, Error::BadRequest(body) if body == "missing parameter"));
    }

    #[test]
    fn test_classify_not_found() {
        let err = classify_failure(RestResponse {
            status: 404,
            reason: "Not Found".to_string(),
            body: "no such vocabulary".to_string(),
        });
        assert!(matches!(err, Error::NotFound(body) if body == "no such vocabulary"));
    }

    #[test]
    fn test_classify_other_status_carries_status_line() {
        let err = classify_failure(RestResponse {
            status: 503,
            reason: "Service Unavailable".to_string(),
            body: "down".to_string(),
        });
        assert!(
            matches!(err, Error::InvalidResponse(detail) if detail == "503 Service Unavailable : down")
        );
    }

    #[test]
    fn test_serialize_params_encodes_pairs() {
        let pairs = vec![
            ("query".to_string(), "cat dog".to_string()),
            ("lang".to_string(), "fi".to_string()),
        ];
        assert_eq!(serialize_params(&pairs), "query=cat%20dog&lang=fi");
    }
}
