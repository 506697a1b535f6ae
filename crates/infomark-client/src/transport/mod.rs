//! HTTP transport
//!
//! Performs one round trip per call and hands back the response body as
//! text. The transport knows nothing about the InfoMark API: it does not
//! parse JSON and does not look at HTTP status codes. A 4xx or 5xx answer is
//! a successful exchange whose body describes the failure.

mod headers;

pub use headers::{
    build_headers, default_headers, merge_headers, Headers, ACCEPT, APPLICATION_JSON,
    AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT,
};

use std::fmt;
use std::net::Ipv6Addr;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{InfomarkError, Result};

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("infomark-client/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Connection Target
// =============================================================================

/// URL scheme, which also selects plain TCP or TLS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where every request of a client goes. Fixed for the client's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    scheme: Scheme,
    host: String,
    port: u16,
}

impl ConnectionTarget {
    /// Create a target; `ssl` selects HTTPS
    pub fn new(host: impl Into<String>, port: u16, ssl: bool) -> Self {
        Self {
            scheme: if ssl { Scheme::Https } else { Scheme::Http },
            host: host.into(),
            port,
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `scheme://host:port` without a trailing slash. IPv6 literals are
    /// bracketed.
    pub fn origin(&self) -> String {
        if self.host.parse::<Ipv6Addr>().is_ok() {
            format!("{}://[{}]:{}", self.scheme, self.host, self.port)
        } else {
            format!("{}://{}:{}", self.scheme, self.host, self.port)
        }
    }

    /// Absolute URL for a route.
    ///
    /// The route is parsed as a URL path, so characters such as spaces are
    /// percent-encoded and a `?` starts the query string.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.origin(), path))?)
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.origin())
    }
}

// =============================================================================
// Request Descriptor
// =============================================================================

/// HTTP verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Everything needed to issue one request.
///
/// Built once per call and consumed by [`Transport::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    headers: Headers,
    body: Option<Bytes>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Replace the per-call headers
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}

// =============================================================================
// Transport
// =============================================================================

/// Raw HTTP(S) transport bound to one [`ConnectionTarget`]
///
/// Cloning is cheap and clones share the same configuration.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    target: ConnectionTarget,
    defaults: Headers,
}

impl Transport {
    /// Create a transport with default settings and no timeouts
    pub fn new(target: ConnectionTarget) -> Result<Self> {
        Self::with_options(target, DEFAULT_USER_AGENT, None, None)
    }

    /// Create a transport from a client configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::with_options(
            config.target(),
            config.user_agent(),
            config.timeouts.request(),
            config.timeouts.connect(),
        )
    }

    /// Create a transport with an explicit user agent and optional timeouts
    pub fn with_options(
        target: ConnectionTarget,
        user_agent: &str,
        timeout: Option<Duration>,
        connect_timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let client = builder.build()?;

        info!("Transport created for {}", target);

        Ok(Self {
            client,
            target,
            defaults: default_headers(user_agent),
        })
    }

    /// Get the connection target
    pub fn target(&self) -> &ConnectionTarget {
        &self.target
    }

    /// Headers applied to every request before per-call headers
    pub fn default_headers(&self) -> &Headers {
        &self.defaults
    }

    /// Issue a GET, authenticated when a token is given
    #[instrument(skip(self, token))]
    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<String> {
        let request =
            RequestDescriptor::new(Method::Get, path).with_headers(build_headers(token, None, None));
        self.execute(request).await
    }

    /// Issue a POST with a JSON body
    #[instrument(skip(self, payload, token))]
    pub async fn post<P>(&self, path: &str, payload: &P, token: Option<&str>) -> Result<String>
    where
        P: Serialize + ?Sized,
    {
        self.send_json(Method::Post, path, payload, token).await
    }

    /// Issue a PUT with a JSON body
    #[instrument(skip(self, payload, token))]
    pub async fn put<P>(&self, path: &str, payload: &P, token: Option<&str>) -> Result<String>
    where
        P: Serialize + ?Sized,
    {
        self.send_json(Method::Put, path, payload, token).await
    }

    /// Issue an authenticated DELETE
    #[instrument(skip(self, token))]
    pub async fn delete(&self, path: &str, token: &str) -> Result<String> {
        let request = RequestDescriptor::new(Method::Delete, path).with_headers(build_headers(
            Some(token),
            Some(APPLICATION_JSON),
            None,
        ));
        self.execute(request).await
    }

    /// Perform one round trip and return the whole response body
    #[instrument(skip(self, request), fields(method = %request.method(), path = %request.path()))]
    pub async fn execute(&self, request: RequestDescriptor) -> Result<String> {
        let RequestDescriptor {
            method,
            path,
            headers,
            body,
        } = request;

        let url = self.target.url_for(&path)?;
        let wire_headers = self.wire_headers(&headers)?;

        let mut builder = self.client.request(method.into(), url).headers(wire_headers);
        if let Some(body) = body {
            debug!("Sending {} byte body", body.len());
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        // Informational only; the body decides success
        debug!(status = response.status().as_u16(), "Response received");

        let text = response.text().await?;
        debug!("Read {} byte response body", text.len());
        Ok(text)
    }

    async fn send_json<P>(
        &self,
        method: Method,
        path: &str,
        payload: &P,
        token: Option<&str>,
    ) -> Result<String>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload)
            .map_err(|e| InfomarkError::SerializationError(e.to_string()))?;
        let headers = build_headers(token, Some(APPLICATION_JSON), Some(body.len()));
        let request = RequestDescriptor::new(method, path)
            .with_headers(headers)
            .with_body(body);
        self.execute(request).await
    }

    /// Defaults first, then per-call headers, so per-call values win on the
    /// wire even when names differ only in case.
    fn wire_headers(&self, per_call: &Headers) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();
        for (name, value) in self.defaults.iter().chain(per_call.iter()) {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| InfomarkError::InvalidHeader(format!("{}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| InfomarkError::InvalidHeader(format!("{}: {}", name, e)))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}
