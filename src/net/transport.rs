//! HTTP transport seam between the API client and the network.
//!
//! Client-side (hydrate): `GlooTransport` issues real requests via `gloo-net`.
//! Everywhere else the client is driven by any `Transport` implementation,
//! which keeps the call contract testable without a browser.
//!
//! Responses are two-phase: the status is available as soon as headers
//! arrive, the body is only read on demand. A 401 never touches the body.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::fmt;
use std::future::Future;
use std::str::FromStr;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP verbs the API client issues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported http method: {0}")]
pub struct ParseMethodError(pub String);

impl FromStr for HttpMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            _ => Err(ParseMethodError(s.to_owned())),
        }
    }
}

/// Failures below the HTTP status level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request could not be built: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("response body could not be read: {0}")]
    Body(String),
}

/// An outgoing request as handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: Vec::new(), body: None }
    }

    /// Attach a serialized JSON body and mark the request as JSON.
    #[must_use]
    pub fn with_json_body(mut self, body: String) -> Self {
        self.headers.push((CONTENT_TYPE.to_owned(), APPLICATION_JSON.to_owned()));
        self.body = Some(body);
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A response whose body has not necessarily been read yet.
pub trait TransportResponse {
    fn status_code(&self) -> u16;

    /// Consume the response and read its body as text.
    fn read_body(self) -> impl Future<Output = Result<String, TransportError>>;
}

/// Something that can deliver an `HttpRequest`.
///
/// Futures are not required to be `Send`; browser fetch futures never are.
pub trait Transport {
    type Response: TransportResponse;

    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<Self::Response, TransportError>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Response = T::Response;

    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<Self::Response, TransportError>> {
        (**self).send(request)
    }
}

/// Fully buffered response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

impl TransportResponse for HttpResponse {
    fn status_code(&self) -> u16 {
        self.status
    }

    async fn read_body(self) -> Result<String, TransportError> {
        Ok(self.body)
    }
}

pub fn is_ok_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// `fetch`-backed transport for the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
fn gloo_method(method: HttpMethod) -> gloo_net::http::Method {
    use gloo_net::http::Method;
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Head => Method::HEAD,
        HttpMethod::Options => Method::OPTIONS,
    }
}

#[cfg(feature = "hydrate")]
impl Transport for GlooTransport {
    type Response = gloo_net::http::Response;

    async fn send(&self, request: HttpRequest) -> Result<Self::Response, TransportError> {
        let mut builder = gloo_net::http::RequestBuilder::new(&request.url).method(gloo_method(request.method));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Build(e.to_string()))?;
        built.send().await.map_err(|e| TransportError::Network(e.to_string()))
    }
}

#[cfg(feature = "hydrate")]
impl TransportResponse for gloo_net::http::Response {
    fn status_code(&self) -> u16 {
        self.status()
    }

    async fn read_body(self) -> Result<String, TransportError> {
        self.text().await.map_err(|e| TransportError::Body(e.to_string()))
    }
}
