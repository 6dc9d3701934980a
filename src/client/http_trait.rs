use async_trait::async_trait;
use url::Url;

/// HTTP verbs supported by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// The exact wire-format verb string.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully prepared request, ready for a transport to execute.
///
/// Headers are an ordered list: a transport must apply them in sequence with
/// overwrite semantics, so a later entry for the same name replaces an
/// earlier one. The client relies on this to let caller-supplied headers
/// override the ones it sets itself.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub url: Url,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// What a transport yields on success: the status code and the raw body bytes.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The transport's failure channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportError {
    /// The request never completed: DNS, connect, TLS, or read failure.
    /// Carries the underlying library's description.
    Failed(String),
    /// The peer answered, but not with anything parseable as an HTTP response.
    MalformedResponse,
}

/// Minimal async HTTP transport trait that can be implemented with any HTTP
/// library.
///
/// The crate bundles [`ReqwestTransport`](super::ReqwestTransport); consumers
/// can bring their own implementation (ureq, hyper, platform APIs, a canned
/// in-memory transport for tests) by implementing this one method.
#[async_trait]
pub trait HttpTransport: Send + Sync + Clone {
    /// Execute one request and yield its status and body, or a transport
    /// failure. Implementations must not retry.
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<TransportResponse, TransportError>;
}
