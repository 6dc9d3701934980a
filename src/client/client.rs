use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};

use super::http_trait::{HttpMethod, HttpTransport, TransportError, TransportRequest};
use super::reqwest_impl::ReqwestTransport;

/// Stateless facade over an [`HttpTransport`]: one request operation, one
/// decode operation.
///
/// Generic over the transport so tests and embedders can inject their own;
/// `HttpClient::new()` builds one over the bundled reqwest transport. The
/// value holds no mutable state and is cheap to clone and share.
#[derive(Clone, Debug)]
pub struct HttpClient<T: HttpTransport> {
    transport: T,
}

impl HttpClient<ReqwestTransport> {
    /// Create a client over the default reqwest transport.
    pub fn new() -> Self {
        Self {
            transport: ReqwestTransport::new(),
        }
    }
}

impl Default for HttpClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> HttpClient<T> {
    /// Create a client over a custom transport implementation.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Perform one HTTP request and yield the raw response bytes.
    ///
    /// `parameters` are serialized to a JSON body only for POST; when a body
    /// is attached, `Content-Type: application/json` is set first and any
    /// caller-supplied header for the same name overwrites it. A malformed
    /// `url` fails with [`Error::InvalidUrl`] before any I/O. Non-2xx
    /// statuses map to [`Error::Custom`] with fixed messages (see
    /// [`Error::from_status`]); a 2xx response with an empty body is
    /// [`Error::NoData`]. Exactly one network call, no retries.
    pub async fn request(
        &self,
        url: &str,
        method: HttpMethod,
        parameters: Option<&HashMap<String, Value>>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Vec<u8>> {
        let url = Url::parse(url).map_err(|_| Error::InvalidUrl)?;

        let mut outgoing_headers = Vec::new();
        let mut body = None;
        if method == HttpMethod::Post {
            if let Some(parameters) = parameters {
                // best-effort: if encoding fails the request goes out bodyless
                if let Ok(encoded) = serde_json::to_vec(parameters) {
                    outgoing_headers
                        .push(("Content-Type".to_string(), "application/json".to_string()));
                    body = Some(encoded);
                }
            }
        }
        if let Some(headers) = headers {
            for (name, value) in headers {
                outgoing_headers.push((name.clone(), value.clone()));
            }
        }

        log::debug!("HTTP {} {}", method, url);

        let response = self
            .transport
            .execute(TransportRequest {
                url,
                method,
                headers: outgoing_headers,
                body,
            })
            .await
            .map_err(|e| match e {
                TransportError::Failed(message) => Error::Custom(message),
                TransportError::MalformedResponse => Error::UnknownHttpResponse,
            })?;

        if !(200..=299).contains(&response.status) {
            return Err(Error::from_status(response.status, None));
        }
        if response.body.is_empty() {
            return Err(Error::NoData);
        }
        Ok(response.body)
    }

    /// Decode a JSON response body into a typed value.
    ///
    /// Strict: malformed JSON, missing fields, and type mismatches all come
    /// back as [`Error::DecodeError`]. No I/O, safe to call repeatedly.
    pub fn decode<D: DeserializeOwned>(&self, bytes: &[u8]) -> Result<D> {
        serde_json::from_slice(bytes).map_err(|e| Error::DecodeError(e.to_string()))
    }
}
