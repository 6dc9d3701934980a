//! Minimal typed HTTP convenience layer.
//!
//! One facade, [`HttpClient`], over a pluggable [`HttpTransport`]: issue a
//! GET/POST request and get the raw body bytes back, with transport and
//! status failures folded into the closed [`Error`] taxonomy; then [`decode`]
//! the bytes into a typed value via serde.
//!
//! [`decode`]: HttpClient::decode
//!
//! ```ignore
//! use netlayer::{HttpClient, HttpMethod};
//!
//! let client = HttpClient::new();
//! let bytes = client
//!     .request("https://example.com/info", HttpMethod::Get, None, None)
//!     .await?;
//! let info: Info = client.decode(&bytes)?;
//! ```

mod client;
mod error;

pub use client::{
    HttpClient, HttpMethod, HttpTransport, ReqwestTransport, TransportError, TransportRequest,
    TransportResponse,
};
pub use error::{Error, Result};
