mod client;
mod http_trait;
mod reqwest_impl;

pub use client::HttpClient;
pub use http_trait::{
    HttpMethod, HttpTransport, TransportError, TransportRequest, TransportResponse,
};
pub use reqwest_impl::ReqwestTransport;
