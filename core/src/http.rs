//! HTTP transport types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and interprets `HttpResponse` values without touching the network;
//! the actual round-trip happens behind the [`HttpTransport`] trait, so
//! tests can substitute a scripted transport and never open a socket.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved into
//! listener closures without lifetime concerns.

use crate::error::TransportError;

/// An outbound request described as plain data.
///
/// The method is always GET and is therefore not modeled. Headers are
/// sorted by name, so two requests built from the same configuration
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// A response described as plain data, produced by an [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes one HTTP round-trip.
///
/// Implementations must return `Ok` for any response the server produced,
/// regardless of status code; `Err` is reserved for transport-level
/// rejections (DNS failure, refused connection, timeout).
pub trait HttpTransport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}
