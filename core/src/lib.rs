//! Click-triggered fetch-and-log.
//!
//! # Overview
//! Binds a trigger element to a single outbound HTTP GET: on each
//! activation the handler issues the configured request and logs either the
//! received body or the rejection reason as one diagnostic line. Nothing
//! more — no retries, no caching, no cancellation, no validation.
//!
//! # Design
//! - `RequestConfig` is built once per handler and never mutated.
//! - `FetchClient` builds requests and interprets resolutions as pure data
//!   transformations; I/O enters only through the `HttpTransport` trait
//!   (host-does-IO pattern), with a `ureq`-backed implementation provided.
//! - Element lookup (`ElementLocator`) and ambient credential attachment
//!   (`CredentialStore`) are injected capabilities, so tests run without a
//!   document or a cookie store.
//! - Every activation is independent; overlapping clicks each spawn their
//!   own uncoordinated request.

pub mod client;
pub mod config;
pub mod credentials;
pub mod dom;
pub mod error;
pub mod handler;
pub mod http;
pub mod outcome;
pub mod transport;

pub use client::FetchClient;
pub use config::{CredentialsMode, RequestConfig};
pub use credentials::{CredentialStore, EmptyCredentialStore, StaticCredentialStore};
pub use dom::{Document, Element, ElementLocator};
pub use error::{RegisterError, TransportError};
pub use handler::FetchOnClick;
pub use http::{HttpRequest, HttpResponse, HttpTransport};
pub use outcome::{ConsoleLogger, Outcome, OutcomeLogger};
pub use transport::UreqTransport;
