//! Request configuration for a click-triggered fetch.
//!
//! # Design
//! A `RequestConfig` is built once, when the handler is defined, and never
//! mutated afterwards. It carries everything needed to describe the single
//! outbound GET: the literal URL, whether ambient credentials are attached,
//! and any custom request headers.

use std::collections::HashMap;

/// Whether ambient credentials (cookies) are attached to the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialsMode {
    /// Never attach credentials. The default.
    #[default]
    Omit,
    /// Attach whatever cookie the [`CredentialStore`] holds for the URL.
    ///
    /// [`CredentialStore`]: crate::credentials::CredentialStore
    Include,
}

/// Immutable description of one endpoint call.
///
/// Header keys are stored case-sensitively as given; inserting the same key
/// twice keeps the last value. Insertion order carries no meaning.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    url: String,
    credentials: CredentialsMode,
    headers: HashMap<String, String>,
}

impl RequestConfig {
    /// A GET of `url` with no custom headers and credentials omitted.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            credentials: CredentialsMode::default(),
            headers: HashMap::new(),
        }
    }

    pub fn with_credentials(mut self, mode: CredentialsMode) -> Self {
        self.credentials = mode;
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn credentials(&self) -> CredentialsMode {
        self.credentials
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}
