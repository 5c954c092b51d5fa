//! Stateless request builder and outcome producer.
//!
//! # Design
//! `FetchClient` holds only the immutable `RequestConfig` and carries no
//! state between calls. Building the request and interpreting the
//! resolution are pure transformations; the transport round-trip happens
//! between them, outside this type. That keeps every invocation an
//! independent request/response pair with no memory of prior ones.

use crate::config::{CredentialsMode, RequestConfig};
use crate::credentials::CredentialStore;
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::outcome::Outcome;

/// Builds the GET request for a configuration and converts its resolution
/// into an [`Outcome`].
#[derive(Debug, Clone)]
pub struct FetchClient {
    config: RequestConfig,
}

impl FetchClient {
    pub fn new(config: RequestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Build the outbound request: literal URL, configured headers sorted
    /// by name, plus a `cookie` header when the configuration includes
    /// credentials and the store holds one. Under `Omit` the store is
    /// never consulted.
    pub fn build_request(&self, credentials: &dyn CredentialStore) -> HttpRequest {
        let mut headers: Vec<(String, String)> = self
            .config
            .headers()
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        if self.config.credentials() == CredentialsMode::Include {
            if let Some(cookie) = credentials.cookie_for(self.config.url()) {
                headers.push(("cookie".to_string(), cookie));
            }
        }
        headers.sort();
        HttpRequest {
            url: self.config.url().to_string(),
            headers,
        }
    }

    /// Convert a response into an outcome.
    ///
    /// Any response the server produced is a `Success` carrying the raw
    /// body, non-2xx statuses included; only transport-level rejections
    /// become `Failure`. The body is never parsed, even for `.json`
    /// resources.
    pub fn outcome_from_response(&self, response: HttpResponse) -> Outcome {
        Outcome::Success {
            body: response.body,
        }
    }

    pub fn outcome_from_error(&self, error: TransportError) -> Outcome {
        Outcome::Failure {
            reason: error.to_string(),
        }
    }
}
