//! Ambient credential attachment as an explicit capability.
//!
//! # Design
//! The source of cookies is injected rather than read from an
//! environment-wide store, so tests can assert what gets attached without a
//! real cookie jar. The store is consulted only when the request
//! configuration asks for credentials to be included.

/// Supplies the cookie string to attach to a request, if any.
pub trait CredentialStore: Send + Sync {
    fn cookie_for(&self, url: &str) -> Option<String>;
}

/// A store that never holds credentials.
pub struct EmptyCredentialStore;

impl CredentialStore for EmptyCredentialStore {
    fn cookie_for(&self, _url: &str) -> Option<String> {
        None
    }
}

/// Serves one fixed cookie string for every URL. Sufficient for a
/// single-endpoint client.
pub struct StaticCredentialStore {
    cookie: String,
}

impl StaticCredentialStore {
    pub fn new(cookie: &str) -> Self {
        Self {
            cookie: cookie.to_string(),
        }
    }
}

impl CredentialStore for StaticCredentialStore {
    fn cookie_for(&self, _url: &str) -> Option<String> {
        Some(self.cookie.clone())
    }
}
