//! Error types for registration and transport.
//!
//! # Design
//! Registration failures and network failures never meet: a
//! `RegisterError` surfaces to the caller before any listener exists, while
//! a `TransportError` is caught at the single call site inside the
//! listener, converted to a failure outcome, logged, and discarded.

use std::fmt;

/// Errors surfaced by [`FetchOnClick::register`].
///
/// [`FetchOnClick::register`]: crate::handler::FetchOnClick::register
#[derive(Debug)]
pub enum RegisterError {
    /// No element with the given id exists in the document. The failure
    /// happens before any listener is attached and is not recovered.
    ElementNotFound { id: String },
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::ElementNotFound { id } => {
                write!(f, "no element with id '{id}'")
            }
        }
    }
}

impl std::error::Error for RegisterError {}

/// A transport-level rejection of the outbound request.
///
/// `Display` is the bare message, so the reason in the logged line is
/// exactly what the transport reported.
#[derive(Debug, Clone)]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TransportError {}
