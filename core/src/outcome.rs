//! The success-or-failure result of one triggered request.

use log::info;

/// Result of a single request, produced exactly once per trigger, handed to
/// the logger, then discarded. It carries no identity and no lifecycle
/// beyond the one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { body: String },
    Failure { reason: String },
}

impl Outcome {
    /// Render the outcome as one human-readable diagnostic line.
    ///
    /// The two formats (including the `occured` spelling) match the
    /// observed output byte for byte.
    pub fn log_line(&self) -> String {
        match self {
            Outcome::Success { body } => format!("received the following data: {body}"),
            Outcome::Failure { reason } => format!("An error occured: {reason}"),
        }
    }
}

/// Consumes an [`Outcome`] and writes one line to a diagnostic stream.
pub trait OutcomeLogger: Send + Sync {
    fn log(&self, outcome: &Outcome);
}

/// Emits outcome lines at info level through the `log` facade.
pub struct ConsoleLogger;

impl OutcomeLogger for ConsoleLogger {
    fn log(&self, outcome: &Outcome) {
        info!("{}", outcome.log_line());
    }
}
