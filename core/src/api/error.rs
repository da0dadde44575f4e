//! Public error types for the Minnow API.
//!
//! Internal representations may change; this boundary type stays stable.

use core::fmt;

#[derive(Debug)]
pub enum Error {
    /// The source failed to parse. Evaluation was not attempted; the
    /// diagnostics carry the parser's messages in source order.
    Parse { diagnostics: Vec<String> },

    /// Evaluation produced a runtime error and the caller asked for
    /// strict execution.
    Runtime(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse { diagnostics } => {
                write!(f, "Parsing failed with {} error(s)", diagnostics.len())
            }
            Error::Runtime(message) => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for Error {}
