//! Error types for request-line parsing.
//!
//! # Design
//! There is a single failure kind, `MalformedInput`. The `reason` field says
//! which part of the `"<METHOD> <URL>"` contract was broken, and the original
//! input is kept for diagnostics. No partial descriptor is ever returned.

use thiserror::Error;

/// Why an input line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// The input contained no tokens at all.
    #[error("input is empty")]
    Empty,

    /// The input did not split into exactly two tokens.
    #[error("expected 2 tokens (method and url), found {0}")]
    TokenCount(usize),

    /// The first token is not a recognized HTTP method.
    #[error("unknown method {0:?}")]
    UnknownMethod(String),

    /// The url is empty or contains whitespace.
    #[error("invalid url {0:?}")]
    InvalidUrl(String),
}

/// Errors returned by `RequestParser::parse`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed input {input:?}: {reason}")]
    MalformedInput {
        input: String,
        reason: MalformedReason,
    },
}

impl ParseError {
    pub(crate) fn malformed(input: &str, reason: MalformedReason) -> Self {
        ParseError::MalformedInput {
            input: input.to_string(),
            reason,
        }
    }

    pub fn reason(&self) -> &MalformedReason {
        match self {
            ParseError::MalformedInput { reason, .. } => reason,
        }
    }

    /// The rejected input, verbatim.
    pub fn input(&self) -> &str {
        match self {
            ParseError::MalformedInput { input, .. } => input,
        }
    }
}
