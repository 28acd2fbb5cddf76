//! Stateless parser for `"<METHOD> <URL>"` lines.
//!
//! # Design
//! `RequestParser` holds only its `ParseOptions` and carries no mutable state
//! between calls, so one instance can be shared across threads. Each call
//! returns a freshly owned `RequestDescriptor` or a `ParseError`.

use std::str::FromStr;

use log::{debug, trace};

use crate::config::ParseOptions;
use crate::error::{MalformedReason, ParseError};
use crate::http::{HttpMethod, RequestDescriptor};

/// Parse a request line with default options.
///
/// The method token is matched case-sensitively and the url token is kept
/// verbatim:
///
/// ```
/// use reqline_core::{parse_input, HttpMethod};
///
/// let req = parse_input("POST meain.io").unwrap();
/// assert_eq!(req.method(), HttpMethod::Post);
/// assert_eq!(req.url(), "meain.io");
/// ```
pub fn parse_input(input: &str) -> Result<RequestDescriptor, ParseError> {
    RequestParser::default().parse(input)
}

#[derive(Debug, Clone, Default)]
pub struct RequestParser {
    options: ParseOptions,
}

impl RequestParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Split `input` on whitespace and map it to a `RequestDescriptor`.
    ///
    /// Surrounding whitespace and runs of whitespace between the two tokens
    /// are tolerated. Anything other than exactly two tokens, or a method
    /// token outside `HttpMethod`, is `ParseError::MalformedInput`.
    pub fn parse(&self, input: &str) -> Result<RequestDescriptor, ParseError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let (method, url) = match tokens.as_slice() {
            [] => return Err(reject(input, MalformedReason::Empty)),
            [method, url] => (*method, *url),
            other => return Err(reject(input, MalformedReason::TokenCount(other.len()))),
        };

        let method = HttpMethod::from_token(method, self.options.method_case).ok_or_else(|| {
            reject(input, MalformedReason::UnknownMethod(method.to_string()))
        })?;

        let req = RequestDescriptor::new(method, url)
            .map_err(|e| reject(input, e.reason().clone()))?;
        debug!("parsed request line: {req}");
        Ok(req)
    }

    /// Parse every non-blank line of `text`.
    ///
    /// Each result is paired with its 1-based line number. One bad line does
    /// not stop the others from being parsed.
    pub fn parse_lines(&self, text: &str) -> Vec<(usize, Result<RequestDescriptor, ParseError>)> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| (i + 1, self.parse(line)))
            .collect()
    }
}

fn reject(input: &str, reason: MalformedReason) -> ParseError {
    trace!("rejected request line {input:?}: {reason}");
    ParseError::malformed(input, reason)
}

impl FromStr for RequestDescriptor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_input(s)
    }
}
