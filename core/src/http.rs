//! Request-line data model.
//!
//! # Design
//! `HttpMethod` is a closed set of the standard verbs rather than a validated
//! string, so callers can `match` on it exhaustively. `RequestDescriptor`
//! pairs a method with the URL token exactly as it appeared in the input.
//!
//! All fields use owned types so values can cross FFI boundaries without
//! lifetime concerns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::MethodCase;
use crate::error::{MalformedReason, ParseError};

/// HTTP method recognized by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Connect,
    Trace,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 9] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Connect,
        HttpMethod::Trace,
    ];

    /// Canonical uppercase token, e.g. `"GET"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Connect => "CONNECT",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Match a method token under the given case policy.
    pub fn from_token(token: &str, case: MethodCase) -> Option<Self> {
        Self::ALL.into_iter().find(|m| match case {
            MethodCase::Exact => m.as_str() == token,
            MethodCase::Insensitive => m.as_str().eq_ignore_ascii_case(token),
        })
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed `"<METHOD> <URL>"` line.
///
/// Equality is structural. The url is never empty and never contains
/// whitespace, so the `Display` form is a canonical request line that parses
/// back to an equal value. Deserialization enforces the same rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRequestDescriptor")]
pub struct RequestDescriptor {
    url: String,
    method: HttpMethod,
}

#[derive(Deserialize)]
struct RawRequestDescriptor {
    url: String,
    method: HttpMethod,
}

impl TryFrom<RawRequestDescriptor> for RequestDescriptor {
    type Error = ParseError;

    fn try_from(raw: RawRequestDescriptor) -> Result<Self, Self::Error> {
        RequestDescriptor::new(raw.method, raw.url)
    }
}

impl RequestDescriptor {
    /// Build a descriptor, rejecting a url that is empty or contains
    /// whitespace.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Result<Self, ParseError> {
        let url = url.into();
        if url.is_empty() || url.contains(char::is_whitespace) {
            return Err(ParseError::malformed(
                &format!("{method} {url}"),
                MalformedReason::InvalidUrl(url),
            ));
        }
        Ok(Self { url, method })
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn into_parts(self) -> (HttpMethod, String) {
        (self.method, self.url)
    }
}

impl fmt::Display for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}
