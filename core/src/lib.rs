//! Request-line parsing core.
//!
//! # Overview
//! Turns a `"<METHOD> <URL>"` line into a `RequestDescriptor`. Parsing is a
//! pure function of the input and the `ParseOptions`; nothing here performs
//! I/O or executes requests.
//!
//! # Design
//! - `RequestParser` is stateless apart from its options.
//! - `HttpMethod` is a closed enum of the standard verbs.
//! - Every rejection is `ParseError::MalformedInput` with a `MalformedReason`.
//! - Types use owned `String` fields to simplify FFI mapping.

pub mod config;
pub mod error;
pub mod http;
pub mod parser;

pub use config::{MethodCase, ParseOptions};
pub use error::{MalformedReason, ParseError};
pub use http::{HttpMethod, RequestDescriptor};
pub use parser::{parse_input, RequestParser};
