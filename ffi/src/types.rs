//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String` and tagged enums with explicit
//! discriminants. Conversion functions live here to keep `lib.rs` focused on
//! the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use reqline_core::{HttpMethod, ParseError, RequestDescriptor};

/// Opaque handle to a `RequestParser`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiRequestParser {
    pub(crate) inner: reqline_core::RequestParser,
}

/// HTTP method as a C enum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
    Patch = 4,
    Head = 5,
    Options = 6,
    Connect = 7,
    Trace = 8,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
            HttpMethod::Put => FfiHttpMethod::Put,
            HttpMethod::Delete => FfiHttpMethod::Delete,
            HttpMethod::Patch => FfiHttpMethod::Patch,
            HttpMethod::Head => FfiHttpMethod::Head,
            HttpMethod::Options => FfiHttpMethod::Options,
            HttpMethod::Connect => FfiHttpMethod::Connect,
            HttpMethod::Trace => FfiHttpMethod::Trace,
        }
    }
}

/// A parsed request line exposed to C.
#[repr(C)]
pub struct FfiRequestDescriptor {
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
}

/// Error codes returned in `FfiParseResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    MalformedInput = 1,
    InvalidUtf8 = 2,
    NullArg = 3,
    Panic = 4,
}

/// Result envelope for `reqline_parse`.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `request`
/// points to the parsed descriptor. On failure `request` is null and
/// `error_message` is a human-readable C string.
#[repr(C)]
pub struct FfiParseResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub request: *mut FfiRequestDescriptor,
}

impl FfiParseResult {
    pub(crate) fn ok(req: RequestDescriptor) -> *mut Self {
        let (method, url) = req.into_parts();
        let url = match CString::new(url) {
            Ok(url) => url,
            Err(_) => return Self::failure(FfiErrorCode::MalformedInput, "url contains a NUL byte"),
        };
        let request = Box::new(FfiRequestDescriptor {
            method: method.into(),
            url: url.into_raw(),
        });
        Box::into_raw(Box::new(FfiParseResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            request: Box::into_raw(request),
        }))
    }

    pub(crate) fn from_error(err: ParseError) -> *mut Self {
        Self::failure(FfiErrorCode::MalformedInput, &err.to_string())
    }

    pub(crate) fn invalid_utf8() -> *mut Self {
        Self::failure(FfiErrorCode::InvalidUtf8, "input is not valid UTF-8")
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::failure(FfiErrorCode::NullArg, &format!("null argument: {name}"))
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::failure(FfiErrorCode::Panic, msg)
    }

    // Messages quote user input with `{:?}`, which escapes NUL bytes.
    fn failure(error_code: FfiErrorCode, msg: &str) -> *mut Self {
        Box::into_raw(Box::new(FfiParseResult {
            error_code,
            error_message: CString::new(msg).unwrap().into_raw(),
            request: std::ptr::null_mut(),
        }))
    }
}
