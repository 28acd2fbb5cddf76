//! C-ABI wrapper around `reqline-core`.
//!
//! # Overview
//! Exposes request-line parsing through `extern "C"` functions so any
//! language with a C FFI can parse `"<METHOD> <URL>"` lines.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - A single `FfiParseResult` envelope conveys success payloads and errors.
//! - The C caller owns all returned pointers and must call the matching
//!   `reqline_*_free` / `reqline_free_result` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use reqline_core::{ParseOptions, RequestParser};

use types::*;

// ---------------------------------------------------------------------------
// Parser lifecycle
// ---------------------------------------------------------------------------

/// Create a new parser. With `ignore_method_case` set, `get` and `Get` are
/// accepted as `GET`.
///
/// Returns null if an internal panic occurs.
/// The caller must free the returned pointer with `reqline_parser_free`.
#[unsafe(no_mangle)]
pub extern "C" fn reqline_parser_new(ignore_method_case: bool) -> *mut FfiRequestParser {
    catch_unwind(|| {
        let options = if ignore_method_case {
            ParseOptions::ignore_method_case()
        } else {
            ParseOptions::default()
        };
        let parser = RequestParser::new(options);
        Box::into_raw(Box::new(FfiRequestParser { inner: parser }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a parser created by `reqline_parser_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn reqline_parser_free(parser: *mut FfiRequestParser) {
    if !parser.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(parser) });
        });
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a NUL-terminated `"<METHOD> <URL>"` line.
///
/// Never returns null. The caller must free the result with
/// `reqline_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn reqline_parse(
    parser: *const FfiRequestParser,
    input: *const c_char,
) -> *mut FfiParseResult {
    catch_unwind(|| {
        if parser.is_null() {
            return FfiParseResult::null_arg("parser");
        }
        if input.is_null() {
            return FfiParseResult::null_arg("input");
        }
        let parser = unsafe { &*parser };
        let input = match unsafe { CStr::from_ptr(input) }.to_str() {
            Ok(s) => s,
            Err(_) => return FfiParseResult::invalid_utf8(),
        };
        match parser.inner.parse(input) {
            Ok(req) => FfiParseResult::ok(req),
            Err(e) => FfiParseResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiParseResult::panic("panic in reqline_parse"))
}

/// Canonical token for a method, e.g. `"GET"`. The returned string is static
/// and must not be freed.
#[unsafe(no_mangle)]
pub extern "C" fn reqline_method_name(method: FfiHttpMethod) -> *const c_char {
    let name: &'static CStr = match method {
        FfiHttpMethod::Get => c"GET",
        FfiHttpMethod::Post => c"POST",
        FfiHttpMethod::Put => c"PUT",
        FfiHttpMethod::Delete => c"DELETE",
        FfiHttpMethod::Patch => c"PATCH",
        FfiHttpMethod::Head => c"HEAD",
        FfiHttpMethod::Options => c"OPTIONS",
        FfiHttpMethod::Connect => c"CONNECT",
        FfiHttpMethod::Trace => c"TRACE",
    };
    name.as_ptr()
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free a result returned by `reqline_parse`, including its descriptor and
/// message. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn reqline_free_result(result: *mut FfiParseResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.request.is_null() {
            let request = unsafe { Box::from_raw(result.request) };
            if !request.url.is_null() {
                drop(unsafe { CString::from_raw(request.url) });
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url_of(result: &FfiParseResult) -> String {
        let req = unsafe { &*result.request };
        unsafe { CStr::from_ptr(req.url) }.to_str().unwrap().to_string()
    }

    fn message_of(result: &FfiParseResult) -> String {
        unsafe { CStr::from_ptr(result.error_message) }
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn parser_new_and_free() {
        let parser = reqline_parser_new(false);
        assert!(!parser.is_null());
        reqline_parser_free(parser);
    }

    #[test]
    fn parser_free_null_is_safe() {
        reqline_parser_free(std::ptr::null_mut());
    }

    #[test]
    fn parse_get_request() {
        let parser = reqline_parser_new(false);
        let input = CString::new("GET https://meain.io").unwrap();
        let result = reqline_parse(parser, input.as_ptr());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert!(r.error_message.is_null());

        let req = unsafe { &*r.request };
        assert_eq!(req.method, FfiHttpMethod::Get);
        assert_eq!(url_of(r), "https://meain.io");

        reqline_free_result(result);
        reqline_parser_free(parser);
    }

    #[test]
    fn parse_post_bare_host() {
        let parser = reqline_parser_new(false);
        let input = CString::new("POST meain.io").unwrap();
        let result = reqline_parse(parser, input.as_ptr());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert_eq!(unsafe { &*r.request }.method, FfiHttpMethod::Post);
        assert_eq!(url_of(r), "meain.io");

        reqline_free_result(result);
        reqline_parser_free(parser);
    }

    #[test]
    fn parse_malformed_input() {
        let parser = reqline_parser_new(false);
        let input = CString::new("GET").unwrap();
        let result = reqline_parse(parser, input.as_ptr());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::MalformedInput);
        assert!(r.request.is_null());
        assert!(message_of(r).contains("found 1"));

        reqline_free_result(result);
        reqline_parser_free(parser);
    }

    #[test]
    fn parse_respects_case_option() {
        let input = CString::new("get meain.io").unwrap();

        let strict = reqline_parser_new(false);
        let result = reqline_parse(strict, input.as_ptr());
        assert_eq!(unsafe { &*result }.error_code, FfiErrorCode::MalformedInput);
        reqline_free_result(result);
        reqline_parser_free(strict);

        let relaxed = reqline_parser_new(true);
        let result = reqline_parse(relaxed, input.as_ptr());
        assert_eq!(unsafe { &*result }.error_code, FfiErrorCode::Ok);
        reqline_free_result(result);
        reqline_parser_free(relaxed);
    }

    #[test]
    fn parse_invalid_utf8() {
        let parser = reqline_parser_new(false);
        let bytes: &[u8] = b"GET \xff\xfe\0";
        let result = reqline_parse(parser, bytes.as_ptr() as *const c_char);
        assert_eq!(unsafe { &*result }.error_code, FfiErrorCode::InvalidUtf8);
        reqline_free_result(result);
        reqline_parser_free(parser);
    }

    #[test]
    fn parse_null_args() {
        let input = CString::new("GET meain.io").unwrap();
        let result = reqline_parse(std::ptr::null(), input.as_ptr());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::NullArg);
        assert_eq!(message_of(r), "null argument: parser");
        reqline_free_result(result);

        let parser = reqline_parser_new(false);
        let result = reqline_parse(parser, std::ptr::null());
        assert_eq!(message_of(unsafe { &*result }), "null argument: input");
        reqline_free_result(result);
        reqline_parser_free(parser);
    }

    #[test]
    fn url_with_nul_byte_is_malformed() {
        let req = reqline_core::RequestDescriptor::new(
            reqline_core::HttpMethod::Get,
            "meain.io\0/x",
        )
        .unwrap();
        let result = FfiParseResult::ok(req);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::MalformedInput);
        assert!(r.request.is_null());
        assert_eq!(message_of(r), "url contains a NUL byte");
        reqline_free_result(result);
    }

    #[test]
    fn method_name_is_canonical() {
        let name = unsafe { CStr::from_ptr(reqline_method_name(FfiHttpMethod::Options)) };
        assert_eq!(name.to_str().unwrap(), "OPTIONS");
    }

    #[test]
    fn free_result_null_is_safe() {
        reqline_free_result(std::ptr::null_mut());
    }
}
