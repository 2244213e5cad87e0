//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Filters, resource groups and operations cross as C enums with explicit
//! discriminants that mirror the core enums one to one. Requests go out as
//! plain data (`FfiHttpRequest`), responses come back in as
//! `FfiHttpResponse`, and every fallible call that produces data answers
//! with an `FfiResult` envelope. Conversions live here to keep `lib.rs`
//! focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use paapi_core::{ApiError, Filter, FilterError, Operation, ResourceGroup};

/// Opaque handle to a `Client`.
pub struct FfiClient {
    pub(crate) inner: paapi_core::Client,
}

/// Opaque handle to a `Query` under construction.
pub struct FfiQuery {
    pub(crate) inner: paapi_core::Query,
}

/// Copy `s` into a C string owned by the caller. Interior NULs, which
/// neither JSON nor header values contain, truncate rather than fail.
pub(crate) fn c_string(s: impl Into<Vec<u8>>) -> *mut c_char {
    let mut bytes = s.into();
    if let Some(nul) = bytes.iter().position(|b| *b == 0) {
        bytes.truncate(nul);
    }
    CString::new(bytes).unwrap_or_default().into_raw()
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiOperation {
    Unknown = 0,
    GetItems = 1,
    SearchItems = 2,
    GetVariations = 3,
    GetBrowseNodes = 4,
}

impl From<FfiOperation> for Operation {
    fn from(op: FfiOperation) -> Self {
        match op {
            FfiOperation::Unknown => Operation::Unknown,
            FfiOperation::GetItems => Operation::GetItems,
            FfiOperation::SearchItems => Operation::SearchItems,
            FfiOperation::GetVariations => Operation::GetVariations,
            FfiOperation::GetBrowseNodes => Operation::GetBrowseNodes,
        }
    }
}

/// Mirrors `paapi_core::Filter`, in the same order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiFilter {
    Actor = 0,
    Artist = 1,
    Asin = 2,
    Availability = 3,
    Author = 4,
    Brand = 5,
    BrowseNodeId = 6,
    Condition = 7,
    CurrencyOfPreference = 8,
    DeliveryFlags = 9,
    ItemIds = 10,
    ItemIdType = 11,
    ItemCount = 12,
    ItemPage = 13,
    Keywords = 14,
    BrowseNodeIds = 15,
    LanguagesOfPreference = 16,
    Marketplace = 17,
    MaxPrice = 18,
    Merchant = 19,
    MinPrice = 20,
    MinReviewsRating = 21,
    MinSavingPercent = 22,
    OfferCount = 23,
    PartnerTag = 24,
    PartnerType = 25,
    Properties = 26,
    SearchIndex = 27,
    SortBy = 28,
    Title = 29,
    VariationCount = 30,
    VariationPage = 31,
}

impl From<FfiFilter> for Filter {
    fn from(f: FfiFilter) -> Self {
        Filter::ALL[f as usize]
    }
}

/// Mirrors `paapi_core::ResourceGroup`, in the same order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiResourceGroup {
    BrowseNodeInfo = 0,
    Images = 1,
    ItemInfo = 2,
    Offers = 3,
    OffersV2 = 4,
    SearchRefinements = 5,
    ParentAsin = 6,
    CustomerReviews = 7,
    BrowseNodes = 8,
    VariationSummary = 9,
}

impl From<FfiResourceGroup> for ResourceGroup {
    fn from(g: FfiResourceGroup) -> Self {
        ResourceGroup::ALL[g as usize]
    }
}

/// Outcome category of an FFI call.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    NullArg = 1,
    InvalidArg = 2,
    NotAllowed = 3,
    InvalidValue = 4,
    NullReference = 5,
    Serialization = 6,
    HttpStatus = 7,
    Decode = 8,
    Transport = 9,
    Panic = 10,
}

impl From<&FilterError> for FfiErrorCode {
    fn from(err: &FilterError) -> Self {
        match err {
            FilterError::NotAllowed { .. } => FfiErrorCode::NotAllowed,
            FilterError::InvalidValue { .. } => FfiErrorCode::InvalidValue,
        }
    }
}

// ---------------------------------------------------------------------------
// Request output
// ---------------------------------------------------------------------------

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// A signed request as plain data. Always a POST.
///
/// Built by `paapi_build_request`. The C caller sends it and hands the
/// answer back through `paapi_parse_response`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    pub(crate) fn from_core(req: paapi_core::HttpRequest) -> *mut Self {
        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Vec<FfiHeader> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: c_string(k),
                    value: c_string(v),
                })
                .collect();
            // Exact capacity so `paapi_free_request` can rebuild the Vec.
            Box::into_raw(ffi_headers.into_boxed_slice()) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            url: c_string(req.url),
            headers,
            headers_len,
            body: c_string(req.body),
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response as plain data.
///
/// Built by the C caller, usually on the stack. The FFI layer reads but
/// never frees these fields. A null `body` reads as empty.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result envelope
// ---------------------------------------------------------------------------

/// Result of `paapi_query_payload` and `paapi_parse_response`.
///
/// On success `error_code` is `Ok`, `error_message` is null and `data`
/// holds a JSON document. On failure `data` is null and `error_message`
/// describes the problem. `http_status` is set for `HttpStatus` errors.
#[repr(C)]
pub struct FfiResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data: *mut c_char,
}

impl FfiResult {
    fn boxed(error_code: FfiErrorCode, error_message: *mut c_char, http_status: u16, data: *mut c_char) -> *mut Self {
        Box::into_raw(Box::new(FfiResult {
            error_code,
            error_message,
            http_status,
            data,
        }))
    }

    pub(crate) fn ok(json: impl Into<Vec<u8>>) -> *mut Self {
        Self::boxed(FfiErrorCode::Ok, std::ptr::null_mut(), 0, c_string(json))
    }

    pub(crate) fn from_error(err: &ApiError) -> *mut Self {
        let (error_code, http_status) = match err.root() {
            ApiError::NullReference => (FfiErrorCode::NullReference, 0),
            ApiError::Serialization(_) => (FfiErrorCode::Serialization, 0),
            ApiError::HttpStatus { status, .. } => (FfiErrorCode::HttpStatus, *status),
            ApiError::Decode { .. } => (FfiErrorCode::Decode, 0),
            ApiError::Transport(_) | ApiError::Request { .. } => (FfiErrorCode::Transport, 0),
        };
        Self::boxed(error_code, c_string(err.to_string()), http_status, std::ptr::null_mut())
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::boxed(
            FfiErrorCode::NullArg,
            c_string(format!("null argument: {name}")),
            0,
            std::ptr::null_mut(),
        )
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::boxed(FfiErrorCode::Panic, c_string(msg), 0, std::ptr::null_mut())
    }
}
