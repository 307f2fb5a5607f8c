//! C ABI over the default formatters.
//!
//! Strings returned by this module are owned by Rust and must be released
//! with [`won_format_string_free`].

use std::ffi::CString;
use std::os::raw::c_char;
use std::sync::OnceLock;

use crate::{errors::FormatError, DEFAULT_CURRENCY, DEFAULT_PERCENTAGE};

/// Semantic version of the Rust core (mirrors `Cargo.toml`).
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error categories surfaced across the FFI boundary.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCategory {
    Ok = 0,
    Validation = 1,
    Persistence = 2,
}

impl From<FfiErrorCategory> for i32 {
    fn from(value: FfiErrorCategory) -> Self {
        value as i32
    }
}

/// Maps a formatting error into its category.
pub fn classify_error(err: &FormatError) -> FfiErrorCategory {
    match err {
        FormatError::NonFinite(_)
        | FormatError::InvalidPrecision(_)
        | FormatError::InvalidCurrency(_)
        | FormatError::UnknownLocale(_) => FfiErrorCategory::Validation,
        FormatError::Io(_) | FormatError::Serde(_) => FfiErrorCategory::Persistence,
    }
}

/// Returns the crate version as a static C string.
#[no_mangle]
pub extern "C" fn won_format_version() -> *const c_char {
    static CORE: OnceLock<CString> = OnceLock::new();
    CORE.get_or_init(|| CString::new(CORE_VERSION).unwrap_or_default())
        .as_ptr()
}

/// Formats `value` as Korean Won. Release the result with
/// [`won_format_string_free`].
#[no_mangle]
pub extern "C" fn won_format_currency(value: f64) -> *mut c_char {
    into_raw(crate::to_currency(value))
}

/// Formats `fraction` as a two-decimal percentage. Release the result with
/// [`won_format_string_free`].
#[no_mangle]
pub extern "C" fn won_format_percentage(fraction: f64) -> *mut c_char {
    into_raw(crate::to_percentage(fraction))
}

/// Strict variant of [`won_format_currency`]: returns null and writes the
/// error category to `out_status` when `value` is not finite.
///
/// # Safety
///
/// `out_status` must be null or valid for a single `i32` write.
#[no_mangle]
pub unsafe extern "C" fn won_format_try_currency(
    value: f64,
    out_status: *mut i32,
) -> *mut c_char {
    let result = DEFAULT_CURRENCY.try_format(value);
    report(result, out_status)
}

/// Strict variant of [`won_format_percentage`]: returns null and writes the
/// error category to `out_status` when the scaled fraction is not finite.
///
/// # Safety
///
/// `out_status` must be null or valid for a single `i32` write.
#[no_mangle]
pub unsafe extern "C" fn won_format_try_percentage(
    fraction: f64,
    out_status: *mut i32,
) -> *mut c_char {
    let result = DEFAULT_PERCENTAGE.try_format(fraction);
    report(result, out_status)
}

/// Releases a string previously returned by this module.
///
/// # Safety
///
/// `ptr` must be null or a pointer returned by one of the `won_format_*`
/// string exports that has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn won_format_string_free(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    drop(CString::from_raw(ptr));
}

unsafe fn report(result: Result<String, FormatError>, out_status: *mut i32) -> *mut c_char {
    let (status, ptr) = match result {
        Ok(rendered) => (FfiErrorCategory::Ok, into_raw(rendered)),
        Err(err) => {
            tracing::debug!(error = %err, "strict ffi formatting failed");
            (classify_error(&err), std::ptr::null_mut())
        }
    };
    if !out_status.is_null() {
        *out_status = status.into();
    }
    ptr
}

fn into_raw(rendered: String) -> *mut c_char {
    // Formatted output never contains interior NUL bytes.
    CString::new(rendered)
        .map(CString::into_raw)
        .unwrap_or(std::ptr::null_mut())
}
