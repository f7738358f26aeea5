pub mod brainfuck;
pub mod decompose;
pub mod error;
#[cfg(feature = "python")]
mod python;
pub mod synth;

pub use error::{Error, Result};
pub use synth::{synthesize, synthesize_text, verify};

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

/// Generate a program printing `text` through a C-compatible interface.
///
/// Returns null if `text` is null or not valid UTF-8. The result must be
/// released with [`bfsynth_free`].
///
/// # Safety
/// `text` must be null or a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bfsynth_synthesize(text: *const c_char) -> *mut c_char {
    if text.is_null() {
        return ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(text) };
    match c_str.to_str() {
        Ok(text) => CString::new(synthesize_text(text)).map_or(ptr::null_mut(), CString::into_raw),
        Err(_) => ptr::null_mut(),
    }
}

/// Release a program returned by [`bfsynth_synthesize`].
///
/// # Safety
/// `program` must be null or a pointer obtained from `bfsynth_synthesize`
/// that has not been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bfsynth_free(program: *mut c_char) {
    if !program.is_null() {
        drop(unsafe { CString::from_raw(program) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_interface_round_trip() {
        let text = CString::new("Hi").unwrap();
        unsafe {
            let program = bfsynth_synthesize(text.as_ptr());
            assert!(!program.is_null());
            let code = CStr::from_ptr(program).to_str().unwrap().to_owned();
            bfsynth_free(program);
            assert_eq!(code, synthesize_text("Hi"));
        }
    }

    #[test]
    fn c_interface_rejects_null() {
        unsafe {
            assert!(bfsynth_synthesize(ptr::null()).is_null());
            bfsynth_free(ptr::null_mut());
        }
    }
}
