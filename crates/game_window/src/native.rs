//! Runtime loader for the native `libwindow` library
//!
//! The native side is a prebuilt shared library exposing exactly three
//! functions. It is resolved at runtime with `dlopen`/`dlsym` rather than
//! linked at build time, so the crate builds and tests without the native
//! artifact present; a missing or broken library surfaces as
//! [`WindowError::LibraryLoad`] when the controller is constructed.

use std::ffi::{c_char, c_void, CStr, CString};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::backend::WindowBackend;
use crate::window::{WindowError, WindowResult};

type CreateWindowFn = unsafe extern "C" fn(*const c_char) -> bool;
type ShouldCloseFn = unsafe extern "C" fn() -> bool;
type DestroyWindowFn = unsafe extern "C" fn();

#[cfg(target_os = "macos")]
const DEFAULT_LIBRARY: &CStr = c"libwindow.dylib";
#[cfg(not(target_os = "macos"))]
const DEFAULT_LIBRARY: &CStr = c"libwindow.so";

/// `libwindow` loaded into the process, with its three entry points resolved.
pub(crate) struct NativeBackend {
    handle: *mut c_void,
    create_fullscreen_window: CreateWindowFn,
    window_should_close: ShouldCloseFn,
    destroy_window: DestroyWindowFn,
}

impl NativeBackend {
    /// Load `libwindow` and resolve its symbols.
    ///
    /// With no explicit path the platform's default library name is handed to
    /// `dlopen`, which applies the usual search rules (`LD_LIBRARY_PATH`,
    /// rpath, system directories).
    pub(crate) fn load(path: Option<&Path>) -> WindowResult<Self> {
        let name = match path {
            Some(path) => CString::new(path.as_os_str().as_bytes()).map_err(|_| {
                WindowError::LibraryLoad("library path contains a NUL byte".to_string())
            })?,
            None => DEFAULT_LIBRARY.to_owned(),
        };

        // SAFETY: `name` is a valid NUL-terminated path and dlopen does not
        // retain the pointer past the call.
        let handle = unsafe { libc::dlopen(name.as_ptr(), libc::RTLD_NOW | libc::RTLD_LOCAL) };
        if handle.is_null() {
            return Err(WindowError::LibraryLoad(last_dl_error()));
        }

        // SAFETY: `handle` is a live dlopen handle.
        match unsafe { Self::resolve_all(handle) } {
            Ok(backend) => {
                log::debug!("loaded native window library {:?}", name);
                Ok(backend)
            }
            Err(err) => {
                // SAFETY: `handle` came from dlopen above and is closed once.
                unsafe { libc::dlclose(handle) };
                Err(err)
            }
        }
    }

    /// Resolve the three libwindow entry points.
    ///
    /// The transmutes assume the symbols match the fixed libwindow ABI; that
    /// contract is the whole point of this crate and cannot be checked at
    /// runtime.
    unsafe fn resolve_all(handle: *mut c_void) -> WindowResult<Self> {
        Ok(Self {
            handle,
            create_fullscreen_window: std::mem::transmute::<*mut c_void, CreateWindowFn>(resolve(
                handle,
                c"create_fullscreen_window",
            )?),
            window_should_close: std::mem::transmute::<*mut c_void, ShouldCloseFn>(resolve(
                handle,
                c"window_should_close",
            )?),
            destroy_window: std::mem::transmute::<*mut c_void, DestroyWindowFn>(resolve(
                handle,
                c"destroy_window",
            )?),
        })
    }
}

impl WindowBackend for NativeBackend {
    fn create(&mut self, title: &CStr) -> bool {
        // SAFETY: the native ABI takes a NUL-terminated UTF-8 title; &CStr
        // guarantees the terminator, and the callee does not retain the
        // pointer.
        unsafe { (self.create_fullscreen_window)(title.as_ptr()) }
    }

    fn should_close(&self) -> bool {
        // SAFETY: non-blocking query with no arguments.
        unsafe { (self.window_should_close)() }
    }

    fn destroy(&mut self) {
        // SAFETY: the controller only calls this while a window exists, and
        // never twice without an intervening create.
        unsafe { (self.destroy_window)() }
    }
}

impl Drop for NativeBackend {
    fn drop(&mut self) {
        // SAFETY: `handle` is the live dlopen handle owned by this value.
        unsafe {
            libc::dlclose(self.handle);
        }
    }
}

/// Look up one symbol, reporting the dlerror message on failure.
unsafe fn resolve(handle: *mut c_void, name: &CStr) -> WindowResult<*mut c_void> {
    let sym = libc::dlsym(handle, name.as_ptr());
    if sym.is_null() {
        Err(WindowError::LibraryLoad(format!(
            "missing symbol {}: {}",
            name.to_string_lossy(),
            last_dl_error()
        )))
    } else {
        Ok(sym)
    }
}

fn last_dl_error() -> String {
    // SAFETY: dlerror returns null or a pointer to a NUL-terminated message
    // owned by the loader; the bytes are copied out before any further dl
    // call can invalidate them.
    unsafe {
        let msg = libc::dlerror();
        if msg.is_null() {
            "unknown dynamic loader error".to_string()
        } else {
            CStr::from_ptr(msg).to_string_lossy().into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_reports_missing_library() {
        let result = NativeBackend::load(Some(Path::new("/nonexistent/libwindow.so")));
        match result {
            Err(WindowError::LibraryLoad(msg)) => assert!(!msg.is_empty()),
            other => panic!("expected LibraryLoad error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_rejects_path_with_nul() {
        let path = Path::new("lib\0window.so");
        let result = NativeBackend::load(Some(path));
        assert!(matches!(result, Err(WindowError::LibraryLoad(_))));
    }
}
