//! Internal trait for the native window collaborator
//!
//! This trait is the seam between the lifecycle controller and `libwindow`.
//! It is `pub(crate)` and mirrors the native library's three-function
//! interface exactly; applications never interact with it directly. Keeping
//! the seam as a trait lets tests substitute a mock backend that records
//! calls instead of touching a real window.

use std::ffi::CStr;

/// The three-function contract of the native window library.
///
/// The controller is responsible for call ordering: `create` is only invoked
/// on a closed session, `destroy` exactly once per successful `create`, and
/// `should_close` only while a window exists.
pub(crate) trait WindowBackend {
    /// Create one fullscreen OS window titled with the given C string.
    ///
    /// Returns false on failure; the native library must not leak resources
    /// in that case. The title is already NUL-terminated here — the native
    /// ABI reads bytes up to the terminator.
    fn create(&mut self, title: &CStr) -> bool;

    /// Whether a user or OS close request has been observed since the last
    /// check. Non-blocking.
    fn should_close(&self) -> bool;

    /// Release all OS resources for the current window.
    ///
    /// Must not be called twice without an intervening `create`.
    fn destroy(&mut self);
}
