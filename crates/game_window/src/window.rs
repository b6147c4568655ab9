//! Window lifecycle controller
//!
//! [`GameWindow`] owns one logical window session on top of the native
//! backend: it is the sole caller of the native create/should-close/destroy
//! functions and the sole mutator of the open flag, so the exactly-once
//! destroy guarantee follows from ordinary ownership rather than locking.

use std::ffi::CString;

use thiserror::Error;

use crate::backend::WindowBackend;
use crate::config::WindowConfig;
use crate::native::NativeBackend;
use crate::rate::PollRate;

/// Window lifecycle errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// `open` was called while a session is already open. No native call was
    /// made; the existing window is untouched.
    #[error("window is already open")]
    AlreadyOpen,

    /// The native library reported window creation failure. The session
    /// remains closed.
    #[error("native window creation failed")]
    CreationFailed,

    /// The requested title contains an interior NUL byte and cannot cross
    /// the C ABI. Surfaced before any native call.
    #[error("window title contains an interior NUL byte")]
    InvalidTitle(#[from] std::ffi::NulError),

    /// The native library could not be loaded or is missing a required
    /// symbol.
    #[error("failed to load native window library: {0}")]
    LibraryLoad(String),
}

/// Convenience alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Controller for a single native fullscreen window.
///
/// The session is a two-state machine: **Closed** (initial) and **Open**.
/// `open` moves Closed→Open and fails with [`WindowError::AlreadyOpen`] while
/// Open; `close` moves Open→Closed and is a silent no-op while Closed. The
/// native window is destroyed exactly once per session, on whichever of
/// explicit `close`, a polled close request, or drop happens first.
pub struct GameWindow {
    backend: Box<dyn WindowBackend>,
    config: WindowConfig,
    is_open: bool,
    /// Armed iff the session is open.
    poll_rate: Option<PollRate>,
}

impl GameWindow {
    /// Create a controller backed by the real native library, using default
    /// configuration.
    ///
    /// # Errors
    /// [`WindowError::LibraryLoad`] if `libwindow` cannot be loaded.
    pub fn new() -> WindowResult<Self> {
        Self::with_config(WindowConfig::default())
    }

    /// Create a controller backed by the real native library.
    ///
    /// # Errors
    /// [`WindowError::LibraryLoad`] if the configured library cannot be
    /// loaded.
    pub fn with_config(config: WindowConfig) -> WindowResult<Self> {
        let backend = NativeBackend::load(config.library_path.as_deref())?;
        Ok(Self::from_backend(Box::new(backend), config))
    }

    pub(crate) fn from_backend(backend: Box<dyn WindowBackend>, config: WindowConfig) -> Self {
        Self {
            backend,
            config,
            is_open: false,
            poll_rate: None,
        }
    }

    /// Open a fullscreen window with the given title.
    ///
    /// On success the session is open and close-request polling is armed at
    /// the configured interval.
    ///
    /// # Errors
    /// - [`WindowError::AlreadyOpen`] if a session is already open.
    /// - [`WindowError::InvalidTitle`] if the title contains an interior NUL.
    /// - [`WindowError::CreationFailed`] if the native create call fails.
    ///
    /// In every error case the session is left closed (or the existing one
    /// untouched) and no cleanup is required.
    pub fn open(&mut self, title: &str) -> WindowResult<()> {
        if self.is_open {
            return Err(WindowError::AlreadyOpen);
        }

        // The native ABI requires a NUL terminator on the title bytes.
        let title_bytes = CString::new(title)?;
        if !self.backend.create(&title_bytes) {
            return Err(WindowError::CreationFailed);
        }

        self.is_open = true;
        self.poll_rate = Some(PollRate::new(self.config.poll_interval()));
        log::info!("opened fullscreen window \"{title}\"");
        Ok(())
    }

    /// Open a window titled with the configured default
    /// ([`WindowConfig::title`]).
    ///
    /// # Errors
    /// Same as [`GameWindow::open`].
    pub fn open_default(&mut self) -> WindowResult<()> {
        let title = self.config.title.clone();
        self.open(&title)
    }

    /// Close the window and release its native resources.
    ///
    /// Idempotent and infallible: closing an already-closed session does
    /// nothing, and native-level destroy failures are absorbed since this
    /// runs from poll ticks and drop where no caller can observe an error.
    pub fn close(&mut self) {
        if !self.is_open {
            return;
        }

        // Disarm polling before destroy so no tick can query a dead window.
        self.poll_rate = None;
        self.backend.destroy();
        self.is_open = false;
        log::info!("window closed");
    }

    /// Whether a window session is currently open. Pure state read.
    #[must_use]
    pub fn is_window_open(&self) -> bool {
        self.is_open
    }

    /// Run one poll tick: query the native close signal and close the window
    /// if requested. Returns whether the window is still open.
    ///
    /// A no-op returning `false` while closed, so no should-close query can
    /// happen between `close` and the next `open`. Safe to call from a
    /// caller's own frame loop instead of [`GameWindow::run_until_closed`].
    pub fn poll(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        if self.backend.should_close() {
            log::debug!("native close request observed");
            self.close();
        }
        self.is_open
    }

    /// Block the current thread, polling at the configured interval, until
    /// the window closes.
    ///
    /// Returns immediately if no window is open. Close detection lags a
    /// user's request by at most one poll interval.
    pub fn run_until_closed(&mut self) {
        while self.poll() {
            if let Some(rate) = self.poll_rate.as_mut() {
                rate.wait();
            }
        }
    }
}

impl Drop for GameWindow {
    /// Scoped cleanup: dropping the controller closes any open session, so
    /// the native window is released on early return, panic unwind, or
    /// ordinary process exit without an explicit `close`.
    fn drop(&mut self) {
        self.close();
    }
}
