//! # Game Window
//!
//! Lifecycle bindings to `libwindow`, a native fullscreen window library.
//!
//! The native library does all of the real window engineering (window
//! creation, platform event pumping, close-button detection); this crate is
//! the scripting-layer glue on top of its three-function interface:
//! `create_fullscreen_window`, `window_should_close`, and `destroy_window`.
//! What the crate guarantees is lifecycle correctness:
//!
//! - **Single session**: at most one window open per [`GameWindow`] instance.
//! - **Exactly-once destroy**: the native window is destroyed exactly once
//!   per open session, whether the caller closes it, the user clicks the
//!   close button, or the controller simply goes out of scope.
//! - **Fixed-cadence close polling**: close requests are detected by polling
//!   the native library at a fixed interval (16 ms by default, roughly 60 Hz).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use game_window::{GameWindow, WindowResult};
//!
//! fn main() -> WindowResult<()> {
//!     game_window::logging::init();
//!
//!     let mut window = GameWindow::new()?;
//!     window.open("My Game")?;
//!
//!     // Blocks until the user closes the window.
//!     window.run_until_closed();
//!     Ok(())
//! }
//! ```
//!
//! The window is also closed automatically when the [`GameWindow`] value is
//! dropped, so an early return or panic never leaks the native window.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod backend;
pub mod config;
pub mod logging;
mod rate;
mod window;

#[cfg(unix)]
mod native;

#[cfg(not(unix))]
compile_error!("game_window loads libwindow with dlopen and only supports Unix platforms");

pub use config::{ConfigError, WindowConfig};
pub use window::{GameWindow, WindowError, WindowResult};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::WindowConfig,
        window::{GameWindow, WindowError, WindowResult},
    };
}
