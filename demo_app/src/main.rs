//! Fullscreen window demo
//!
//! Opens a fullscreen window through the native `libwindow` library and runs
//! until the user closes it. Drop this binary's loop in favor of your own
//! game loop and call `poll()` once per frame instead.

use game_window::{GameWindow, WindowConfig};

const CONFIG_PATH: &str = "window.toml";

fn load_config() -> WindowConfig {
    if !std::path::Path::new(CONFIG_PATH).exists() {
        return WindowConfig::default();
    }
    match WindowConfig::load_from_file(CONFIG_PATH) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring {CONFIG_PATH}: {err}");
            WindowConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    game_window::logging::init();

    let mut window = GameWindow::with_config(load_config())?;
    window.open("My Game")?;

    // Game logic would go here. The window closes itself when the user
    // clicks the close button, and the drop guard covers every other exit
    // path.
    window.run_until_closed();
    Ok(())
}
