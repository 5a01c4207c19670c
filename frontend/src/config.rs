use log::Level;

/// Scroll offset (px) past which the navbar switches to its compact mode.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Viewport width (px) at which the desktop layout takes over.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

/// Local storage slot holding "dark" or "light".
pub const THEME_STORAGE_KEY: &str = "theme";

pub const ATTENTION_DELAY_MS: u32 = 3000;
pub const VIBRATE_INTERVAL_MS: u32 = 5000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose state transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
