//! Application constants
//!
//! Centralized location for timing defaults and file names.

/// Base delay before typing the next character, in milliseconds
pub const TYPING_BASE_MS: u64 = 200;

/// Base delay before deleting the next character, in milliseconds
pub const DELETING_BASE_MS: u64 = 100;

/// Upper bound of the random jitter added to each keystroke, in milliseconds
pub const JITTER_MAX_MS: u64 = 50;

/// How long a completed phrase stays on screen before deletion starts
pub const HOLD_MS: u64 = 1500;

/// Environment variable pointing at a profile file
pub const PROFILE_ENV: &str = "NOTYMN_PROFILE";

/// Directory under $HOME searched for a profile
pub const CONFIG_DIR_NAME: &str = ".notymn";

/// Profile file names tried in order inside the config directory
pub const PROFILE_FILE_NAMES: &[&str] = &["profile.yaml", "profile.yml", "profile.json"];

/// Log file written in the working directory
pub const LOG_FILE_NAME: &str = "notymn.log";

/// Cursor glyph drawn after the typed text
pub const CURSOR_GLYPH: &str = "▌";

/// Application name
pub const APP_NAME: &str = "notymn";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
