// src/constants.rs

/// The name of the directory containing formic configuration (inside the
/// user config directory).
pub const CONFIG_DIR_NAME: &str = "formic";

/// The name of the configuration file.
pub const CONFIG_FILENAME: &str = "config.toml";

/// The prompt printed before each read, unless overridden by config.
pub const DEFAULT_PROMPT: &str = "❯❯❯ ";

/// The editor launched by the `edit` builtin when none is configured.
#[cfg(windows)]
pub const DEFAULT_EDITOR: &str = "notepad.exe";
#[cfg(not(windows))]
pub const DEFAULT_EDITOR: &str = "nano";

/// The exit status of the SIGINT shutdown path. Deliberately distinct from
/// 0, 1 and the 128+n convention so a supervising terminal can tell an
/// intentional teardown from a crash.
pub const SHUTDOWN_EXIT_CODE: i32 = 666;

/// The glyph tiled across the screen by the farewell render.
pub const FAREWELL_GLYPH: &str = "✖";
