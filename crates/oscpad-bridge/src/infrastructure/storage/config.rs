//! Line-oriented configuration for the bridge.
//!
//! The config file shares its format with the control surface's host-side
//! configuration: one `key | value` pair per line, e.g.
//!
//! ```text
//! rx_port      | 2729
//! scroll_base  | 2
//! mouse_border | 10
//! mouse_max_x  | 1920
//! mouse_max_y  | 1200
//! song_pos_x   | 1200
//! song_pos_y   | 1050
//! ```
//!
//! Lines that do not parse as a known `key | value` pair are ignored, and a
//! known key with an unparseable value keeps its default (with a warning).
//! A missing or unreadable file is never fatal: the bridge starts with the
//! documented defaults so a fresh install works before any file exists.
//!
//! Default location is the platform config directory
//! (`%APPDATA%\oscpad`, `~/.config/oscpad`, or
//! `~/Library/Application Support/oscpad`) plus `config.txt`; the CLI can
//! override the path.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use tracing::{info, warn};

/// Error type for configuration path resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,
}

// ── Config schema ─────────────────────────────────────────────────────────────

/// All tunable bridge parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    /// UDP port the bridge listens on.
    pub rx_port: u16,
    /// Base step for scroll magnitude resolution.
    pub scroll_base: i32,
    /// Dead-zone border at the screen edges, in pixels.
    pub mouse_border: f64,
    /// Virtual screen width in pixels.
    pub mouse_max_x: f64,
    /// Virtual screen height in pixels.
    pub mouse_max_y: f64,
    /// Song-launch virtual button position.
    pub song_pos_x: f64,
    pub song_pos_y: f64,
    /// Cue virtual button position.
    pub cue_pos_x: f64,
    pub cue_pos_y: f64,
    /// Legato-trigger virtual button position.
    pub legato_pos_x: f64,
    pub legato_pos_y: f64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            rx_port: default_rx_port(),
            scroll_base: default_scroll_base(),
            mouse_border: default_mouse_border(),
            mouse_max_x: default_mouse_max_x(),
            mouse_max_y: default_mouse_max_y(),
            song_pos_x: 1200.0,
            song_pos_y: 1050.0,
            cue_pos_x: 1814.0,
            cue_pos_y: 810.0,
            legato_pos_x: 328.0,
            legato_pos_y: 992.0,
        }
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_rx_port() -> u16 {
    2729
}
fn default_scroll_base() -> i32 {
    2
}
fn default_mouse_border() -> f64 {
    10.0
}
fn default_mouse_max_x() -> f64 {
    1920.0
}
fn default_mouse_max_y() -> f64 {
    1200.0
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parses config file content, starting from defaults.
///
/// Unknown keys and lines without a `|` separator are ignored; a known key
/// with an unparseable value keeps the default and logs a warning.
pub fn parse_config(content: &str) -> BridgeConfig {
    let mut cfg = BridgeConfig::default();

    for line in content.lines() {
        let Some((key, value)) = line.split_once('|') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        match key {
            "rx_port" => apply(&mut cfg.rx_port, key, value),
            "scroll_base" => apply(&mut cfg.scroll_base, key, value),
            "mouse_border" => apply(&mut cfg.mouse_border, key, value),
            "mouse_max_x" => apply(&mut cfg.mouse_max_x, key, value),
            "mouse_max_y" => apply(&mut cfg.mouse_max_y, key, value),
            "song_pos_x" => apply(&mut cfg.song_pos_x, key, value),
            "song_pos_y" => apply(&mut cfg.song_pos_y, key, value),
            "cue_pos_x" => apply(&mut cfg.cue_pos_x, key, value),
            "cue_pos_y" => apply(&mut cfg.cue_pos_y, key, value),
            "legato_pos_x" => apply(&mut cfg.legato_pos_x, key, value),
            "legato_pos_y" => apply(&mut cfg.legato_pos_y, key, value),
            _ => {}
        }
    }

    cfg
}

/// Parses `value` into `slot`, keeping the existing value on failure.
fn apply<T: FromStr>(slot: &mut T, key: &str, value: &str)
where
    T::Err: std::fmt::Display,
{
    match value.parse() {
        Ok(v) => *slot = v,
        Err(e) => warn!("invalid config value for {key}: {value:?} ({e}); keeping default"),
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Loads the configuration from `override_path`, or from the platform
/// default location when no override is given.
///
/// Never fails: any problem — unresolvable directory, missing file, read
/// error — is logged and the documented defaults apply.
pub fn load_config(override_path: Option<PathBuf>) -> BridgeConfig {
    let path = match override_path {
        Some(p) => p,
        None => match config_file_path() {
            Ok(p) => p,
            Err(e) => {
                warn!("{e}; using default configuration");
                return BridgeConfig::default();
            }
        },
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            info!("loaded configuration from {}", path.display());
            parse_config(&content)
        }
        Err(e) => {
            warn!(
                "could not read configuration at {}: {e}; using defaults",
                path.display()
            );
            BridgeConfig::default()
        }
    }
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the platform config base
/// directory cannot be determined from the environment.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.txt"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the platform config directory including the `oscpad` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("oscpad"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("oscpad"))
    }

    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/oscpad
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("oscpad")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
