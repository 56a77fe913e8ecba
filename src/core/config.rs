//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.paneboard/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::pane::{ListPane, PaneKind};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PaneboardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub panes: Vec<PaneEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub welcome_message: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NetworkConfig {
    pub write_addr: Option<String>,
    pub read_addr: Option<String>,
    pub connect_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaneKindEntry {
    #[default]
    Menu,
    Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaneEntry {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub kind: PaneKindEntry,
}

impl PaneEntry {
    fn new(title: &str, kind: PaneKindEntry, items: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
            kind,
        }
    }

    pub fn build(&self) -> ListPane {
        let kind = match self.kind {
            PaneKindEntry::Menu => PaneKind::Menu,
            PaneKindEntry::Command => PaneKind::Command,
        };
        ListPane::new(self.title.clone(), kind, self.items.iter().cloned())
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_WRITE_ADDR: &str = "localhost:9001";
pub const DEFAULT_READ_ADDR: &str = "localhost:9002";
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 2000;
pub const DEFAULT_LOG_FILE: &str = "paneboard.log";
pub const DEFAULT_WELCOME_MESSAGE: &str = "Welcome to Paneboard!";

pub fn default_panes() -> Vec<PaneEntry> {
    vec![
        PaneEntry::new("Pane 1", PaneKindEntry::Menu, &["Option A", "Option B", "Option C"]),
        PaneEntry::new("Pane 2", PaneKindEntry::Menu, &["Option X", "Option Y", "Option Z"]),
        PaneEntry::new(
            "Commands",
            PaneKindEntry::Command,
            &["Cmd 1", "Cmd 2", "Cmd 3", "Exit"],
        ),
        PaneEntry::new("Pane 4", PaneKindEntry::Menu, &["Opt 1", "Opt 2", "Opt 3"]),
    ]
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub write_addr: String,
    pub read_addr: String,
    pub connect_timeout: Duration,
    pub log_file: PathBuf,
    pub welcome_message: String,
    pub panes: Vec<PaneEntry>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub write_addr: Option<String>,
    pub read_addr: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.paneboard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".paneboard").join("config.toml"))
}

/// Where the loaded config came from. Logged once the logger is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file existed; a commented-out default was written here.
    Generated(PathBuf),
    /// Built-in defaults, with the reason no file was used.
    Defaults(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "loaded from {}", path.display()),
            ConfigSource::Generated(path) => {
                write!(f, "no config file, generated default at {}", path.display())
            }
            ConfigSource::Defaults(reason) => write!(f, "built-in defaults ({reason})"),
        }
    }
}

/// Load config from `explicit` if given, else `~/.paneboard/config.toml`.
///
/// A missing default file is generated (commented out) and treated as
/// empty. A missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<(PaneboardConfig, ConfigSource), ConfigError> {
    match explicit {
        Some(p) => load_from(p, false),
        None => match config_path() {
            Some(p) => load_from(&p, true),
            None => {
                warn!("Could not determine home directory, using default config");
                Ok((
                    PaneboardConfig::default(),
                    ConfigSource::Defaults("home directory not found".to_string()),
                ))
            }
        },
    }
}

fn load_from(
    path: &Path,
    generate_if_missing: bool,
) -> Result<(PaneboardConfig, ConfigSource), ConfigError> {
    if generate_if_missing && !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        let source = match generate_default_config(path) {
            Ok(()) => ConfigSource::Generated(path.to_path_buf()),
            Err(e) => {
                warn!("Failed to write default config: {}", e);
                ConfigSource::Defaults(format!("could not write {}: {e}", path.display()))
            }
        };
        return Ok((PaneboardConfig::default(), source));
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

/// Parse and validate TOML config text.
pub fn parse_config(contents: &str) -> Result<PaneboardConfig, ConfigError> {
    let config: PaneboardConfig = toml::from_str(contents).map_err(ConfigError::Parse)?;
    if let Some(pos) = config.panes.iter().position(|p| p.title.trim().is_empty()) {
        return Err(ConfigError::Invalid(format!("pane #{} has an empty title", pos + 1)));
    }
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Paneboard Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "paneboard.log"
# welcome_message = "Welcome to Paneboard!"

# [network]
# write_addr = "localhost:9001"      # Or set PANEBOARD_WRITE_ADDR
# read_addr = "localhost:9002"       # Or set PANEBOARD_READ_ADDR
# connect_timeout_ms = 2000

# Panes appear left to right in the order given.
# kind = "menu" items get a checkbox (Space toggles).
# kind = "command" items are sent on Enter; an item named "Exit" quits.

# [[panes]]
# title = "Pane 1"
# items = ["Option A", "Option B", "Option C"]
# kind = "menu"

# [[panes]]
# title = "Commands"
# items = ["Cmd 1", "Cmd 2", "Cmd 3", "Exit"]
# kind = "command"
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PaneboardConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Write address: CLI → env → config → default
    let write_addr = cli
        .write_addr
        .clone()
        .or_else(|| std::env::var("PANEBOARD_WRITE_ADDR").ok())
        .or_else(|| config.network.write_addr.clone())
        .unwrap_or_else(|| DEFAULT_WRITE_ADDR.to_string());

    // Read address: CLI → env → config → default
    let read_addr = cli
        .read_addr
        .clone()
        .or_else(|| std::env::var("PANEBOARD_READ_ADDR").ok())
        .or_else(|| config.network.read_addr.clone())
        .unwrap_or_else(|| DEFAULT_READ_ADDR.to_string());

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let panes = if config.panes.is_empty() {
        default_panes()
    } else {
        config.panes.clone()
    };

    ResolvedConfig {
        write_addr,
        read_addr,
        connect_timeout: Duration::from_millis(
            config
                .network
                .connect_timeout_ms
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS),
        ),
        log_file,
        welcome_message: config
            .general
            .welcome_message
            .clone()
            .unwrap_or_else(|| DEFAULT_WELCOME_MESSAGE.to_string()),
        panes,
    }
}
