use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// Title shown in the header and on the counter card.
    #[serde(default = "default_title")]
    pub title: String,
    /// How long the input thread waits for a terminal event per poll (default: 250).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Capture mouse clicks so the buttons can be pressed (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// File logging settings. The terminal belongs to the UI, so logs never go to stdout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    /// `EnvFilter` directive, e.g. "info" or "counter_tui=debug".
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to [`LoggingConfig::default_file`].
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_title() -> String {
    "Redux Toolkit Counter".to_string()
}

fn default_poll_interval_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            poll_interval_ms: default_poll_interval_ms(),
            mouse: default_mouse(),
        }
    }
}

impl UiConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// `<state_dir>/counter-tui/counter-tui.log`, falling back to the local
    /// data dir and then the current directory.
    pub fn default_file() -> PathBuf {
        let base = dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("counter-tui").join("counter-tui.log")
    }

    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(Self::default_file)
    }
}
