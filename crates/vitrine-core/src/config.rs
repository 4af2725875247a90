//! Application configuration management.
//!
//! Holds the carousel messages and the timings of every staged animation.
//! All fields have defaults matching the shipped pages, so a partial (or
//! missing) config file is fine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::MessageList;
use crate::error::{Error, Result};
use crate::splash::SplashConfig;
use crate::stats::StatsConfig;

/// Messages shown by the carousel when none are configured.
pub const DEFAULT_MESSAGES: [&str; 5] = [
    "Olá! Esta é a primeira mensagem.",
    "Aqui está a segunda mensagem, aparecendo como um pop-up.",
    "Você pode personalizar estas mensagens no arquivo de configuração.",
    "Siga o fluxo e aproveite a experiência!",
    "Fim das mensagens por enquanto.",
];

/// Default delay between the card exit animation and the text swap.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 300;

/// Timings of the page-level transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingConfig {
    /// Delay between "begin transition" and the text swap, in milliseconds.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Delay before the first message is shown, in milliseconds.
    #[serde(default = "default_intro_delay_ms")]
    pub intro_delay_ms: u64,
    /// Delay before the vignette fades out on a new screen, in milliseconds.
    #[serde(default = "default_vignette_delay_ms")]
    pub vignette_delay_ms: u64,
    /// Time the vignette takes to cover a screen being left, in milliseconds.
    #[serde(default = "default_leave_delay_ms")]
    pub leave_delay_ms: u64,
}

const fn default_settle_delay_ms() -> u64 {
    DEFAULT_SETTLE_DELAY_MS
}

const fn default_intro_delay_ms() -> u64 {
    500
}

const fn default_vignette_delay_ms() -> u64 {
    100
}

const fn default_leave_delay_ms() -> u64 {
    1000
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            intro_delay_ms: default_intro_delay_ms(),
            vignette_delay_ms: default_vignette_delay_ms(),
            leave_delay_ms: default_leave_delay_ms(),
        }
    }
}

impl TimingConfig {
    /// Settle delay as a [`Duration`].
    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Intro delay as a [`Duration`].
    #[must_use]
    pub const fn intro_delay(&self) -> Duration {
        Duration::from_millis(self.intro_delay_ms)
    }

    /// Vignette delay as a [`Duration`].
    #[must_use]
    pub const fn vignette_delay(&self) -> Duration {
        Duration::from_millis(self.vignette_delay_ms)
    }

    /// Leave delay as a [`Duration`].
    #[must_use]
    pub const fn leave_delay(&self) -> Duration {
        Duration::from_millis(self.leave_delay_ms)
    }
}

fn default_messages() -> Vec<String> {
    DEFAULT_MESSAGES.iter().map(ToString::to_string).collect()
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VitrineConfig {
    /// Carousel messages, in display order.
    #[serde(default = "default_messages")]
    pub messages: Vec<String>,
    /// Page transition timings.
    #[serde(default)]
    pub timings: TimingConfig,
    /// Splash screen loading animation.
    #[serde(default)]
    pub splash: SplashConfig,
    /// Statistic count-up animation.
    #[serde(default)]
    pub stats: StatsConfig,
}

impl Default for VitrineConfig {
    fn default() -> Self {
        Self {
            messages: default_messages(),
            timings: TimingConfig::default(),
            splash: SplashConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}

impl VitrineConfig {
    /// Check the configuration for values the pages cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.messages.is_empty() {
            return Err(Error::Configuration(
                "At least one carousel message is required".to_string(),
            ));
        }
        self.splash.validate()
    }

    /// The configured messages as a carousel list.
    pub fn message_list(&self) -> Result<MessageList> {
        MessageList::new(self.messages.iter().cloned())
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "runtime")]
mod file {
    use std::fs;
    use std::path::{Path, PathBuf};

    use tracing::{debug, info, warn};

    use super::VitrineConfig;
    use crate::error::{Error, Result};

    impl VitrineConfig {
        /// Load configuration from the default location, or create defaults
        /// if no file exists yet.
        ///
        /// # Errors
        ///
        /// Returns an error if the config file exists but cannot be read or parsed.
        pub fn load() -> Result<Self> {
            let config_path = config_file_path();

            if !config_path.exists() {
                debug!("Config file not found, using defaults");
                let config = Self::default();
                if let Err(e) = config.save_to(&config_path) {
                    warn!("Failed to save default config: {}", e);
                }
                return Ok(config);
            }

            Self::load_from(&config_path)
        }

        /// Load configuration from `path`.
        pub fn load_from(path: &Path) -> Result<Self> {
            let content = fs::read_to_string(path)
                .map_err(|e| Error::file_system(path, format!("Failed to read config file: {e}")))?;
            let config = Self::from_json(&content)?;

            info!("Loaded config from {}", path.display());
            debug!(messages = config.messages.len(), "Carousel messages loaded");
            Ok(config)
        }

        /// Save configuration to `path`, creating parent directories.
        pub fn save_to(&self, path: &Path) -> Result<()> {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::file_system(parent, format!("Failed to create config directory: {e}"))
                })?;
            }

            let content = serde_json::to_string_pretty(self)?;
            fs::write(path, content).map_err(|e| {
                Error::file_system(path, format!("Failed to write config file: {e}"))
            })?;

            info!("Saved config to {}", path.display());
            Ok(())
        }

        /// Get the path to the config file.
        #[must_use]
        pub fn config_file_path() -> PathBuf {
            config_file_path()
        }
    }

    /// Get the path to the config file.
    fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("vitrine")
            .join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = VitrineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.messages.len(), 5);
        assert_eq!(config.timings.settle_delay(), Duration::from_millis(300));
        assert_eq!(config.timings.intro_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = VitrineConfig::from_json(r#"{"messages": ["Oi", "Tchau"]}"#)
            .expect("Should parse");
        assert_eq!(config.messages, vec!["Oi", "Tchau"]);
        assert_eq!(config.timings, TimingConfig::default());
        assert_eq!(config.splash, SplashConfig::default());

        let config = VitrineConfig::from_json(r#"{"timings": {"settle_delay_ms": 120}}"#)
            .expect("Should parse");
        assert_eq!(config.timings.settle_delay_ms, 120);
        assert_eq!(config.timings.intro_delay_ms, 500);
        assert_eq!(config.messages.len(), DEFAULT_MESSAGES.len());
    }

    #[test]
    fn test_empty_messages_rejected() {
        let result = VitrineConfig::from_json(r#"{"messages": []}"#);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = VitrineConfig::from_json("{ not json");
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_message_list_matches_messages() {
        let config = VitrineConfig::default();
        let list = config.message_list().expect("default messages are non-empty");
        assert_eq!(list.as_slice(), config.messages.as_slice());
    }

    #[cfg(feature = "runtime")]
    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("nested").join("config.json");

        let config = VitrineConfig {
            messages: vec!["Primeira".to_string()],
            ..Default::default()
        };
        config.save_to(&path).expect("Should save");
        assert!(path.exists());

        let loaded = VitrineConfig::load_from(&path).expect("Should load");
        assert_eq!(loaded, config);
    }

    #[cfg(feature = "runtime")]
    #[test]
    fn test_load_missing_file_is_file_system_error() {
        let temp_dir = tempfile::TempDir::new().expect("Should create temp dir");
        let result = VitrineConfig::load_from(&temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::FileSystem { .. })));
    }

    #[cfg(feature = "runtime")]
    #[test]
    fn test_config_file_path_is_namespaced() {
        let path = VitrineConfig::config_file_path();
        assert!(path.ends_with("vitrine/config.json"));
    }
}
