use crate::form::{JsonLinesSubmitter, LogSubmitter, Submitter};
use crate::keymap::Keymap;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keymap: Keymap,
    /// Where completed forms go
    #[serde(default)]
    pub submission: SubmissionConfig,
}

/// How a completed form is submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionMode {
    /// Write the record to the log file
    #[default]
    Log,
    /// Append the record as a JSON line to `path`
    File,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionConfig {
    #[serde(default)]
    pub mode: SubmissionMode,
    /// Target file for `file` mode; `~` is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            keymap: Keymap::default(),
            submission: SubmissionConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or create it with defaults
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            Self::load(config_path)
        } else {
            info!(path = ?config_path, "Creating default config");
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Load configuration from an existing file
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        for (key, reason) in config.keymap.invalid_overrides() {
            warn!(key = %key, reason = %reason, "Ignoring invalid key binding");
        }

        Ok(config)
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // 600: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    pub fn theme_type(&self) -> ThemeType {
        self.theme.parse().unwrap_or_default()
    }

    /// Resolved path for `file` submission mode
    pub fn submissions_path(&self) -> PathBuf {
        self.submission
            .path
            .as_deref()
            .map_or_else(crate::utils::default_submissions_path, crate::utils::expand_path)
    }

    /// Build the submitter selected by this config
    pub fn submitter(&self) -> Box<dyn Submitter> {
        match self.submission.mode {
            SubmissionMode::Log => Box::new(LogSubmitter),
            SubmissionMode::File => Box::new(JsonLinesSubmitter::new(self.submissions_path())),
        }
    }
}
