//! TOML config file store

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::warn;

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, CONFIG_KEYS};
use crate::domain::error::ConfigError;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "MEETING_EXPORT_CONFIG";

/// Config file store, at `$MEETING_EXPORT_CONFIG` or under the XDG config dir
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Create a config store at `$MEETING_EXPORT_CONFIG`, or the XDG default
    pub fn new() -> Self {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::with_path(path),
            _ => Self::xdg_default(),
        }
    }

    /// Create a config store at `{config_dir}/meeting-export/config.toml`
    pub fn xdg_default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("meeting-export");

        Self::with_path(config_dir.join("config.toml"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse TOML content, warning about keys that will be ignored
    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        let table: toml::Table =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        for key in table.keys().filter(|k| !CONFIG_KEYS.contains(&k.as_str())) {
            warn!(key = %key, "Ignoring unknown config key");
        }

        toml::Value::Table(table)
            .try_into::<AppConfig>()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "config.toml".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The file holds the API key, so only the owner may read it
#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::empty()),
            Err(e) => {
                return Err(ConfigError::ReadError(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        Self::parse_toml(&content).map_err(|e| match e {
            ConfigError::ParseError(message) => {
                ConfigError::ParseError(format!("{}: {}", self.path.display(), message))
            }
            other => other,
        })
    }

    /// Write through a sibling temp file so a failed save keeps the old config
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let write_error = |e: std::io::Error| ConfigError::WriteError(e.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(write_error)?;
        }

        let content = Self::to_toml(config)?;
        let temp = self.temp_path();

        fs::write(&temp, content).await.map_err(write_error)?;
        restrict_permissions(&temp).await.map_err(write_error)?;
        fs::rename(&temp, &self.path).await.map_err(write_error)?;

        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }

        self.save(&AppConfig::defaults()).await
    }
}
