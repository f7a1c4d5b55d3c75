//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::meeting::{validate_pattern, DisplayZone};
use crate::domain::notion::OverflowPolicy;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

fn ensure_valid_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;
    store.save(&config).await?;

    let shown = if key == "api_key" {
        mask_api_key(value)
    } else {
        value.to_string()
    };
    presenter.success(&format!("{} = {}", key, shown));

    Ok(())
}

/// Write a validated value into the matching config field
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let value = value.to_string();
    match key {
        "api_key" => config.api_key = Some(value),
        "page_id" => config.page_id = Some(value),
        "overflow" => config.overflow = Some(value.to_lowercase()),
        "timezone" => config.timezone = Some(value),
        "date_format" => config.date_format = Some(value),
        "time_format" => config.time_format = Some(value),
        "api_base_url" => config.api_base_url = Some(value),
        "timeout_secs" => config.timeout_secs = Some(parse_timeout(key, &value)?),
        _ => ensure_valid_key(key)?,
    }
    Ok(())
}

/// Read a config field as display text
fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "api_key" => config.api_key.as_deref().map(mask_api_key),
        "page_id" => config.page_id.clone(),
        "overflow" => config.overflow.clone(),
        "timezone" => config.timezone.clone(),
        "date_format" => config.date_format.clone(),
        "time_format" => config.time_format.clone(),
        "api_base_url" => config.api_base_url.clone(),
        "timeout_secs" => config.timeout_secs.map(|t| t.to_string()),
        _ => None,
    }
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let config = store.load().await?;
    presenter.output(read_value(&config, key).as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, read_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "overflow" => {
            value
                .parse::<OverflowPolicy>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "timezone" => {
            value
                .parse::<DisplayZone>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "api_base_url" => {
            if !(value.starts_with("https://") || value.starts_with("http://")) {
                return Err(invalid("Value must start with http:// or https://".to_string()));
            }
        }
        "timeout_secs" => {
            parse_timeout(key, value)?;
        }
        "date_format" | "time_format" => {
            if value.trim().is_empty() {
                return Err(invalid("Value must not be empty".to_string()));
            }
            validate_pattern(value).map_err(|e| invalid(e.to_string()))?;
        }
        "api_key" | "page_id" => {
            if value.trim().is_empty() {
                return Err(invalid("Value must not be empty".to_string()));
            }
        }
        _ => {}
    }
    Ok(())
}

fn parse_timeout(key: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be a positive number of seconds".to_string(),
        }),
    }
}

/// Mask API key for display (show first 4 and last 4 chars)
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
