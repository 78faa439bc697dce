use std::{net::IpAddr, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidatorKind {
    #[default]
    Signature,
    Utf8Text,
}

impl ValidatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorKind::Signature => "signature",
            ValidatorKind::Utf8Text => "utf8-text",
        }
    }
}

impl std::str::FromStr for ValidatorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "signature" => Ok(ValidatorKind::Signature),
            "utf8-text" | "text" => Ok(ValidatorKind::Utf8Text),
            other => Err(ConfigError::Invalid {
                key: "FORMAT_VALIDATOR",
                reason: format!("unknown validator '{}'", other),
            }),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: IpAddr,
    pub port: u16,
    pub storage_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub validator: ValidatorKind,
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            storage_dir: PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            validator: ValidatorKind::default(),
            cors_allowed_origins: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(value) = lookup("BIND_ADDRESS") {
            config.bind_address = value.trim().parse().map_err(|e| ConfigError::Invalid {
                key: "BIND_ADDRESS",
                reason: format!("{}", e),
            })?;
        }

        if let Some(value) = lookup("PORT") {
            config.port = value.trim().parse().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: format!("{}", e),
            })?;
        }

        if let Some(value) = lookup("STORAGE_DIR") {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    key: "STORAGE_DIR",
                    reason: "must not be empty".to_string(),
                });
            }
            config.storage_dir = PathBuf::from(value.trim());
        }

        if let Some(value) = lookup("MAX_UPLOAD_BYTES") {
            config.max_upload_bytes = value.trim().parse().map_err(|e| ConfigError::Invalid {
                key: "MAX_UPLOAD_BYTES",
                reason: format!("{}", e),
            })?;
        }

        if let Some(value) = lookup("FORMAT_VALIDATOR") {
            config.validator = value.parse()?;
        }

        if let Some(value) = lookup("CORS_ALLOWED_ORIGINS") {
            let origins: Vec<String> = value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !origins.is_empty() {
                config.cors_allowed_origins = Some(origins);
            }
        }

        Ok(config)
    }
}
