use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::Credentials;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingSection,
    pub auth: AuthSection,
    pub docs: DocsSection,
}

impl AppConfig {
    /// Load configuration from disk and environment, then validate it.
    ///
    /// The file path comes from `APP_CONFIG` (default `config.toml`) and is
    /// optional. Environment variables use the `APP_` prefix, e.g.
    /// `APP_SERVER_PORT`; a bare `PORT` is accepted for `server.port` when no
    /// other source sets it. Values are kept as strings until deserialized.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("APP_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(config_path)
    }

    pub fn load_from(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let mut builder = config::Config::builder();

        if config_path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("APP")
                .separator("_")
                .try_parsing(false),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.server.port.is_none() {
            if let Ok(port) = env::var("PORT") {
                let port = port
                    .trim()
                    .parse::<u16>()
                    .map_err(|err| Error::invalid_config("PORT", format!("{port:?}: {err}")))?;
                config.server.port = Some(port);
            }
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Check every required key, reporting all missing ones together.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();

        if self.server.port.is_none() {
            missing.push("server.port");
        }
        if self.server.host.trim().is_empty() {
            missing.push("server.host");
        }
        if self.auth.username.trim().is_empty() {
            missing.push("auth.username");
        }
        if self.auth.password.is_empty() {
            missing.push("auth.password");
        }
        if self.auth.token.trim().is_empty() {
            missing.push("auth.token");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::missing_config(missing))
        }
    }

    /// Address to bind, as `host:port`.
    pub fn listen_addr(&self) -> Result<String> {
        let port = self
            .server
            .port
            .ok_or_else(|| Error::missing_config(["server.port"]))?;
        Ok(format!("{}:{}", self.server.host, port))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: Option<u16>,
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: None,
            cors: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthSection {
    pub username: String,
    pub password: String,
    pub token: String,
}

impl AuthSection {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
            token: self.token.clone(),
        }
    }
}

impl Default for AuthSection {
    fn default() -> Self {
        let defaults = Credentials::default();
        Self {
            username: defaults.username,
            password: defaults.password,
            token: defaults.token,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocsSection {
    pub enabled: bool,
}

impl Default for DocsSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}
