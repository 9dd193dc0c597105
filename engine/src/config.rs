use serde::Deserialize;
use std::{env, fs, path::PathBuf};

use terra_mailer::RelayCredentials;
use terra_types::UiOptions;

/// Application configuration, read from `~/.terra/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct TerraConfig {
    pub app: Option<AppConfig>,
    pub emailjs: Option<EmailJsConfig>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and indicators.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the particle field and motion effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Relay identifiers. Absent values fall back to environment variables
/// (`TERRA_EMAILJS_SERVICE_ID`, `TERRA_EMAILJS_TEMPLATE_ID`,
/// `TERRA_EMAILJS_PUBLIC_KEY`) and then to the baked-in production values.
#[derive(Default, Deserialize)]
pub struct EmailJsConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

// Manual Debug impl to keep the account key out of logs.
impl std::fmt::Debug for EmailJsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn mask(opt: Option<&String>) -> &'static str {
            if opt.is_some() { "[REDACTED]" } else { "None" }
        }
        f.debug_struct("EmailJsConfig")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &mask(self.public_key.as_ref()))
            .finish()
    }
}

impl TerraConfig {
    /// Location of the user config file, if a home directory exists.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".terra").join("config.toml"))
    }

    /// Load the user config. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path).map(Some),
            _ => Ok(None),
        }
    }

    /// Load and parse a specific config file.
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })
    }

    /// Resolved rendering options.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
            reduced_motion: app.is_some_and(|a| a.reduced_motion),
        }
    }

    /// Resolved relay credentials: config value, then environment, then the
    /// baked-in production identifiers.
    #[must_use]
    pub fn relay_credentials(&self) -> RelayCredentials {
        let defaults = RelayCredentials::default();
        let emailjs = self.emailjs.as_ref();

        let resolve = |configured: Option<&String>, env_key: &str, fallback: String| {
            configured
                .cloned()
                .or_else(|| env::var(env_key).ok())
                .unwrap_or(fallback)
        };

        RelayCredentials {
            service_id: resolve(
                emailjs.and_then(|e| e.service_id.as_ref()),
                "TERRA_EMAILJS_SERVICE_ID",
                defaults.service_id,
            ),
            template_id: resolve(
                emailjs.and_then(|e| e.template_id.as_ref()),
                "TERRA_EMAILJS_TEMPLATE_ID",
                defaults.template_id,
            ),
            public_key: resolve(
                emailjs.and_then(|e| e.public_key.as_ref()),
                "TERRA_EMAILJS_PUBLIC_KEY",
                defaults.public_key,
            ),
        }
    }
}
