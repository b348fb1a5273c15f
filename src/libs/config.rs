//! Application configuration.
//!
//! Stored as pretty-printed JSON in `config.json` inside the data directory
//! (see [`DataStorage`]). A missing file yields the defaults: the REST
//! backend at `http://localhost:8080` and a 48 hour weekly limit.
//!
//! Two environment variables override the file, also when set through a
//! `.env` file in the working directory:
//!
//! - `TURNOS_BACKEND`: `http` or `local`
//! - `TURNOS_API_URL`: base URL of the shift service
//!
//! ```json
//! {
//!   "backend": "http",
//!   "api": { "api_url": "http://localhost:8080" },
//!   "rules": { "weekly_hours_limit": 48.0 }
//! }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use clap::ValueEnum;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

/// File name of the configuration inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";
/// Shift service address used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
/// Environment variable selecting the backend.
pub const ENV_BACKEND: &str = "TURNOS_BACKEND";
/// Environment variable overriding the shift service address.
pub const ENV_API_URL: &str = "TURNOS_API_URL";

/// Where shifts are stored.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// The shift service over HTTP
    #[default]
    Http,
    /// SQLite file in the data directory
    Local,
}

impl BackendKind {
    /// Case-insensitive `http` or `local`.
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "http" => Some(BackendKind::Http),
            "local" => Some(BackendKind::Local),
            _ => None,
        }
    }
}

/// Connection settings of the shift service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL, e.g. `http://localhost:8080`
    pub api_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Business rules applied by the local backend.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RulesConfig {
    /// Weekly hours above which overtime is reported
    pub weekly_hours_limit: f64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self { weekly_hours_limit: 48.0 }
    }
}

/// Main configuration structure.
///
/// Optional sections are left out of the file until they are set, and
/// their accessors fall back to the section defaults.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RulesConfig>,
}

impl Config {
    /// Reads `config.json`, or the defaults when it does not exist yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        serde_json::from_str(&config_str)
            .map_err(|e| msg_error_anyhow!(Message::ConfigParseError(config_file_path.display().to_string(), e.to_string())))
    }

    /// [`Config::read`] with the environment overrides applied.
    pub fn load() -> Result<Config> {
        dotenv::dotenv().ok();
        let mut config = Self::read()?;
        config.apply_env()?;
        Ok(config)
    }

    /// Applies `TURNOS_BACKEND` and `TURNOS_API_URL` when they are set.
    ///
    /// # Returns
    ///
    /// `Ok(())`, or an error when `TURNOS_BACKEND` names an unknown backend.
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(value) = env::var(ENV_BACKEND) {
            self.backend = BackendKind::parse(&value).ok_or_else(|| msg_error_anyhow!(Message::InvalidBackend(value.clone())))?;
        }
        if let Ok(url) = env::var(ENV_API_URL) {
            self.api = Some(ApiConfig { api_url: url });
        }
        Ok(())
    }

    /// Writes the configuration to `config.json`, creating the data
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// API section, or its defaults.
    pub fn api(&self) -> ApiConfig {
        self.api.clone().unwrap_or_default()
    }

    /// Configured weekly limit, 48 hours by default.
    pub fn weekly_hours_limit(&self) -> f64 {
        self.rules.clone().unwrap_or_default().weekly_hours_limit
    }

    /// Interactive setup, prefilled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        let backends = [BackendKind::Http, BackendKind::Local];
        let labels = [Message::BackendHttp.to_string(), Message::BackendLocal.to_string()];
        let current = backends.iter().position(|b| *b == config.backend).unwrap_or(0);
        let selected = Select::with_theme(&theme)
            .with_prompt(Message::PromptBackend.to_string())
            .items(&labels)
            .default(current)
            .interact()?;
        config.backend = backends[selected];

        if config.backend == BackendKind::Http {
            let default = config.api();
            msg_print!(Message::ConfigModuleApi);
            config.api = Some(ApiConfig {
                api_url: Input::with_theme(&theme)
                    .with_prompt(Message::PromptApiUrl.to_string())
                    .default(default.api_url)
                    .interact_text()?,
            });
        }

        let default = config.rules.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleRules);
        config.rules = Some(RulesConfig {
            weekly_hours_limit: Input::with_theme(&theme)
                .with_prompt(Message::PromptWeeklyHoursLimit.to_string())
                .default(default.weekly_hours_limit)
                .interact_text()?,
        });

        Ok(config)
    }
}
