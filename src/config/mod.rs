use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{app_data_dir, config_file_in, ensure_dir, write_atomic},
    currency::{CurrencyCode, LocaleConfig},
    errors::{ExpenseError, ExpenseResult},
};

pub const FETCH_EXPENSES_PATH: &str = "expenses/fetch";
pub const ADD_EXPENSE_PATH: &str = "expenses/add";
pub const UPDATE_STATUS_PATH: &str = "expenses/update-status";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub currency: String,
    pub locale: String,
    /// Identifier of the signed-in user, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://expensy-rr68.onrender.com/api".into(),
            currency: "INR".into(),
            locale: "en-IN".into(),
            user_id: None,
        }
    }
}

impl Config {
    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(&self.currency)
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig::for_tag(&self.locale)
    }

    /// Absolute URL for an API path such as [`UPDATE_STATUS_PATH`].
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn validate(&self) -> ExpenseResult<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(ExpenseError::Config("api_base_url must not be empty".into()));
        }
        if self.currency.trim().is_empty() {
            return Err(ExpenseError::Config("currency must not be empty".into()));
        }
        Ok(())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> ExpenseResult<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> ExpenseResult<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Reads the config file, falling back to defaults when none exists yet.
    pub fn load(&self) -> ExpenseResult<Config> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> ExpenseResult<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
