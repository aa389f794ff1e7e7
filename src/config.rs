use crate::constants::{
    DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECS, ENV_API_URL, ENV_BEARER_TOKEN, ENV_OUTPUT_DIR,
    ENV_TIMEOUT_SECS, WHISK_API_URL,
};
use crate::error::{Result, WhiskError};
use std::{env, path::PathBuf, time::Duration};

#[derive(Debug, Clone)]
pub struct WhiskConfig {
    pub bearer_token: Option<String>,
    pub api_url: String,
    pub output_dir: PathBuf,
    pub timeout: Duration,
}

impl Default for WhiskConfig {
    fn default() -> Self {
        WhiskConfig {
            bearer_token: None,
            api_url: WHISK_API_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl WhiskConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let timeout = get(ENV_TIMEOUT_SECS)
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        WhiskConfig {
            bearer_token: get(ENV_BEARER_TOKEN).map(|t| t.trim().to_string()),
            api_url: get(ENV_API_URL).unwrap_or(defaults.api_url),
            output_dir: get(ENV_OUTPUT_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            timeout,
        }
    }

    pub fn token(&self) -> Result<&str> {
        self.bearer_token
            .as_deref()
            .ok_or(WhiskError::MissingToken)
    }
}
