use crate::Result;
use crate::facts::ProviderOptions;
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when none is given explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "ebert.toml";

/// Largest page size the GitHub REST API honors.
const MAX_PAGE_SIZE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the GitHub REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Items requested per page (1..=100)
    #[serde(default = "default_page_size")]
    pub page_size: u8,

    /// Maximum number of repository pages to fetch
    #[serde(default = "default_max_repo_pages")]
    pub max_repo_pages: u32,

    /// Maximum number of public event pages to fetch
    #[serde(default = "default_max_event_pages")]
    pub max_event_pages: u32,

    /// Timeout applied to each HTTP request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

const fn default_page_size() -> u8 {
    MAX_PAGE_SIZE
}

const fn default_max_repo_pages() -> u32 {
    50
}

const fn default_max_event_pages() -> u32 {
    3
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `ebert.toml` in `base_dir` is used if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading ebert configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading ebert configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Options handed to the GitHub provider.
    #[must_use]
    pub fn to_provider_options(&self) -> ProviderOptions {
        ProviderOptions {
            api_url: self.api_url.clone(),
            page_size: self.page_size,
            max_repo_pages: self.max_repo_pages,
            max_event_pages: self.max_event_pages,
            request_timeout: self.request_timeout,
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(app_err!("api_url must be an http:// or https:// URL, got '{}'", self.api_url));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(app_err!("page_size must be between 1 and {MAX_PAGE_SIZE}, got {}", self.page_size));
        }

        if self.max_repo_pages == 0 {
            return Err(app_err!("max_repo_pages must be at least 1"));
        }

        if self.max_event_pages == 0 {
            return Err(app_err!("max_event_pages must be at least 1"));
        }

        if self.request_timeout.is_zero() {
            return Err(app_err!("request_timeout must be greater than zero"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            page_size: default_page_size(),
            max_repo_pages: default_max_repo_pages(),
            max_event_pages: default_max_event_pages(),
            request_timeout: default_request_timeout(),
        }
    }
}
