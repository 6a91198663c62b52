//! Runtime configuration.
//!
//! Built with defaults, adjusted from `ABD_*` environment variables, and
//! then passed by reference to everything that talks to the API or the
//! filesystem.
//!
//! ```ignore
//! use abd_admin::config::AdminConfig;
//!
//! let config = AdminConfig::from_env()?.with_api_root("http://localhost:8000");
//! assert_eq!(config.admin_base(), "http://localhost:8000/admin");
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::auth::AdminCredentials;
use crate::error::{AdminResult, SystemError};

/// Production API root.
pub const DEFAULT_API_ROOT: &str = "https://api.a-b-d.ru";

/// Path segment in front of every resource endpoint.
pub const DEFAULT_ADMIN_PREFIX: &str = "admin";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Directory under `$HOME` holding the session file and logs.
pub const DATA_DIR_NAME: &str = ".abd-admin";

pub const ENV_API_ROOT: &str = "ABD_API_ROOT";
pub const ENV_ADMIN_LOGIN: &str = "ABD_ADMIN_LOGIN";
pub const ENV_ADMIN_KEY: &str = "ABD_ADMIN_KEY";
pub const ENV_TIMEOUT_SECS: &str = "ABD_TIMEOUT_SECS";
pub const ENV_PAGE_SIZE: &str = "ABD_PAGE_SIZE";
pub const ENV_LOG: &str = "ABD_LOG";
pub const ENV_DATA_DIR: &str = "ABD_DATA_DIR";

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminConfig {
    /// API root without trailing slash, e.g. `https://api.a-b-d.ru`.
    pub api_root: String,
    pub admin_prefix: String,
    /// Admin login used when the stored session is already logged in.
    pub login: Option<String>,
    /// Admin key paired with `login`.
    pub key: Option<String>,
    pub request_timeout: Duration,
    /// Overrides every resource's default page size.
    pub page_size: Option<u32>,
    /// `EnvFilter` directive for the log file.
    pub log_filter: String,
    pub data_dir: PathBuf,
}

impl Default for AdminConfig {
    fn default() -> Self {
        let data_dir = dirs::home_dir().unwrap_or_default().join(DATA_DIR_NAME);
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            admin_prefix: DEFAULT_ADMIN_PREFIX.to_string(),
            login: None,
            key: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            data_dir,
        }
    }
}

impl AdminConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root. A trailing slash is dropped.
    pub fn with_api_root(mut self, root: impl Into<String>) -> Self {
        self.api_root = root.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_credentials(mut self, login: impl Into<String>, key: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self.key = Some(key.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Defaults overlaid with the `ABD_*` environment variables.
    ///
    /// Unset or empty variables keep the default. Malformed numbers are
    /// rejected so a typo does not silently fall back.
    pub fn from_env() -> AdminResult<Self> {
        let mut config = Self::default();

        if let Some(root) = env_value(ENV_API_ROOT) {
            config = config.with_api_root(root);
        }
        if let (Some(login), Some(key)) = (env_value(ENV_ADMIN_LOGIN), env_value(ENV_ADMIN_KEY)) {
            config = config.with_credentials(login, key);
        }
        if let Some(raw) = env_value(ENV_TIMEOUT_SECS) {
            let secs = parse_number::<u64>(ENV_TIMEOUT_SECS, &raw)?;
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        if let Some(raw) = env_value(ENV_PAGE_SIZE) {
            let size = parse_number::<u32>(ENV_PAGE_SIZE, &raw)?;
            if size == 0 {
                return Err(SystemError::Config {
                    message: format!("{} must be greater than zero", ENV_PAGE_SIZE),
                }
                .into());
            }
            config = config.with_page_size(size);
        }
        if let Some(filter) = env_value(ENV_LOG) {
            config = config.with_log_filter(filter);
        }
        let data_dir = resolve_data_dir(env_value(ENV_DATA_DIR), dirs::home_dir())?;

        Ok(config.with_data_dir(data_dir))
    }

    /// Base URL of the resource endpoints, e.g. `https://api.a-b-d.ru/admin`.
    pub fn admin_base(&self) -> String {
        format!("{}/{}", self.api_root, self.admin_prefix)
    }

    /// URL of the login check.
    pub fn auth_check_url(&self) -> String {
        format!("{}/test-admin-auth", self.api_root)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    /// Credentials from the environment, if both halves are set.
    pub fn default_credentials(&self) -> Option<AdminCredentials> {
        match (&self.login, &self.key) {
            (Some(login), Some(key)) => Some(AdminCredentials::new(login.clone(), key.clone())),
            _ => None,
        }
    }
}

/// `ABD_DATA_DIR` when set, else `$HOME/.abd-admin`.
fn resolve_data_dir(explicit: Option<String>, home: Option<PathBuf>) -> AdminResult<PathBuf> {
    match (explicit, home) {
        (Some(dir), _) => Ok(PathBuf::from(dir)),
        (None, Some(home)) => Ok(home.join(DATA_DIR_NAME)),
        (None, None) => Err(SystemError::NoHomeDirectory.into()),
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> AdminResult<T> {
    raw.parse::<T>().map_err(|_| {
        SystemError::Config {
            message: format!("{} must be a number, got '{}'", name, raw),
        }
        .into()
    })
}
