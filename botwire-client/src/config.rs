//! Client configuration.

use std::env;
use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::prepare::Pruning;

/// The public Bot API server.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Configuration for [`crate::Client::from_config`].
#[derive(Clone)]
pub struct Config {
    /// Bot token as issued by @BotFather, e.g. `123456:ABC-DEF…`.
    pub token:   String,
    /// Base URL of the Bot API server (default: [`DEFAULT_API_URL`]).
    /// Point it at a local server to lift the upload limits.
    pub api_url: String,
    /// Whole-request timeout. Must exceed the long-polling timeout if set.
    pub timeout: Option<Duration>,
    /// Which empty parameters are left out of requests.
    pub pruning: Pruning,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token:   String::new(),
            api_url: DEFAULT_API_URL.to_owned(),
            timeout: None,
            pruning: Pruning::default(),
        }
    }
}

// The token is a credential; keep it out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .field("pruning", &self.pruning)
            .finish()
    }
}

/// Why [`Config::from_env`] failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BOTWIRE_TOKEN is not set")]
    MissingToken,
    #[error("BOTWIRE_TIMEOUT_SECS must be a whole number of seconds, got `{0}`")]
    InvalidTimeout(String),
}

impl Config {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into(), ..Self::default() }
    }

    /// Read `BOTWIRE_TOKEN`, and optionally `BOTWIRE_API_URL` and
    /// `BOTWIRE_TIMEOUT_SECS`, from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = env::var("BOTWIRE_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let mut config = Self::new(token.trim());
        if let Ok(url) = env::var("BOTWIRE_API_URL") {
            if !url.trim().is_empty() {
                config.api_url = url.trim().to_owned();
            }
        }
        if let Ok(raw) = env::var("BOTWIRE_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// URL for calling `method`: `<api_url>/bot<token>/<method>`.
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.base(), self.token)
    }

    /// Download URL for a [`botwire_types::types::File`]'s `file_path`.
    pub fn file_url(&self, file_path: &str) -> String {
        format!("{}/file/bot{}/{}", self.base(), self.token, file_path.trim_start_matches('/'))
    }

    fn base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_from_base_and_token() {
        let config = Config { api_url: "http://localhost:8081/".into(), ..Config::new("1:abc") };
        assert_eq!(config.method_url("getMe"), "http://localhost:8081/bot1:abc/getMe");
        assert_eq!(
            config.file_url("/photos/file_0.jpg"),
            "http://localhost:8081/file/bot1:abc/photos/file_0.jpg"
        );
    }

    #[test]
    fn debug_hides_the_token() {
        let shown = format!("{:?}", Config::new("1:secret"));
        assert!(!shown.contains("secret"));
        assert!(shown.contains(DEFAULT_API_URL));
    }
}
