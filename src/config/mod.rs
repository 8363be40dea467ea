#[cfg(feature = "cli")]
pub mod cli;
pub mod file;
pub mod lambda;

use crate::adapters::http::DEFAULT_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_MS: u64 = 6000;
pub const MAX_TIMEOUT_MS: u64 = 300_000;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use file::FileConfig;
pub use lambda::LambdaConfig;

/// 合併各來源後的執行設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedsConfig {
    pub api_endpoint: String,
    pub timeout_ms: u64,
}

impl Default for BreedsConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ConfigProvider for BreedsConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn request_timeout(&self) -> Option<Duration> {
        timeout_from_ms(self.timeout_ms)
    }
}

impl Validate for BreedsConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_range("timeout_ms", self.timeout_ms, 0, MAX_TIMEOUT_MS)?;
        Ok(())
    }
}

pub(crate) fn timeout_from_ms(timeout_ms: u64) -> Option<Duration> {
    (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms))
}
