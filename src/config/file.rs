use crate::config::{BreedsConfig, DEFAULT_TIMEOUT_MS};
use crate::adapters::http::DEFAULT_ENDPOINT;
use crate::utils::error::{BreedError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// ```toml
/// [source]
/// endpoint = "${BREEDS_API_ENDPOINT}"
/// timeout_ms = 6000
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub source: Option<SourceConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BreedError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_vars(content, |name| std::env::var(name).ok())?;
        toml::from_str(&processed).map_err(|e| BreedError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.endpoint.as_deref())
    }

    pub fn timeout_ms(&self) -> Option<u64> {
        self.source.as_ref().and_then(|s| s.timeout_ms)
    }

    pub fn into_config(self) -> BreedsConfig {
        BreedsConfig {
            api_endpoint: self
                .endpoint()
                .map(str::to_string)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout_ms: self.timeout_ms().unwrap_or(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        let source = validate_required_field("source", &self.source)?;
        if let Some(endpoint) = &source.endpoint {
            if endpoint.contains("${") {
                return Err(BreedError::InvalidConfigValueError {
                    field: "source.endpoint".to_string(),
                    value: endpoint.clone(),
                    reason: "Unresolved environment variable".to_string(),
                });
            }
        }
        self.clone().into_config().validate()
    }
}

/// 替換 `${VAR}`；查不到的變數保留原字串
pub fn substitute_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BreedError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
