use crate::adapters::http::DEFAULT_ENDPOINT;
use crate::config::{BreedsConfig, DEFAULT_TIMEOUT_MS};
use crate::utils::error::Result;
use crate::utils::validation::parse_timeout_ms;
use std::env;

pub const ENDPOINT_VAR: &str = "BREEDS_API_ENDPOINT";
pub const TIMEOUT_VAR: &str = "BREEDS_TIMEOUT_MS";

#[derive(Debug, Clone)]
pub struct LambdaConfig;

impl LambdaConfig {
    pub fn from_env() -> Result<BreedsConfig> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 以任意查詢函式讀取設定，方便測試時不動到行程環境變數
    pub fn from_lookup<F>(lookup: F) -> Result<BreedsConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_endpoint = lookup(ENDPOINT_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout_ms = match lookup(TIMEOUT_VAR) {
            Some(raw) => parse_timeout_ms(TIMEOUT_VAR, &raw)?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(BreedsConfig {
            api_endpoint,
            timeout_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BreedError;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = LambdaConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, BreedsConfig::default());
    }

    #[test]
    fn test_reads_overrides() {
        let config = LambdaConfig::from_lookup(lookup_from(&[
            (ENDPOINT_VAR, "http://localhost:9000/breeds"),
            (TIMEOUT_VAR, "1500"),
        ]))
        .unwrap();

        assert_eq!(config.api_endpoint, "http://localhost:9000/breeds");
        assert_eq!(config.timeout_ms, 1500);
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        let result = LambdaConfig::from_lookup(lookup_from(&[(TIMEOUT_VAR, "6s")]));
        tokio_test::assert_err!(&result);
        assert!(matches!(
            result,
            Err(BreedError::InvalidConfigValueError { .. })
        ));
    }
}
