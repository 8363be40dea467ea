use crate::config::{BreedsConfig, FileConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "breeds")]
#[command(about = "Fetch and flatten the dog breed list, printing the function response")]
pub struct CliConfig {
    #[arg(long, help = "Breed listing endpoint (default: https://dog.ceo/api/breeds/list/all)")]
    pub api_endpoint: Option<String>,

    #[arg(long, help = "Request timeout in milliseconds, 0 disables it (default: 6000)")]
    pub timeout_ms: Option<u64>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Pretty-print the JSON response")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 參數 > 設定檔 > 預設值
    pub fn resolve(&self) -> Result<BreedsConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = FileConfig::from_file(path)?;
                file.validate()?;
                file.into_config()
            }
            None => BreedsConfig::default(),
        };

        let config = BreedsConfig {
            api_endpoint: self.api_endpoint.clone().unwrap_or(file.api_endpoint),
            timeout_ms: self.timeout_ms.unwrap_or(file.timeout_ms),
        };
        config.validate()?;
        Ok(config)
    }
}
