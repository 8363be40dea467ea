pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{BreedsConfig, FileConfig, LambdaConfig};

pub use crate::adapters::http::HttpBreedSource;
pub use crate::core::handler::{handler, BreedListHandler};
pub use crate::domain::model::{BreedsPayload, ErrorResult, HandlerResponse, SuccessResult};
pub use crate::utils::error::{BreedError, Result};
