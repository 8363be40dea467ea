use crate::domain::model::BreedsPayload;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 上游品種資料來源
#[async_trait]
pub trait BreedSource: Send + Sync {
    async fn fetch_breeds(&self) -> Result<BreedsPayload>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    /// `None` 代表不限時
    fn request_timeout(&self) -> Option<Duration>;
}
