use crate::adapters::http::HttpBreedSource;
use crate::config::LambdaConfig;
use crate::core::flatten::flatten_breeds;
use crate::core::{
    BreedSource, BreedsPayload, ConfigProvider, ErrorResult, HandlerResponse, SuccessResult,
};
use crate::utils::error::{BreedError, Result};
use crate::utils::validation::Validate;
use std::time::Duration;

pub struct BreedListHandler<S: BreedSource> {
    source: S,
    timeout: Option<Duration>,
}

impl<S: BreedSource> BreedListHandler<S> {
    pub fn new(source: S, timeout: Option<Duration>) -> Self {
        Self { source, timeout }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// 取得並攤平品種列表；所有失敗都轉成 `ErrorResult`，不會往外拋
    pub async fn handle(&self) -> HandlerResponse {
        tracing::debug!("Fetching dog breeds (timeout: {:?})", self.timeout);

        match self.fetch_within_timeout().await {
            Ok(payload) => {
                let body = flatten_breeds(&payload);
                tracing::info!(
                    "✅ Loaded {} breeds into {} entries",
                    payload.len(),
                    body.len()
                );
                HandlerResponse::Success(SuccessResult::new(body))
            }
            Err(err) => {
                tracing::debug!("Upstream failure detail: {}", err);
                let category = err.category();
                let result = ErrorResult::from(err);
                tracing::warn!(
                    status_code = result.status_code,
                    category = ?category,
                    "❌ Failed to load dog breeds: {}",
                    result.message
                );
                HandlerResponse::Error(result)
            }
        }
    }

    async fn fetch_within_timeout(&self) -> Result<BreedsPayload> {
        let Some(limit) = self.timeout else {
            return self.source.fetch_breeds().await;
        };

        // 先完成者勝出；落敗的 future 直接被 drop，請求隨之取消
        tokio::select! {
            biased;
            result = self.source.fetch_breeds() => result,
            _ = tokio::time::sleep(limit) => {
                tracing::warn!("Upstream did not respond within {:?}, request cancelled", limit);
                Err(BreedError::TransportTimeout)
            }
        }
    }
}

impl BreedListHandler<HttpBreedSource> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(HttpBreedSource::from_config(config), config.request_timeout())
    }
}

/// 無參數進入點：從環境變數讀取設定後執行一次
pub async fn handler() -> HandlerResponse {
    let config = match LambdaConfig::from_env().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("❌ Configuration validation failed: {}", err);
            return HandlerResponse::Error(ErrorResult::from(err));
        }
    };

    BreedListHandler::from_config(&config).handle().await
}
