//! Shared state handed to every tool handler

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::config::TwistConfig;
use crate::twist::{RequestParams, TwistApi, TwistClient, TwistResult};

/// Immutable config plus the gateway the handlers call through
#[derive(Clone)]
pub struct TwistContext {
    config: TwistConfig,
    api: Arc<dyn TwistApi>,
}

impl TwistContext {
    pub fn new(config: TwistConfig, api: Arc<dyn TwistApi>) -> Self {
        Self { config, api }
    }

    /// Context backed by a real HTTP client built from `config`
    pub fn from_config(config: TwistConfig) -> TwistResult<Self> {
        let client = TwistClient::from_config(&config)?;
        Ok(Self::new(config, Arc::new(client)))
    }

    pub fn config(&self) -> &TwistConfig {
        &self.config
    }

    /// `explicit` if given, else the configured default workspace
    pub fn workspace_or_default(&self, explicit: Option<i64>) -> Option<i64> {
        explicit.or(self.config.default_workspace_id())
    }

    pub async fn get<T: Serialize>(&self, endpoint: &str, args: &T) -> TwistResult<Value> {
        self.send(endpoint, args, Method::GET).await
    }

    pub async fn post<T: Serialize>(&self, endpoint: &str, args: &T) -> TwistResult<Value> {
        self.send(endpoint, args, Method::POST).await
    }

    async fn send<T: Serialize>(&self, endpoint: &str, args: &T, method: Method) -> TwistResult<Value> {
        let params = RequestParams::from_args(args)?;
        self.api
            .call(endpoint, &params, self.config.api_token(), method)
            .await
    }
}
