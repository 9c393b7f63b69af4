//! reqwest-backed Twist API client
//!
//! One call is one HTTP request: no retries and no pagination. GET
//! parameters travel in the query string, POST parameters as a urlencoded
//! form body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::error::{TwistError, TwistResult};
use super::params::RequestParams;
use crate::config::TwistConfig;

/// Request gateway used by the tool handlers
#[async_trait]
pub trait TwistApi: Send + Sync {
    /// Issue `method` against `endpoint` (relative to the API root) with a
    /// bearer `token`, returning the decoded JSON body
    async fn call(
        &self,
        endpoint: &str,
        params: &RequestParams,
        token: &str,
        method: Method,
    ) -> TwistResult<Value>;
}

/// HTTP implementation of [`TwistApi`]
#[derive(Debug, Clone)]
pub struct TwistClient {
    client: Client,
    base_url: String,
}

impl TwistClient {
    /// `base_url` must end with `/`; endpoints are appended verbatim
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> TwistResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("twist-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &TwistConfig) -> TwistResult<Self> {
        Self::new(config.base_url(), config.timeout())
    }
}

#[async_trait]
impl TwistApi for TwistClient {
    #[instrument(skip(self, params, token, method), fields(method = %method))]
    async fn call(
        &self,
        endpoint: &str,
        params: &RequestParams,
        token: &str,
        method: Method,
    ) -> TwistResult<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        let pairs = params.to_pairs();

        let request = match method {
            Method::GET => self.client.get(&url).query(&pairs),
            Method::POST => self.client.post(&url).form(&pairs),
            other => {
                error!(method = %other, "Twist API request failed: unsupported method");
                return Err(TwistError::UnsupportedMethod(other.to_string()));
            }
        };

        debug!(%url, params = ?params.keys().collect::<Vec<_>>(), "sending Twist API request");

        let response = request.bearer_auth(token).send().await.map_err(|e| {
            error!(%url, error = %e, "Twist API request failed");
            TwistError::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(%url, error = %e, "Twist API request failed while reading body");
            TwistError::Transport(e)
        })?;

        if !status.is_success() {
            error!(%url, status = status.as_u16(), body = %body, "Twist API request failed");
            return Err(TwistError::Http {
                status: status.as_u16(),
                url,
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            error!(%url, error = %e, "Twist API returned invalid JSON");
            TwistError::Decode(e)
        })
    }
}
