/*!
* 文件名: config
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: None
* 描述: 客户端与同步轮询配置 / Client and sync polling configuration
*/

use crate::error::{ContextError, Result};
use agentbay::DEFAULT_ENDPOINT;
use std::time::Duration;

pub const ENV_API_KEY: &str = "AGENTBAY_API_KEY";
pub const ENV_ENDPOINT: &str = "AGENTBAY_ENDPOINT";
pub const ENV_TIMEOUT_MS: &str = "AGENTBAY_TIMEOUT_MS";

/// 客户端配置
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 服务端点，无scheme时默认https
    pub endpoint: String,
    /// 单次请求超时时间（毫秒）
    pub timeout_ms: u64,
    /// API密钥
    pub api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: 60_000,
            api_key: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从环境变量读取配置 / Read configuration from the environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_MS).filter(|v| !v.trim().is_empty()) {
            config.timeout_ms = timeout.trim().parse().map_err(|_| {
                ContextError::config(format!("{} must be an integer, got {:?}", ENV_TIMEOUT_MS, timeout))
            })?;
        }
        config.api_key = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty());

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// 带scheme的基础URL / Base URL including the scheme
    pub fn base_url(&self) -> String {
        let endpoint = self.endpoint.trim_end_matches('/');
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("https://{}", endpoint)
        }
    }
}

/// 上下文同步轮询配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSyncConfig {
    /// 最大轮询次数
    pub max_retries: u32,
    /// 轮询间隔（毫秒）
    pub retry_interval_ms: u64,
}

impl Default for ContextSyncConfig {
    fn default() -> Self {
        Self {
            max_retries: 150,
            retry_interval_ms: 1500,
        }
    }
}

impl ContextSyncConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_interval(mut self, interval_ms: u64) -> Self {
        self.retry_interval_ms = interval_ms;
        self
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_millis(self.retry_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_sync_config_defaults() {
        let config = ContextSyncConfig::default();
        assert_eq!(config.max_retries, 150);
        assert_eq!(config.retry_interval(), Duration::from_millis(1500));

        let config = ContextSyncConfig::new()
            .with_max_retries(5)
            .with_retry_interval(10);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.retry_interval_ms, 10);
    }

    #[test]
    fn test_client_config_from_lookup() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_API_KEY, "akm-123"),
            (ENV_ENDPOINT, "http://127.0.0.1:8080/"),
            (ENV_TIMEOUT_MS, "2500"),
        ]);
        let config = ClientConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.api_key.as_deref(), Some("akm-123"));
        assert_eq!(config.timeout_ms, 2500);
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_client_config_defaults_and_bad_timeout() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url(), format!("https://{}", DEFAULT_ENDPOINT));
        assert_eq!(config.timeout_ms, 60_000);
        assert!(config.api_key.is_none());

        let err = ClientConfig::from_lookup(|k| (k == ENV_TIMEOUT_MS).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, ContextError::Config(_)));
    }
}
