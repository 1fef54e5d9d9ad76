/*!
* 文件名: auth
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: None
* 描述: 会话与认证上下文 / Session and authentication context
*/

use crate::config::ClientConfig;
use crate::error::{ContextError, Result};

/// 会话认证信息
#[derive(Clone)]
pub struct SessionContext {
    pub session_id: String,
    api_key: String,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("session_id", &self.session_id)
            .field("api_key", &"***")
            .finish()
    }
}

/// 认证提供者trait
pub trait AuthProvider: Send + Sync {
    /// 获取会话上下文
    fn session(&self) -> &SessionContext;

    /// 获取API密钥
    fn api_key(&self) -> &str;

    /// 获取Bearer认证头
    fn authorization(&self) -> String {
        format!("Bearer {}", self.api_key())
    }
}

impl SessionContext {
    pub fn new(session_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            api_key: api_key.into(),
        }
    }

    /// 使用客户端配置中的API密钥 / Use the API key from the client configuration
    pub fn from_config(session_id: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ContextError::config("API key is not configured"))?;
        Ok(Self::new(session_id, api_key))
    }
}

impl AuthProvider for SessionContext {
    fn session(&self) -> &SessionContext {
        self
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}
