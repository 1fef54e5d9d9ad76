/*!
* 文件名: error
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: thiserror
* 描述: 上下文管理错误类型定义 / Context manager error type definitions
*/

use agentbay::ApiError;
use thiserror::Error;

/// 上下文管理错误类型
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("参数校验失败: {0}")]
    Validation(String),

    #[error("API错误 [{code}]: {message} (request_id: {request_id})")]
    Api {
        code: String,
        message: String,
        request_id: String,
    },

    #[error("网络错误: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP错误 {status}: {body}")]
    Http { status: u16, body: String },

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("运行时错误: {0}")]
    Runtime(String),
}

impl ContextError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub fn api(err: ApiError, request_id: impl Into<String>) -> Self {
        Self::Api {
            code: err.code,
            message: err.message,
            request_id: request_id.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContextError>;
