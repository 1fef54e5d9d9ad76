/*!
* 文件名: models
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: serde
* 描述: 上下文同步请求/响应模型 / Context sync request and response models
*/

use serde::{Deserialize, Serialize};

/// 触发上下文同步请求 / Trigger context sync request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SyncContextRequest {
    /// Bearer 认证头，由传输层放入 HTTP 头部 / Bearer auth, sent as an HTTP header
    #[serde(skip_serializing, default)]
    pub authorization: String,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// 同步模式，原样透传给服务端 / Sync mode, passed through unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// 触发上下文同步响应 / Trigger context sync response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SyncContextResponse {
    pub request_id: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SyncContextResponse {
    /// 服务端是否返回了API级错误 / Whether the server reported an API-level error
    pub fn api_error(&self) -> Option<ApiError> {
        ApiError::from_parts(self.code.as_deref(), self.message.as_deref())
    }
}

/// 查询同步状态请求 / Get sync status request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetContextInfoRequest {
    #[serde(skip_serializing, default)]
    pub authorization: String,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
}

/// 查询同步状态响应 / Get sync status response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetContextInfoResponse {
    pub request_id: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<GetContextInfoData>,
}

impl GetContextInfoResponse {
    pub fn api_error(&self) -> Option<ApiError> {
        ApiError::from_parts(self.code.as_deref(), self.message.as_deref())
    }

    /// 原始的双重编码状态字符串 / Raw doubly-encoded status string
    pub fn context_status(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.context_status.as_deref())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetContextInfoData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_status: Option<String>,
}

/// 服务端显式返回的错误码与消息 / Explicit error code and message from the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    /// 仅当错误码非空时视为API错误 / Only a non-empty code counts as an API error
    pub fn from_parts(code: Option<&str>, message: Option<&str>) -> Option<Self> {
        let code = code.filter(|c| !c.is_empty())?;
        Some(Self {
            code: code.to_string(),
            message: message.unwrap_or_default().to_string(),
        })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "[{}]", self.code)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}
