/*!
* 文件名: types
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: agentbay
* 描述: 同步请求与结果类型 / Sync request and result types
*/

use crate::config::ContextSyncConfig;
use crate::error::{ContextError, Result};
use agentbay::SyncTaskStatus;

/// 同步请求参数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncRequest {
    pub context_id: Option<String>,
    pub path: Option<String>,
    pub mode: Option<String>,
    /// 覆盖默认的最大轮询次数
    pub max_retries: Option<u32>,
    /// 覆盖默认的轮询间隔（毫秒）
    pub retry_interval_ms: Option<u64>,
}

impl SyncRequest {
    /// 同步会话挂载的所有上下文
    pub fn new() -> Self {
        Self::default()
    }

    /// 同步指定上下文及其挂载路径
    pub fn for_context(context_id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            context_id: Some(context_id.into()),
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    pub fn with_retry_interval(mut self, interval_ms: u64) -> Self {
        self.retry_interval_ms = Some(interval_ms);
        self
    }

    /// context_id 与 path 必须成对出现
    pub fn validate(&self) -> Result<()> {
        match (&self.context_id, &self.path) {
            (Some(_), None) => Err(ContextError::validation(
                "context_id and path must be provided together: path is missing",
            )),
            (None, Some(_)) => Err(ContextError::validation(
                "context_id and path must be provided together: context_id is missing",
            )),
            _ => Ok(()),
        }
    }

    /// 合并请求级覆盖项与默认配置
    pub(crate) fn polling_config(&self, defaults: &ContextSyncConfig) -> ContextSyncConfig {
        ContextSyncConfig {
            max_retries: self.max_retries.unwrap_or(defaults.max_retries),
            retry_interval_ms: self.retry_interval_ms.unwrap_or(defaults.retry_interval_ms),
        }
    }
}

/// 同步失败原因 / Why a sync did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncFailure {
    /// 服务端以错误码拒绝了触发请求
    Rejected { code: String, message: String },
    /// 触发请求未被接受，且没有错误码
    NotAccepted,
    /// 至少一个上传/下载任务失败
    TaskFailed { tasks: Vec<SyncTaskStatus> },
    /// 轮询次数耗尽时仍有任务未结束
    TimedOut { attempts: u32 },
    /// 管理器已关闭，轮询被取消
    Cancelled,
}

impl std::fmt::Display for SyncFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected { code, message } => write!(f, "rejected [{}]: {}", code, message),
            Self::NotAccepted => write!(f, "sync request not accepted"),
            Self::TaskFailed { tasks } => write!(f, "{} sync task(s) failed", tasks.len()),
            Self::TimedOut { attempts } => {
                write!(f, "sync not finished after {} status polls", attempts)
            }
            Self::Cancelled => write!(f, "sync polling cancelled"),
        }
    }
}

/// 同步汇总结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// 触发请求的RequestId
    pub request_id: String,
    pub success: bool,
    /// 触发请求被服务端拒绝时的错误消息
    pub error_message: Option<String>,
    pub failure: Option<SyncFailure>,
}

impl SyncOutcome {
    pub(crate) fn accepted(request_id: String) -> Self {
        Self {
            request_id,
            success: true,
            error_message: None,
            failure: None,
        }
    }

    pub(crate) fn failed(request_id: String, failure: SyncFailure) -> Self {
        let error_message = match &failure {
            SyncFailure::Rejected { message, .. } => Some(message.clone()),
            _ => None,
        };
        Self {
            request_id,
            success: false,
            error_message,
            failure: Some(failure),
        }
    }

    pub(crate) fn from_poll(request_id: String, poll: std::result::Result<(), SyncFailure>) -> Self {
        match poll {
            Ok(()) => Self::accepted(request_id),
            Err(failure) => Self::failed(request_id, failure),
        }
    }
}

/// 同步状态查询结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextInfoResult {
    pub request_id: String,
    pub success: bool,
    pub context_status_data: Vec<SyncTaskStatus>,
    pub error_message: Option<String>,
}
