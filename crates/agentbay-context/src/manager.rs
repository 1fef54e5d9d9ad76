/*!
* 文件名: manager
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: tokio, tokio-util, tracing
* 描述: 上下文管理器：触发同步、轮询状态、汇总结果 / Context manager: trigger sync, poll status, aggregate
*/

use crate::{
    auth::{AuthProvider, SessionContext},
    config::{ClientConfig, ContextSyncConfig},
    error::{ContextError, Result},
    poller::SyncPoller,
    status::decode_context_status,
    transport::{ContextApi, HttpContextApi},
    types::{ContextInfoResult, SyncFailure, SyncOutcome, SyncRequest},
};
use agentbay::{GetContextInfoRequest, ReqId, SyncContextRequest, SyncTaskStatus};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, field, info, info_span, warn, Instrument};

/// 异步上下文管理器
///
/// 持有的资源均为只读，克隆开销很小，可在并发的同步调用之间共享。
#[derive(Clone)]
pub struct ContextManager {
    api: Arc<dyn ContextApi>,
    auth: Arc<dyn AuthProvider>,
    config: ContextSyncConfig,
    shutdown: CancellationToken,
}

impl std::fmt::Debug for ContextManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextManager")
            .field("session_id", &self.session_id())
            .field("config", &self.config)
            .field("shut_down", &self.shutdown.is_cancelled())
            .finish()
    }
}

impl ContextManager {
    /// 创建新的管理器实例
    pub fn new(
        api: impl ContextApi + 'static,
        auth: impl AuthProvider + 'static,
        config: ContextSyncConfig,
    ) -> Self {
        Self {
            api: Arc::new(api),
            auth: Arc::new(auth),
            config,
            shutdown: CancellationToken::new(),
        }
    }

    /// 使用HTTP传输连接到指定会话
    pub fn connect(client_config: &ClientConfig, session_id: impl Into<String>) -> Result<Self> {
        let api = HttpContextApi::new(client_config)?;
        let session = SessionContext::from_config(session_id, client_config)?;
        Ok(Self::new(api, session, ContextSyncConfig::default()))
    }

    pub fn with_sync_config(mut self, config: ContextSyncConfig) -> Self {
        self.config = config;
        self
    }

    pub fn session_id(&self) -> &str {
        &self.auth.session().session_id
    }

    pub fn sync_config(&self) -> &ContextSyncConfig {
        &self.config
    }

    /// 取消所有进行中的轮询，之后发起的轮询也会立即结束
    pub fn shutdown(&self) {
        info!("Shutting down context manager for session {}", self.session_id());
        self.shutdown.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    pub(crate) fn cancellation_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// 查询当前会话的全部同步状态
    pub async fn info(&self) -> Result<ContextInfoResult> {
        self.info_with_params(None, None, None).await
    }

    /// 按条件查询当前会话的同步状态
    ///
    /// 服务端返回API错误时，结果的 `success` 为 false 并携带错误消息，
    /// 不会尝试解码状态列表。传输层错误直接返回 `Err`。
    pub async fn info_with_params(
        &self,
        context_id: Option<&str>,
        path: Option<&str>,
        task_type: Option<&str>,
    ) -> Result<ContextInfoResult> {
        match self.fetch_status(context_id, path, task_type).await {
            Ok((request_id, tasks)) => Ok(ContextInfoResult {
                request_id,
                success: true,
                context_status_data: tasks,
                error_message: None,
            }),
            Err(ContextError::Api {
                code,
                message,
                request_id,
            }) => {
                warn!("GetContextInfo rejected [{}]: {}", code, message);
                Ok(ContextInfoResult {
                    request_id,
                    success: false,
                    context_status_data: Vec::new(),
                    error_message: Some(message),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// 供轮询循环使用：API错误同样以 `Err` 返回
    pub(crate) async fn fetch_tasks(
        &self,
        context_id: Option<&str>,
        path: Option<&str>,
        task_type: Option<&str>,
    ) -> Result<Vec<SyncTaskStatus>> {
        self.fetch_status(context_id, path, task_type)
            .await
            .map(|(_, tasks)| tasks)
    }

    async fn fetch_status(
        &self,
        context_id: Option<&str>,
        path: Option<&str>,
        task_type: Option<&str>,
    ) -> Result<(String, Vec<SyncTaskStatus>)> {
        let request = GetContextInfoRequest {
            authorization: self.auth.authorization(),
            session_id: self.session_id().to_string(),
            context_id: context_id.map(str::to_string),
            path: path.map(str::to_string),
            task_type: task_type.map(str::to_string),
        };

        let response = self.api.get_context_info(request).await?;
        if let Some(err) = response.api_error() {
            return Err(ContextError::api(err, response.request_id));
        }

        let tasks = response
            .context_status()
            .map(decode_context_status)
            .unwrap_or_default();
        debug!(
            "GetContextInfo returned {} task(s) (request_id: {})",
            tasks.len(),
            response.request_id
        );
        Ok((response.request_id, tasks))
    }

    /// 触发同步并等待所有任务结束
    pub async fn sync(&self, request: SyncRequest) -> Result<SyncOutcome> {
        request.validate()?;
        let span = self.sync_span(&request);
        self.sync_blocking(&request).instrument(span).await
    }

    async fn sync_blocking(&self, request: &SyncRequest) -> Result<SyncOutcome> {
        let request_id = match self.trigger(request).await? {
            Ok(request_id) => request_id,
            Err(outcome) => return Ok(outcome),
        };

        let poller = self.poller(request);
        Ok(SyncOutcome::from_poll(request_id, poller.run().await))
    }

    /// 触发同步后立即返回，轮询在后台进行
    ///
    /// 只要本方法返回 `Ok`，`callback` 就会被恰好调用一次；
    /// 返回 `Err` 时回调不会被调用。
    pub async fn sync_with_callback<F>(&self, request: SyncRequest, callback: F) -> Result<SyncOutcome>
    where
        F: FnOnce(bool) + Send + 'static,
    {
        request.validate()?;
        let span = self.sync_span(&request);

        let request_id = match self.trigger(&request).instrument(span.clone()).await? {
            Ok(request_id) => request_id,
            Err(outcome) => {
                callback(false);
                return Ok(outcome);
            }
        };

        let poller = self.poller(&request);
        tokio::spawn(
            async move {
                let result = poller.run().await;
                if let Err(failure) = &result {
                    info!("Background sync finished unsuccessfully: {}", failure);
                }
                callback(result.is_ok());
            }
            .instrument(span),
        );

        Ok(SyncOutcome::accepted(request_id))
    }

    /// 发送触发请求
    ///
    /// 外层 `Result` 为传输层错误；内层 `Err` 为无需轮询的失败结果。
    async fn trigger(&self, request: &SyncRequest) -> Result<std::result::Result<String, SyncOutcome>> {
        let rpc_request = SyncContextRequest {
            authorization: self.auth.authorization(),
            session_id: self.session_id().to_string(),
            context_id: request.context_id.clone(),
            path: request.path.clone(),
            mode: request.mode.clone(),
        };

        let response = self.api.sync_context(rpc_request).await.map_err(|e| {
            error!("SyncContext call failed: {}", e);
            e
        })?;
        tracing::Span::current().record("request_id", response.request_id.as_str());

        if let Some(err) = response.api_error() {
            warn!("SyncContext rejected {}", err);
            return Ok(Err(SyncOutcome::failed(
                response.request_id,
                SyncFailure::Rejected {
                    code: err.code,
                    message: err.message,
                },
            )));
        }

        if !response.success {
            warn!("SyncContext not accepted");
            return Ok(Err(SyncOutcome::failed(
                response.request_id,
                SyncFailure::NotAccepted,
            )));
        }

        info!("SyncContext accepted");
        Ok(Ok(response.request_id))
    }

    fn poller(&self, request: &SyncRequest) -> SyncPoller {
        SyncPoller::new(
            self.clone(),
            request.context_id.clone(),
            request.path.clone(),
            request.polling_config(&self.config),
        )
    }

    /// 每次同步一个span：`req_id` 由客户端生成，`request_id` 在触发成功后由服务端回填
    fn sync_span(&self, request: &SyncRequest) -> tracing::Span {
        info_span!(
            "context_sync",
            req_id = %ReqId::new(),
            session_id = %self.session_id(),
            context_id = ?request.context_id,
            path = ?request.path,
            request_id = field::Empty,
        )
    }
}
