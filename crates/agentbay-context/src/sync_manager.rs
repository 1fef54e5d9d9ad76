/*!
* 文件名: sync_manager
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: tokio
* 描述: 同步（阻塞式）上下文管理器 / Blocking context manager facade
*/

use crate::{
    auth::AuthProvider,
    config::{ClientConfig, ContextSyncConfig},
    error::{ContextError, Result},
    transport::ContextApi,
    types::{ContextInfoResult, SyncOutcome, SyncRequest},
    ContextManager,
};
use tokio::runtime::Runtime;

/// 阻塞式上下文管理器
///
/// 内部持有多线程运行时，回调模式的后台轮询在 `block_on` 返回后继续运行。
pub struct SyncContextManager {
    runtime: Runtime,
    async_manager: ContextManager,
}

impl SyncContextManager {
    /// 创建新的阻塞式管理器实例
    pub fn new(
        api: impl ContextApi + 'static,
        auth: impl AuthProvider + 'static,
        config: ContextSyncConfig,
    ) -> Result<Self> {
        let runtime = Self::build_runtime()?;
        let async_manager = ContextManager::new(api, auth, config);

        Ok(Self {
            runtime,
            async_manager,
        })
    }

    /// 使用HTTP传输连接到指定会话
    pub fn connect(client_config: &ClientConfig, session_id: impl Into<String>) -> Result<Self> {
        let runtime = Self::build_runtime()?;
        let async_manager = ContextManager::connect(client_config, session_id)?;

        Ok(Self {
            runtime,
            async_manager,
        })
    }

    fn build_runtime() -> Result<Runtime> {
        Runtime::new()
            .map_err(|e| ContextError::runtime(format!("Failed to create runtime: {}", e)))
    }

    pub fn inner(&self) -> &ContextManager {
        &self.async_manager
    }

    pub fn info(&self) -> Result<ContextInfoResult> {
        self.runtime.block_on(self.async_manager.info())
    }

    pub fn info_with_params(
        &self,
        context_id: Option<&str>,
        path: Option<&str>,
        task_type: Option<&str>,
    ) -> Result<ContextInfoResult> {
        self.runtime.block_on(
            self.async_manager
                .info_with_params(context_id, path, task_type),
        )
    }

    /// 触发同步并阻塞等待结果
    pub fn sync(&self, request: SyncRequest) -> Result<SyncOutcome> {
        self.runtime.block_on(self.async_manager.sync(request))
    }

    /// 触发同步，结果通过回调交付
    pub fn sync_with_callback<F>(&self, request: SyncRequest, callback: F) -> Result<SyncOutcome>
    where
        F: FnOnce(bool) + Send + 'static,
    {
        self.runtime
            .block_on(self.async_manager.sync_with_callback(request, callback))
    }

    pub fn shutdown(&self) {
        self.async_manager.shutdown();
    }
}
