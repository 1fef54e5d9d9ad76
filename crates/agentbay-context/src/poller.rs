/*!
* 文件名: poller
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: tokio, tokio-util
* 描述: 同步状态轮询循环 / Sync status polling loop
*/

use crate::config::ContextSyncConfig;
use crate::manager::ContextManager;
use crate::status::{classify, PollVerdict};
use crate::types::SyncFailure;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// 一次同步对应的轮询任务
///
/// 阻塞模式与回调模式共用同一循环，只是结果的交付方式不同。
pub(crate) struct SyncPoller {
    manager: ContextManager,
    context_id: Option<String>,
    path: Option<String>,
    config: ContextSyncConfig,
    cancel: CancellationToken,
}

impl SyncPoller {
    pub(crate) fn new(
        manager: ContextManager,
        context_id: Option<String>,
        path: Option<String>,
        config: ContextSyncConfig,
    ) -> Self {
        let cancel = manager.cancellation_token();
        Self {
            manager,
            context_id,
            path,
            config,
            cancel,
        }
    }

    /// 轮询直到所有相关任务结束、次数耗尽或被取消
    pub(crate) async fn run(&self) -> Result<(), SyncFailure> {
        let max_retries = self.config.max_retries;
        let interval = self.config.retry_interval();

        for attempt in 1..=max_retries {
            let fetched = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return Err(self.cancelled(attempt)),
                fetched = self.manager.fetch_tasks(
                    self.context_id.as_deref(),
                    self.path.as_deref(),
                    None,
                ) => fetched,
            };

            match fetched {
                Ok(tasks) => match classify(&tasks) {
                    PollVerdict::NoRelevantTasks => {
                        info!("No upload/download tasks to wait for");
                        return Ok(());
                    }
                    PollVerdict::AllSucceeded => {
                        info!("All sync tasks completed after {} poll(s)", attempt);
                        return Ok(());
                    }
                    PollVerdict::Failed(failed) => {
                        for task in &failed {
                            warn!(
                                "Sync task failed: context_id={} path={} type={} error={}",
                                task.context_id, task.path, task.task_type, task.error_message
                            );
                        }
                        return Err(SyncFailure::TaskFailed { tasks: failed });
                    }
                    PollVerdict::Pending { remaining } => {
                        debug!(
                            "{} sync task(s) still running (attempt {}/{})",
                            remaining, attempt, max_retries
                        );
                    }
                },
                Err(e) => {
                    warn!(
                        "Failed to fetch sync status (attempt {}/{}): {}",
                        attempt, max_retries, e
                    );
                }
            }

            if attempt < max_retries {
                tokio::select! {
                    biased;
                    _ = self.cancel.cancelled() => return Err(self.cancelled(attempt)),
                    _ = tokio::time::sleep(interval) => {}
                }
            }
        }

        warn!("Sync did not finish after {} status poll(s)", max_retries);
        Err(SyncFailure::TimedOut {
            attempts: max_retries,
        })
    }

    fn cancelled(&self, attempt: u32) -> SyncFailure {
        info!("Sync polling cancelled at attempt {}", attempt);
        SyncFailure::Cancelled
    }
}
