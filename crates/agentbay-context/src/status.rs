/*!
* 文件名: status
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: agentbay
* 描述: 状态负载解码与任务分类 / Status payload decoding and task classification
*/

use agentbay::{decode_envelope, ContextStatusItem, SyncTaskStatus};
use tracing::{debug, warn};

/// 解码双重编码的状态字符串
///
/// 任一层解码失败只记录日志，不中断：外层失败返回空列表，
/// 单个信封项失败则跳过该项，继续处理其余项。
pub fn decode_context_status(raw: &str) -> Vec<SyncTaskStatus> {
    let items = match decode_envelope(raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("Failed to decode context status envelope: {}", e);
            return Vec::new();
        }
    };

    let mut tasks = Vec::new();
    for (index, value) in items.into_iter().enumerate() {
        let item = match ContextStatusItem::from_value(value) {
            Ok(item) => item,
            Err(e) => {
                warn!("Skipping envelope item {}: {}", index, e);
                continue;
            }
        };

        if !item.is_data() {
            debug!("Skipping envelope item {} of type {:?}", index, item.item_type);
            continue;
        }

        match item.tasks() {
            Ok(mut decoded) => tasks.append(&mut decoded),
            Err(e) => warn!("Skipping envelope item {}: {}", index, e),
        }
    }
    tasks
}

/// 单次轮询的判定结果 / Verdict of a single poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollVerdict {
    /// 没有上传/下载任务
    NoRelevantTasks,
    /// 所有相关任务均成功
    AllSucceeded,
    /// 所有相关任务已结束，其中部分失败
    Failed(Vec<SyncTaskStatus>),
    /// 仍有相关任务未结束
    Pending { remaining: usize },
}

/// 对任务列表做分类 / Classify a task list
pub fn classify(tasks: &[SyncTaskStatus]) -> PollVerdict {
    let relevant: Vec<&SyncTaskStatus> = tasks.iter().filter(|t| t.is_relevant()).collect();
    if relevant.is_empty() {
        return PollVerdict::NoRelevantTasks;
    }

    let remaining = relevant.iter().filter(|t| !t.is_terminal()).count();
    if remaining > 0 {
        return PollVerdict::Pending { remaining };
    }

    let failed: Vec<SyncTaskStatus> = relevant
        .into_iter()
        .filter(|t| t.is_failed())
        .cloned()
        .collect();
    if failed.is_empty() {
        PollVerdict::AllSucceeded
    } else {
        PollVerdict::Failed(failed)
    }
}
