/*!
* 文件名: error
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: thiserror
* 描述: 协议解码错误 / Protocol decoding errors
*/

use thiserror::Error;

/// 状态负载解码错误 / Status payload decoding error
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("invalid status envelope: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),

    #[error("invalid envelope item: {0}")]
    InvalidItem(#[source] serde_json::Error),

    #[error("invalid task list in envelope item: {0}")]
    InvalidTaskList(#[source] serde_json::Error),
}
