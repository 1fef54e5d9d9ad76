/*!
* 文件名: lib
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: serde, serde_json, uuid, thiserror
* 描述: AgentBay协议类型 / AgentBay protocol types
*/

pub mod error;
pub mod models;
pub mod status;

pub use error::ProtocolError;
pub use models::*;
pub use status::*;

use serde::{Deserialize, Serialize};

/// 默认服务端点 / Default service endpoint
pub const DEFAULT_ENDPOINT: &str = "wuyingai.cn-shanghai.aliyuncs.com";

/// 触发同步的接口名 / Action name of the trigger-sync call
pub const ACTION_SYNC_CONTEXT: &str = "SyncContext";
/// 查询同步状态的接口名 / Action name of the status call
pub const ACTION_GET_CONTEXT_INFO: &str = "GetContextInfo";

/// 客户端生成的请求关联ID / Client-side correlation id
///
/// 格式与服务端RequestId无关，仅用于日志关联。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReqId(pub String);

impl ReqId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ReqId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReqId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
