/*!
* 文件名: lib
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: None
* 描述: AgentBay上下文管理库 / AgentBay context manager library
*/

pub mod auth;
pub mod config;
pub mod error;
pub mod manager;
mod poller;
pub mod status;
pub mod sync_manager;
pub mod transport;
pub mod types;


// 重新导出主要类型
pub use auth::{AuthProvider, SessionContext};
pub use config::{ClientConfig, ContextSyncConfig};
pub use error::{ContextError, Result};
pub use manager::ContextManager;
pub use sync_manager::SyncContextManager;
pub use transport::{ContextApi, HttpContextApi};
pub use types::{ContextInfoResult, SyncFailure, SyncOutcome, SyncRequest};
