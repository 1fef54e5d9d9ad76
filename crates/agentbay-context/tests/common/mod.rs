/*!
* 文件名: mod
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: None
* 描述: 上下文管理测试共享工具模块 / Context manager test common utilities module
*/

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use agentbay::{
    encode_envelope, ContextStatusItem, GetContextInfoData, GetContextInfoRequest,
    GetContextInfoResponse, SyncContextRequest, SyncContextResponse, SyncTaskStatus,
};
use agentbay_context::{
    ContextApi, ContextError, ContextManager, ContextSyncConfig, Result, SessionContext,
};
use async_trait::async_trait;

pub const SESSION_ID: &str = "session-test";
pub const API_KEY: &str = "akm-test";

/// 触发请求的预设响应
#[derive(Debug, Clone)]
pub enum SyncReply {
    Accepted,
    NotAccepted,
    Rejected { code: String, message: String },
    TransportError,
}

/// 状态查询的预设响应
#[derive(Debug, Clone)]
pub enum InfoReply {
    Tasks(Vec<SyncTaskStatus>),
    Raw(String),
    ApiError { code: String, message: String },
    TransportError,
}

#[derive(Default)]
struct FakeState {
    sync_reply: Option<SyncReply>,
    info_replies: VecDeque<InfoReply>,
    last_info_reply: Option<InfoReply>,
    sync_requests: Vec<SyncContextRequest>,
    info_requests: Vec<GetContextInfoRequest>,
}

/// 可编排响应的 ContextApi 实现
///
/// 状态响应队列耗尽后重复最后一个响应。
#[derive(Clone, Default)]
pub struct FakeContextApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeContextApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepting() -> Self {
        let fake = Self::new();
        fake.set_sync_reply(SyncReply::Accepted);
        fake
    }

    pub fn set_sync_reply(&self, reply: SyncReply) {
        self.state.lock().unwrap().sync_reply = Some(reply);
    }

    pub fn push_info(&self, reply: InfoReply) {
        self.state.lock().unwrap().info_replies.push_back(reply);
    }

    pub fn push_tasks(&self, tasks: Vec<SyncTaskStatus>) {
        self.push_info(InfoReply::Tasks(tasks));
    }

    pub fn sync_calls(&self) -> usize {
        self.state.lock().unwrap().sync_requests.len()
    }

    pub fn info_calls(&self) -> usize {
        self.state.lock().unwrap().info_requests.len()
    }

    pub fn sync_requests(&self) -> Vec<SyncContextRequest> {
        self.state.lock().unwrap().sync_requests.clone()
    }

    pub fn info_requests(&self) -> Vec<GetContextInfoRequest> {
        self.state.lock().unwrap().info_requests.clone()
    }
}

#[async_trait]
impl ContextApi for FakeContextApi {
    async fn sync_context(&self, request: SyncContextRequest) -> Result<SyncContextResponse> {
        let reply = {
            let mut state = self.state.lock().unwrap();
            state.sync_requests.push(request);
            state.sync_reply.clone().unwrap_or(SyncReply::Accepted)
        };

        let request_id = "req-sync".to_string();
        match reply {
            SyncReply::Accepted => Ok(SyncContextResponse {
                request_id,
                success: true,
                ..Default::default()
            }),
            SyncReply::NotAccepted => Ok(SyncContextResponse {
                request_id,
                success: false,
                ..Default::default()
            }),
            SyncReply::Rejected { code, message } => Ok(SyncContextResponse {
                request_id,
                success: false,
                code: Some(code),
                message: Some(message),
            }),
            SyncReply::TransportError => Err(ContextError::Http {
                status: 503,
                body: "service unavailable".to_string(),
            }),
        }
    }

    async fn get_context_info(
        &self,
        request: GetContextInfoRequest,
    ) -> Result<GetContextInfoResponse> {
        let reply = {
            let mut state = self.state.lock().unwrap();
            state.info_requests.push(request);
            match state.info_replies.pop_front() {
                Some(reply) => {
                    state.last_info_reply = Some(reply.clone());
                    reply
                }
                None => state
                    .last_info_reply
                    .clone()
                    .unwrap_or(InfoReply::Tasks(Vec::new())),
            }
        };

        let request_id = "req-info".to_string();
        match reply {
            InfoReply::Tasks(tasks) => Ok(info_response(
                request_id,
                Some(encode_envelope(&[ContextStatusItem::data_item(&tasks)])),
            )),
            InfoReply::Raw(raw) => Ok(info_response(request_id, Some(raw))),
            InfoReply::ApiError { code, message } => Ok(GetContextInfoResponse {
                request_id,
                success: false,
                code: Some(code),
                message: Some(message),
                data: None,
            }),
            InfoReply::TransportError => Err(ContextError::Http {
                status: 502,
                body: "bad gateway".to_string(),
            }),
        }
    }
}

fn info_response(request_id: String, context_status: Option<String>) -> GetContextInfoResponse {
    GetContextInfoResponse {
        request_id,
        success: true,
        code: None,
        message: None,
        data: Some(GetContextInfoData { context_status }),
    }
}

pub fn task(task_type: &str, status: &str) -> SyncTaskStatus {
    SyncTaskStatus {
        context_id: "ctx-1".to_string(),
        path: "/home/wuying/data".to_string(),
        task_type: task_type.to_string(),
        status: status.to_string(),
        ..Default::default()
    }
}

pub fn failed_task(task_type: &str, error_message: &str) -> SyncTaskStatus {
    SyncTaskStatus {
        error_message: error_message.to_string(),
        ..task(task_type, "Failed")
    }
}

/// 按服务端原样格式构造状态信封：记录以原始JSON给出，不经过类型序列化
pub fn raw_envelope(records: serde_json::Value) -> String {
    serde_json::json!([{"type": "data", "data": records.to_string()}]).to_string()
}

/// 测试用的轮询配置：10次，每次间隔100ms
pub fn create_test_sync_config() -> ContextSyncConfig {
    ContextSyncConfig::new()
        .with_max_retries(10)
        .with_retry_interval(100)
}

pub fn create_manager(api: &FakeContextApi) -> ContextManager {
    ContextManager::new(
        api.clone(),
        SessionContext::new(SESSION_ID, API_KEY),
        create_test_sync_config(),
    )
}
