/*!
* 文件名: transport
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: reqwest, async-trait
* 描述: 上下文远程调用接口与HTTP实现 / Context RPC capability and its HTTP implementation
*/

use crate::config::ClientConfig;
use crate::error::{ContextError, Result};
use agentbay::{
    GetContextInfoRequest, GetContextInfoResponse, SyncContextRequest, SyncContextResponse,
    ACTION_GET_CONTEXT_INFO, ACTION_SYNC_CONTEXT,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

/// 上下文同步所需的远程能力 / Remote capability the context manager depends on
#[async_trait]
pub trait ContextApi: Send + Sync {
    /// 触发同步任务
    async fn sync_context(&self, request: SyncContextRequest) -> Result<SyncContextResponse>;

    /// 查询同步任务状态
    async fn get_context_info(
        &self,
        request: GetContextInfoRequest,
    ) -> Result<GetContextInfoResponse>;
}

/// 基于HTTP的实现 / HTTP implementation
#[derive(Clone)]
pub struct HttpContextApi {
    http_client: Client,
    base_url: String,
}

impl std::fmt::Debug for HttpContextApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpContextApi")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl HttpContextApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http_client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn call<Req, Resp>(&self, action: &str, authorization: &str, body: &Req) -> Result<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = format!("{}/", self.base_url);
        debug!("Calling action {} at {}", action, url);

        let response = self
            .http_client
            .post(&url)
            .query(&[("Action", action)])
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ContextError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        debug!("Action {} responded with {} bytes", action, text.len());
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl ContextApi for HttpContextApi {
    async fn sync_context(&self, request: SyncContextRequest) -> Result<SyncContextResponse> {
        self.call(ACTION_SYNC_CONTEXT, &request.authorization, &request)
            .await
    }

    async fn get_context_info(
        &self,
        request: GetContextInfoRequest,
    ) -> Result<GetContextInfoResponse> {
        self.call(ACTION_GET_CONTEXT_INFO, &request.authorization, &request)
            .await
    }
}
