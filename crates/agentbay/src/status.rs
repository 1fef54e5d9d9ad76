/*!
* 文件名: status
* 作者: JQQ
* 创建日期: 2026/10/19
* 最后修改日期: 2026/10/19
* 版权: 2023 JQQ. All rights reserved.
* 依赖: serde, serde_json
* 描述: 同步任务状态与双重编码信封 / Sync task status and the doubly-encoded envelope
*/

use crate::error::ProtocolError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const TASK_TYPE_UPLOAD: &str = "upload";
pub const TASK_TYPE_DOWNLOAD: &str = "download";

pub const STATUS_SUCCESS: &str = "Success";
pub const STATUS_FAILED: &str = "Failed";

/// 携带任务列表的信封项类型 / Envelope item type that carries a task list
pub const ENVELOPE_ITEM_DATA: &str = "data";

/// 服务端状态报告中的单个同步任务 / One sync task in the server's status report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncTaskStatus {
    #[serde(deserialize_with = "lenient_string")]
    pub context_id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub path: String,
    #[serde(deserialize_with = "lenient_string")]
    pub task_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(deserialize_with = "lenient_string")]
    pub error_message: String,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub start_time: i64,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub finish_time: i64,
}

impl SyncTaskStatus {
    /// 上传/下载任务才参与汇总 / Only upload and download tasks take part in aggregation
    pub fn is_relevant(&self) -> bool {
        self.task_type == TASK_TYPE_UPLOAD || self.task_type == TASK_TYPE_DOWNLOAD
    }

    pub fn is_terminal(&self) -> bool {
        self.is_success() || self.is_failed()
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    pub fn is_failed(&self) -> bool {
        self.status == STATUS_FAILED
    }
}

// 服务端对未填写的字段会给出null
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

// 时间戳可能缺失、为null或以字符串形式出现
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

/// 外层信封项 / Outer envelope item
///
/// `data` 字段本身又是一段JSON字符串，只有 `type == "data"` 的项才需要解码。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextStatusItem {
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub item_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub data: String,
}

impl ContextStatusItem {
    pub fn from_value(value: Value) -> Result<Self, ProtocolError> {
        serde_json::from_value(value).map_err(ProtocolError::InvalidItem)
    }

    /// 构造携带任务列表的数据项 / Build a data item carrying the given tasks
    pub fn data_item(tasks: &[SyncTaskStatus]) -> Self {
        Self {
            item_type: ENVELOPE_ITEM_DATA.to_string(),
            data: serde_json::to_string(tasks).unwrap_or_else(|_| "[]".to_string()),
        }
    }

    pub fn is_data(&self) -> bool {
        self.item_type == ENVELOPE_ITEM_DATA
    }

    /// 解码内层任务列表 / Decode the inner task list
    pub fn tasks(&self) -> Result<Vec<SyncTaskStatus>, ProtocolError> {
        serde_json::from_str(&self.data).map_err(ProtocolError::InvalidTaskList)
    }
}

/// 解码外层信封为未定型的项列表 / Decode the outer envelope into untyped items
///
/// 各项单独定型，这样一个坏项不会拖垮整个列表。
pub fn decode_envelope(raw: &str) -> Result<Vec<Value>, ProtocolError> {
    serde_json::from_str(raw).map_err(ProtocolError::InvalidEnvelope)
}

/// 将任务列表编码为信封字符串 / Encode task lists as an envelope string
pub fn encode_envelope(items: &[ContextStatusItem]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}
