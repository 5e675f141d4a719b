use chrono::{DateTime, Utc};
use smart_default::SmartDefault;
use std::collections::HashMap;

/// 对象元数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMeta {
    pub key: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    pub etag: Option<String>,
    pub content_type: Option<String>,
}

/// 上传选项
#[derive(Debug, Clone, SmartDefault)]
pub struct PutOptions {
    pub content_type: Option<String>,
    pub metadata: Option<HashMap<String, String>>,
}

/// 单页列举结果
///
/// 列举操作只发起一次后端请求，结果即后端返回的第一页。
/// 当桶内对象数超过单页上限时，`truncated` 为 true，
/// 超出部分不会被返回。
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    /// 按后端返回顺序排列的对象（S3 为键的字典序）
    pub objects: Vec<ObjectMeta>,
    /// 后端响应是否被截断
    pub truncated: bool,
}
