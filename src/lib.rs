//! s3tool - 极简的 S3 存储桶命令行工具库
//!
//! 针对单个存储桶提供两类操作：
//!
//! - **列举**：枚举指定前缀下的对象键，可选按正则表达式过滤（非锚定匹配）
//! - **上传**：把一个本地文件上传到指定的目标键
//!
//! 所有操作都是对 AWS S3 SDK 的薄封装：一次调用对应一次后端请求，
//! 不做重试、分页、并发或多分片处理。列举只消费后端返回的第一页，
//! 截断情况通过 [`ListPage::truncated`] 暴露。
//!
//! ## 模块
//!
//! - **oss**: 对象存储模块（基于 AWS S3 SDK）

pub mod oss;

// 重新导出主要的公共 API
pub use oss::{list_keys, ListOutcome};
pub use oss::{AwsS3ObjectStore, AwsS3ObjectStoreConfig};
pub use oss::{KeyFilter, ListPage, ObjectMeta, ObjectStore, ObjectStoreError, PutOptions};
