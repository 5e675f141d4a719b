use async_trait::async_trait;
use bytes::Bytes;
use std::path::Path;

use crate::oss::{ListPage, ObjectStoreError, PutOptions};

/// 对象存储统一接口
///
/// 所有操作均为阻塞式顺序调用：发起一次请求，等待完成后返回。
/// 实例构造完成后内部状态只读，可在单个进程内复用执行任意次操作。
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// 上传对象（带选项）
    ///
    /// 覆盖目标键上已存在的对象，不做存在性检查。
    async fn put_object(
        &self,
        key: &str,
        value: Bytes,
        options: PutOptions,
    ) -> Result<(), ObjectStoreError>;

    /// 列举指定前缀下的对象，只取后端返回的第一页
    ///
    /// `prefix` 为 None 时使用实例配置的默认前缀（若有）。
    /// 分页由 [`ListPage::truncated`] 暴露给调用方，这里不做续页拉取。
    async fn list_objects(&self, prefix: Option<&str>) -> Result<ListPage, ObjectStoreError>;

    /// 上传本地文件
    ///
    /// 一次性读取文件内容后调用 [`put_object`](ObjectStore::put_object)。
    /// 实现可以覆盖为流式上传。
    async fn put_file(
        &self,
        key: &str,
        local_path: &Path,
        options: PutOptions,
    ) -> Result<(), ObjectStoreError> {
        let data = tokio::fs::read(local_path).await?;
        self.put_object(key, Bytes::from(data), options).await
    }
}
