//! 存储桶高层操作
//!
//! 在 [`ObjectStore`] 之上组合出带过滤的列举操作，返回类型化的结果，
//! 由调用方决定如何呈现。操作本身不打印任何内容。

use crate::oss::{KeyFilter, ObjectMeta, ObjectStore, ObjectStoreError};

/// 列举操作的类型化结果
///
/// 区分"桶内该前缀下没有任何对象"与"有对象但全部被过滤掉"两种情况：
/// 前者应向用户提示，后者保持静默。
#[derive(Debug, Clone)]
pub enum ListOutcome {
    /// 后端在该前缀下未返回任何对象
    NoObjects,
    /// 过滤后的对象列表（可能为空），以及后端响应是否被截断
    Objects {
        objects: Vec<ObjectMeta>,
        truncated: bool,
    },
}

/// 列举对象键，可选按正则表达式过滤
///
/// 过滤表达式在发起任何后端请求之前编译，
/// 非法表达式以 [`ObjectStoreError::InvalidPattern`] 快速失败。
/// 列举只取后端返回的第一页，顺序与后端响应一致。
pub async fn list_keys(
    store: &dyn ObjectStore,
    prefix: Option<&str>,
    pattern: Option<&str>,
) -> Result<ListOutcome, ObjectStoreError> {
    // 先编译过滤器，后访问网络
    let filter = match pattern {
        Some(p) => Some(KeyFilter::new(p)?),
        None => None,
    };

    let page = store.list_objects(prefix).await?;

    if page.objects.is_empty() {
        return Ok(ListOutcome::NoObjects);
    }

    let objects = match &filter {
        Some(f) => page
            .objects
            .into_iter()
            .filter(|obj| f.is_match(&obj.key))
            .collect(),
        None => page.objects,
    };

    Ok(ListOutcome::Objects {
        objects,
        truncated: page.truncated,
    })
}
