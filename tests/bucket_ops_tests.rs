//! 存储桶操作的集成测试
//!
//! 使用内存态的 mock 后端验证列举、过滤与上传的行为，
//! 包括"过滤表达式非法时不发起任何后端调用"这一约束。

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use s3tool::oss::{
    list_keys, ListOutcome, ListPage, ObjectMeta, ObjectStore, ObjectStoreError, PutOptions,
};

// ============================================================================
// Mock 后端
// ============================================================================

/// 内存态对象存储
///
/// BTreeMap 保证键按字典序返回，与 S3 的列举顺序一致。
struct MockObjectStore {
    objects: Mutex<BTreeMap<String, Bytes>>,
    list_calls: AtomicUsize,
    put_calls: AtomicUsize,
    fail_puts: bool,
    truncate: bool,
}

impl MockObjectStore {
    fn new() -> Self {
        Self {
            objects: Mutex::new(BTreeMap::new()),
            list_calls: AtomicUsize::new(0),
            put_calls: AtomicUsize::new(0),
            fail_puts: false,
            truncate: false,
        }
    }

    fn with_keys(keys: &[&str]) -> Self {
        let store = Self::new();
        {
            let mut objects = store.objects.lock().unwrap();
            for key in keys {
                objects.insert(key.to_string(), Bytes::from_static(b"data"));
            }
        }
        store
    }

    fn failing_puts() -> Self {
        Self {
            fail_puts: true,
            ..Self::new()
        }
    }

    fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn put_object(
        &self,
        key: &str,
        value: Bytes,
        _options: PutOptions,
    ) -> Result<(), ObjectStoreError> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_puts {
            return Err(ObjectStoreError::Network("connection reset".to_string()));
        }

        self.objects.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn list_objects(&self, prefix: Option<&str>) -> Result<ListPage, ObjectStoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        let objects = self
            .objects
            .lock()
            .unwrap()
            .iter()
            .filter(|(key, _)| prefix.map_or(true, |p| key.starts_with(p)))
            .map(|(key, value)| ObjectMeta {
                key: key.clone(),
                size: value.len() as u64,
                last_modified: chrono::Utc::now(),
                etag: None,
                content_type: None,
            })
            .collect();

        Ok(ListPage {
            objects,
            truncated: self.truncate,
        })
    }
}

fn keys_of(outcome: &ListOutcome) -> Vec<&str> {
    match outcome {
        ListOutcome::Objects { objects, .. } => objects.iter().map(|o| o.key.as_str()).collect(),
        ListOutcome::NoObjects => panic!("expected objects, got NoObjects"),
    }
}

// ============================================================================
// 列举
// ============================================================================

#[tokio::test]
async fn test_list_without_filter_returns_all_keys_in_backend_order() {
    let store = MockObjectStore::with_keys(&[
        "TIE-rp/2024/a.csv",
        "TIE-rp/2024/b.csv",
        "TIE-rp/readme.txt",
    ]);

    let outcome = list_keys(&store, None, None).await.unwrap();
    assert_eq!(
        keys_of(&outcome),
        vec!["TIE-rp/2024/a.csv", "TIE-rp/2024/b.csv", "TIE-rp/readme.txt"]
    );
    assert_eq!(store.list_calls(), 1);
}

#[tokio::test]
async fn test_list_with_filter_keeps_matching_subset() {
    let store = MockObjectStore::with_keys(&[
        "logs/2023/app.log",
        "logs/2024/app.log",
        "logs/2024/error.log",
        "readme.md",
    ]);

    // 非锚定匹配：表达式命中键的任意位置即可
    let outcome = list_keys(&store, None, Some("2024")).await.unwrap();
    assert_eq!(
        keys_of(&outcome),
        vec!["logs/2024/app.log", "logs/2024/error.log"]
    );
}

#[tokio::test]
async fn test_list_with_nonmatching_filter_is_empty_but_not_no_objects() {
    let store = MockObjectStore::with_keys(&["a.txt", "b.txt"]);

    // 过滤后为空与桶本身为空是两种不同的结果
    let outcome = list_keys(&store, None, Some("no-such-key")).await.unwrap();
    match outcome {
        ListOutcome::Objects { objects, .. } => assert!(objects.is_empty()),
        ListOutcome::NoObjects => panic!("filtered-empty must not be reported as NoObjects"),
    }
}

#[tokio::test]
async fn test_empty_bucket_reports_no_objects() {
    let store = MockObjectStore::new();

    let outcome = list_keys(&store, None, None).await.unwrap();
    assert!(matches!(outcome, ListOutcome::NoObjects));
}

#[tokio::test]
async fn test_listing_honors_prefix() {
    let store = MockObjectStore::with_keys(&["TIE-rp/a.csv", "other/b.csv"]);

    let outcome = list_keys(&store, Some("TIE-rp"), None).await.unwrap();
    assert_eq!(keys_of(&outcome), vec!["TIE-rp/a.csv"]);
}

#[tokio::test]
async fn test_invalid_filter_fails_before_any_backend_call() {
    let store = MockObjectStore::with_keys(&["a.txt"]);

    let result = list_keys(&store, None, Some("[unclosed")).await;
    assert!(matches!(
        result,
        Err(ObjectStoreError::InvalidPattern { .. })
    ));
    assert_eq!(store.list_calls(), 0);
}

#[tokio::test]
async fn test_truncated_page_flag_propagates() {
    let store = MockObjectStore {
        truncate: true,
        ..MockObjectStore::with_keys(&["a.txt"])
    };

    let outcome = list_keys(&store, None, None).await.unwrap();
    match outcome {
        ListOutcome::Objects { truncated, .. } => assert!(truncated),
        ListOutcome::NoObjects => panic!("expected objects"),
    }
}

// ============================================================================
// 上传
// ============================================================================

#[tokio::test]
async fn test_upload_then_list_round_trip() {
    let store = MockObjectStore::new();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"id,value\n1,42\n").unwrap();

    store
        .put_file("TIE-rp/report.csv", file.path(), PutOptions::default())
        .await
        .unwrap();

    let outcome = list_keys(&store, None, Some("report")).await.unwrap();
    assert_eq!(keys_of(&outcome), vec!["TIE-rp/report.csv"]);
}

#[tokio::test]
async fn test_upload_missing_local_file_is_io_error() {
    let store = MockObjectStore::new();

    let result = store
        .put_file(
            "TIE-rp/missing.csv",
            std::path::Path::new("/no/such/file.csv"),
            PutOptions::default(),
        )
        .await;

    assert!(matches!(result, Err(ObjectStoreError::Io(_))));
    // 本地文件读取失败时不应触达后端
    assert_eq!(store.put_calls(), 0);
}

#[tokio::test]
async fn test_failed_upload_does_not_affect_subsequent_list() {
    let store = MockObjectStore::failing_puts();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"data").unwrap();

    let result = store
        .put_file("TIE-rp/data.bin", file.path(), PutOptions::default())
        .await;
    assert!(matches!(result, Err(ObjectStoreError::Network(_))));
    assert!(result.unwrap_err().is_backend());

    // 上传失败后，后续的列举操作仍然可用
    let outcome = list_keys(&store, None, None).await.unwrap();
    assert!(matches!(outcome, ListOutcome::NoObjects));
}
