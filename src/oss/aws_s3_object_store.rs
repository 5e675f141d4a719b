use aws_config::Region;
use aws_credential_types::Credentials;
use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_s3::{primitives::ByteStream, Client};
use async_trait::async_trait;
use bytes::Bytes;
use garde::Validate;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::path::Path;
use std::sync::Arc;

use crate::oss::{ListPage, ObjectMeta, ObjectStore, ObjectStoreError, PutOptions};

/// S3 ObjectStore 配置
///
/// 凭证获取顺序（优先级从高到低）：
/// 1. `access_key_id` + `secret_access_key` - 直接配置的访问密钥
/// 2. 默认凭证链（自动检测）：
///    - 环境变量 `AWS_ACCESS_KEY_ID` 和 `AWS_SECRET_ACCESS_KEY`
///    - 共享凭证文件 `~/.aws/credentials`
///    - 共享配置文件 `~/.aws/config`
#[derive(Deserialize, Serialize, SmartDefault, Clone, Validate)]
#[serde(default)]
pub struct AwsS3ObjectStoreConfig {
    /// 存储桶名称
    #[garde(length(min = 1))]
    #[default = ""]
    pub bucket: String,

    /// AWS 区域
    #[garde(skip)]
    #[default = "us-east-1"]
    pub region: String,

    /// 列举操作的默认键前缀
    #[garde(skip)]
    pub prefix: Option<String>,

    /// 自定义端点（用于兼容 S3 的存储，如 MinIO 等）
    #[garde(skip)]
    pub endpoint: Option<String>,

    /// 是否使用 path-style URL，设置了 endpoint 时默认为 true
    #[garde(skip)]
    pub force_path_style: Option<bool>,

    /// Access Key ID（需与 secret_access_key 成对配置）
    #[garde(skip)]
    pub access_key_id: Option<String>,

    /// Secret Access Key
    #[garde(skip)]
    pub secret_access_key: Option<String>,
}

/// S3 ObjectStore 实现
///
/// 构造时只组装 SDK 客户端，不发起网络请求；
/// 凭证问题在第一次 list/put 调用时以错误形式暴露。
pub struct AwsS3ObjectStore {
    client: Arc<Client>,
    config: AwsS3ObjectStoreConfig,
}

impl AwsS3ObjectStore {
    /// 唯一的构造方法
    pub fn new(config: AwsS3ObjectStoreConfig) -> Result<Self, ObjectStoreError> {
        // 使用 garde 验证配置
        if let Err(errors) = config.validate() {
            return Err(ObjectStoreError::Configuration(format!("{}", errors)));
        }

        // 访问密钥必须成对出现
        if config.access_key_id.is_some() != config.secret_access_key.is_some() {
            return Err(ObjectStoreError::Configuration(
                "access_key_id 与 secret_access_key 必须成对配置".to_string(),
            ));
        }

        // 尝试获取当前 runtime 的 handle，如果不存在则创建新的
        let client = if let Ok(handle) = tokio::runtime::Handle::try_current() {
            // 已经在 runtime 中，使用 block_in_place 避免阻塞
            tokio::task::block_in_place(|| {
                handle.block_on(async { Self::create_client(&config).await })
            })
        } else {
            // 不在 runtime 中，创建新的 runtime
            let rt = tokio::runtime::Runtime::new().map_err(|e| {
                ObjectStoreError::Configuration(format!("创建 runtime 失败: {}", e))
            })?;
            rt.block_on(async { Self::create_client(&config).await })
        };

        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    async fn create_client(config: &AwsS3ObjectStoreConfig) -> Client {
        let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest());

        // 设置区域
        builder = builder.region(Region::new(config.region.clone()));

        // 设置凭证
        if let (Some(ak), Some(sk)) = (&config.access_key_id, &config.secret_access_key) {
            let credentials = Credentials::new(ak, sk, None, None, "custom");
            builder = builder.credentials_provider(credentials);
        }

        // 加载配置
        let sdk_config = builder.load().await;

        // 构建客户端
        if let Some(endpoint) = &config.endpoint {
            // 自定义 endpoint，大多数 S3 兼容存储需要 path-style URL
            let use_path_style = config.force_path_style.unwrap_or(true);

            let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
                .endpoint_url(endpoint)
                .force_path_style(use_path_style)
                .build();

            Client::from_conf(s3_config)
        } else {
            Client::new(&sdk_config)
        }
    }

    /// 存储桶名称
    pub fn bucket(&self) -> &str {
        &self.config.bucket
    }

    /// 配置的默认键前缀
    pub fn prefix(&self) -> Option<&str> {
        self.config.prefix.as_deref()
    }

    /// 生效的列举前缀：调用方显式指定的优先于配置默认值
    fn effective_prefix<'a>(&'a self, prefix: Option<&'a str>) -> Option<&'a str> {
        prefix.or(self.config.prefix.as_deref())
    }
}

/// 将 SDK 错误归类为统一错误类型
///
/// 按服务端错误码区分认证、权限问题，按传输层变体区分网络问题，
/// 其余保留为厂商错误并带上原始错误链。
fn map_sdk_error<E, R>(err: SdkError<E, R>, context: &str) -> ObjectStoreError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    if let Some(code) = err.code().map(str::to_string) {
        match code.as_str() {
            "InvalidAccessKeyId" | "SignatureDoesNotMatch" | "ExpiredToken"
            | "TokenRefreshRequired" => {
                return ObjectStoreError::Authentication(format!("{}: {}", context, code));
            }
            "AccessDenied" => {
                return ObjectStoreError::PermissionDenied(format!("{}: {}", context, code));
            }
            _ => {}
        }
    }

    if matches!(
        &err,
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) | SdkError::ResponseError(_)
    ) {
        return ObjectStoreError::Network(format!("{}: {}", context, err));
    }

    ObjectStoreError::from_provider(err, "S3", context)
}

#[async_trait]
impl ObjectStore for AwsS3ObjectStore {
    async fn put_object(
        &self,
        key: &str,
        value: Bytes,
        options: PutOptions,
    ) -> Result<(), ObjectStoreError> {
        tracing::debug!(bucket = %self.config.bucket, key, size = value.len(), "put_object");

        let mut request = self
            .client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .body(ByteStream::from(value));

        if let Some(ct) = &options.content_type {
            request = request.content_type(ct);
        }

        if let Some(metadata) = &options.metadata {
            for (k, v) in metadata {
                request = request.metadata(k, v);
            }
        }

        request
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "put_object"))?;

        Ok(())
    }

    async fn list_objects(&self, prefix: Option<&str>) -> Result<ListPage, ObjectStoreError> {
        let prefix = self.effective_prefix(prefix);
        tracing::debug!(bucket = %self.config.bucket, prefix = ?prefix, "list_objects");

        let mut builder = self.client.list_objects_v2().bucket(&self.config.bucket);

        if let Some(p) = prefix {
            builder = builder.prefix(p);
        }

        // 只发起一次请求，不跟进 continuation token，
        // 超出第一页的对象由 truncated 标记暴露
        let output = builder
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "list_objects"))?;

        let truncated = output.is_truncated.unwrap_or(false);
        let mut objects = Vec::new();

        if let Some(contents) = output.contents {
            for obj in contents {
                objects.push(ObjectMeta {
                    key: obj.key.unwrap_or_default(),
                    size: obj.size.unwrap_or(0) as u64,
                    last_modified: obj
                        .last_modified
                        .and_then(|dt| chrono::DateTime::from_timestamp(dt.secs(), dt.subsec_nanos()))
                        .unwrap_or_else(chrono::Utc::now),
                    etag: obj.e_tag,
                    content_type: None,
                });
            }
        }

        Ok(ListPage { objects, truncated })
    }

    async fn put_file(
        &self,
        key: &str,
        local_path: &Path,
        options: PutOptions,
    ) -> Result<(), ObjectStoreError> {
        tracing::debug!(bucket = %self.config.bucket, key, path = %local_path.display(), "put_file");

        // 流式读取本地文件，避免整体载入内存
        let body = ByteStream::from_path(local_path).await.map_err(|e| {
            ObjectStoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("读取本地文件失败 {}: {}", local_path.display(), e),
            ))
        })?;

        let mut request = self
            .client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .body(body);

        if let Some(ct) = &options.content_type {
            request = request.content_type(ct);
        }

        if let Some(metadata) = &options.metadata {
            for (k, v) in metadata {
                request = request.metadata(k, v);
            }
        }

        request
            .send()
            .await
            .map_err(|e| map_sdk_error(e, "put_file"))?;

        Ok(())
    }
}
