use thiserror::Error;

/// 对象存储统一错误类型
#[derive(Error, Debug)]
pub enum ObjectStoreError {
    #[error("认证失败: {0}")]
    Authentication(String),

    #[error("权限不足: {0}")]
    PermissionDenied(String),

    #[error("网络错误: {0}")]
    Network(String),

    #[error("配置错误: {0}")]
    Configuration(String),

    #[error("厂商错误 [{provider}]: {message}")]
    Provider {
        provider: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("无效的过滤表达式 \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },
}

impl ObjectStoreError {
    /// 从厂商 SDK 错误转换
    pub fn from_provider<E>(err: E, provider: &str, context: &str) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ObjectStoreError::Provider {
            provider: provider.to_string(),
            message: context.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// 是否为后端调用阶段产生的错误
    ///
    /// 后端错误在操作边界被捕获并报告，不中断后续操作；
    /// 其余错误（过滤表达式、配置）属于调用方使用错误，向上传播。
    pub fn is_backend(&self) -> bool {
        matches!(
            self,
            ObjectStoreError::Authentication(_)
                | ObjectStoreError::PermissionDenied(_)
                | ObjectStoreError::Network(_)
                | ObjectStoreError::Provider { .. }
                | ObjectStoreError::Io(_)
        )
    }
}
