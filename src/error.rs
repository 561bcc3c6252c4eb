use std::path::PathBuf;

use thiserror::Error;

use crate::models::file_slot::FileKind;
use crate::models::statement::StatementKind;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 表单状态错误（提交前置条件、列表编辑）
    #[error("表单错误: {0}")]
    Form(#[from] FormError),
    /// 接口调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 表单相关错误
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// 缺少 PDF 或 Excel 文件
    #[error("请同时上传 PDF 和 Excel 文件")]
    MissingFiles,
    /// 某类报表没有填写页码
    #[error("请为每一类报表至少填写一个页码 ({kind} 为空)")]
    EmptyPageList { kind: StatementKind },
    /// 严格模式下页码无法解析为整数
    #[error("{kind} 的第 {index} 项页码无效: '{value}'")]
    InvalidPageNumber {
        kind: StatementKind,
        index: usize,
        value: String,
    },
    /// 列表索引越界
    #[error("{kind} 页码索引 {index} 超出范围 (共 {len} 项)")]
    IndexOutOfRange {
        kind: StatementKind,
        index: usize,
        len: usize,
    },
    /// 文件类型不被该槽位接受
    #[error("{kind} 槽位不接受文件: {name}")]
    RejectedFile { kind: FileKind, name: String },
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 服务端返回非成功状态
    #[error("服务端返回错误状态 ({endpoint}): {status}")]
    BadStatus {
        endpoint: String,
        status: u16,
        body: Option<String>,
    },
    /// 读取响应体失败
    #[error("读取响应内容失败 ({endpoint}): {source}")]
    BodyReadFailed {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    Json(#[from] serde_json::Error),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {}", .path.display())]
    NotFound { path: PathBuf },
    /// 读取文件失败
    #[error("读取文件失败 ({}): {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({}): {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({}): {source}", .path.display())]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 端点地址无效
    #[error("无效的端点地址: {0}")]
    InvalidEndpoint(String),
}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::Json(err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_status_display_hides_body() {
        let err = AppError::from(ApiError::BadStatus {
            endpoint: "http://localhost:5000/process".to_string(),
            status: 400,
            body: Some("Invalid page number in income".to_string()),
        });
        let text = err.to_string();
        assert!(text.contains("400"));
        assert!(!text.contains("Invalid page number"));
    }

    #[test]
    fn form_error_is_cloneable() {
        let err = FormError::EmptyPageList {
            kind: StatementKind::CashFlow,
        };
        assert_eq!(err.clone(), err);
    }
}
