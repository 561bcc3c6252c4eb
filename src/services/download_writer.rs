//! 结果文件写入服务 - 业务能力层
//!
//! 只负责把后端返回的内容以固定文件名落盘，不关心流程

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, Result};

/// 结果文件写入服务
///
/// 职责：
/// - 把响应体原样写入下载目录
/// - 文件名固定，重复提交会覆盖上一次的结果
/// - 不解析内容
pub struct DownloadWriter {
    download_dir: PathBuf,
    file_name: String,
}

impl DownloadWriter {
    /// 创建新的写入服务
    pub fn new(config: &Config) -> Self {
        Self {
            download_dir: config.download_dir.clone(),
            file_name: config.download_file_name.clone(),
        }
    }

    /// 使用自定义目录和文件名创建
    pub fn with_path(download_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            download_dir: download_dir.into(),
            file_name: file_name.into(),
        }
    }

    /// 目标文件路径
    pub fn target(&self) -> PathBuf {
        self.download_dir.join(&self.file_name)
    }

    /// 写入结果文件
    ///
    /// # 参数
    /// - `payload`: 后端返回的二进制内容
    ///
    /// # 返回
    /// 返回写入后的文件路径
    pub async fn write(&self, payload: &[u8]) -> Result<PathBuf> {
        let target = self.target();
        debug!("写入结果文件: {} ({} 字节)", target.display(), payload.len());

        ensure_dir(&self.download_dir).await?;
        fs::write(&target, payload)
            .await
            .map_err(|e| AppError::file_write_failed(&target, e))?;

        Ok(target)
    }
}

async fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::file_write_failed(dir, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DownloadWriter::with_path(dir.path().join("out"), "result.xlsx");

        let path = writer.write(b"PK\x03\x04").await.unwrap();

        assert_eq!(path, dir.path().join("out").join("result.xlsx"));
        assert_eq!(std::fs::read(&path).unwrap(), b"PK\x03\x04");
    }

    #[tokio::test]
    async fn test_write_overwrites_previous_result() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DownloadWriter::with_path(dir.path(), "result.xlsx");

        writer.write(b"first").await.unwrap();
        let path = writer.write(b"second").await.unwrap();

        assert_eq!(std::fs::read(path).unwrap(), b"second");
    }
}
