//! 提交流程 - 流程层
//!
//! 核心职责：定义"一次提交"的完整处理流程
//!
//! 流程顺序：
//! 1. 检查前置条件（文件、页码）→ 不满足则提示并结束，不发请求
//! 2. 页码文本 → 整数
//! 3. 标记处理中 → 读取文件 → 发送请求
//! 4. 成功：保存结果文件并提示；失败：记录日志并提示通用错误
//! 5. 清除处理中标志

use std::path::PathBuf;
use std::sync::Arc;

use tokio::fs;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{ApiError, AppError, FormError, Result};
use crate::infrastructure::Transport;
use crate::models::file_slot::{FileKind, SelectedFile};
use crate::models::submission::{FilePart, StatementPages, SubmissionRequest};
use crate::services::{DownloadWriter, NoticeLevel, Notifier, UploadForm};
use crate::utils::logging::truncate_text;

/// 处理失败时展示给用户的通用提示
pub const FAILURE_MESSAGE: &str = "处理文件时发生错误";
/// 处理成功时的提示
pub const SUCCESS_MESSAGE: &str = "文件处理成功！";

/// 一次提交的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 成功，结果文件已保存
    Downloaded(PathBuf),
    /// 前置条件不满足，未发送请求
    Blocked(FormError),
    /// 已有提交在进行，未发送请求
    Busy,
    /// 请求失败或响应非成功
    Failed,
}

/// 提交流程
///
/// - 编排完整的提交流程
/// - 决定何时检查、何时发送、何时保存
/// - 不持有表单状态
/// - 只依赖能力（transport / writer / notifier）
pub struct SubmissionController<T> {
    transport: T,
    writer: DownloadWriter,
    notifier: Arc<dyn Notifier>,
    strict_page_numbers: bool,
}

impl<T: Transport> SubmissionController<T> {
    /// 创建新的提交流程
    pub fn new(config: &Config, transport: T, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            transport,
            writer: DownloadWriter::new(config),
            notifier,
            strict_page_numbers: config.strict_page_numbers,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 检查并转换页码，不发送请求
    pub fn prepare(&self, form: &UploadForm) -> std::result::Result<StatementPages, FormError> {
        form.check_preconditions()?;
        form.statement_pages(self.strict_page_numbers)
    }

    pub async fn submit(&self, form: &UploadForm) -> SubmitOutcome {
        if form.is_busy() {
            warn!("⚠️ 已有提交正在处理，忽略本次提交");
            return SubmitOutcome::Busy;
        }

        // ========== 前置条件 ==========
        let pages = match self.prepare(form) {
            Ok(pages) => pages,
            Err(e) => {
                warn!("⚠️ 提交被拒绝: {}", e);
                self.notifier.notify(NoticeLevel::Blocking, &e.to_string());
                return SubmitOutcome::Blocked(e);
            }
        };

        if pages.has_unparsed() {
            warn!("⚠️ 存在无法解析的页码，将以 null 发送给后端");
        }

        let Some(guard) = form.state().try_begin() else {
            warn!("⚠️ 已有提交正在处理，忽略本次提交");
            return SubmitOutcome::Busy;
        };

        info!("📤 正在提交到 {}", self.transport.endpoint());
        let result = self.send_and_save(form, pages).await;

        // 通知前先清除处理中标志
        drop(guard);

        match result {
            Ok(path) => {
                info!("✓ 结果文件已保存: {}", path.display());
                self.notifier.notify(NoticeLevel::Success, SUCCESS_MESSAGE);
                SubmitOutcome::Downloaded(path)
            }
            Err(e) => {
                error!("❌ 处理文件时发生错误: {}", e);
                self.notifier.notify(NoticeLevel::Failure, FAILURE_MESSAGE);
                SubmitOutcome::Failed
            }
        }
    }

    async fn send_and_save(&self, form: &UploadForm, pages: StatementPages) -> Result<PathBuf> {
        let request = SubmissionRequest {
            pdf: read_part(form, FileKind::Pdf).await?,
            excel: read_part(form, FileKind::Spreadsheet).await?,
            pages,
        };

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let body = String::from_utf8_lossy(&response.body);
            debug!("后端错误响应 ({}): {}", response.status, truncate_text(&body, 200));
            return Err(ApiError::BadStatus {
                endpoint: self.transport.endpoint().to_string(),
                status: response.status,
                body: Some(body.into_owned()),
            }
            .into());
        }

        self.writer.write(&response.body).await
    }
}

async fn read_part(form: &UploadForm, kind: FileKind) -> Result<FilePart> {
    let file: &SelectedFile = form.file(kind).ok_or(FormError::MissingFiles)?;
    let bytes = fs::read(&file.path)
        .await
        .map_err(|e| AppError::file_read_failed(&file.path, e))?;
    debug!("已读取 {} 文件: {} ({} 字节)", kind, file.name, bytes.len());
    Ok(FilePart::new(kind, file, bytes))
}
