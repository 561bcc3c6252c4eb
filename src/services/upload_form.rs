//! 上传表单状态 - 业务能力层
//!
//! 持有两个文件槽位、三个页码列表和"处理中"标志

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::FormError;
use crate::models::file_slot::{FileKind, FileSlot, SelectedFile};
use crate::models::form_file::FormFile;
use crate::models::page_list::PageList;
use crate::models::statement::StatementKind;
use crate::models::submission::StatementPages;

/// 提交状态
///
/// 克隆后共享同一个标志
#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    in_progress: Arc<AtomicBool>,
}

impl SubmissionState {
    pub fn is_in_progress(&self) -> bool {
        self.in_progress.load(Ordering::SeqCst)
    }

    /// 尝试进入"处理中"，已在处理中则返回 None
    pub fn try_begin(&self) -> Option<BusyGuard> {
        self.in_progress
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| BusyGuard {
                flag: Arc::clone(&self.in_progress),
            })
    }
}

/// 持有期间标志为 true，释放时清除
#[derive(Debug)]
pub struct BusyGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// 上传表单
///
/// 克隆得到的表单内容相同，但拥有独立的"处理中"标志
#[derive(Debug)]
pub struct UploadForm {
    pdf: FileSlot,
    excel: FileSlot,
    income: PageList,
    balance: PageList,
    cash_flow: PageList,
    state: SubmissionState,
}

impl Clone for UploadForm {
    fn clone(&self) -> Self {
        Self {
            pdf: self.pdf.clone(),
            excel: self.excel.clone(),
            income: self.income.clone(),
            balance: self.balance.clone(),
            cash_flow: self.cash_flow.clone(),
            state: SubmissionState::default(),
        }
    }
}

impl Default for UploadForm {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadForm {
    pub fn new() -> Self {
        Self {
            pdf: FileSlot::new(FileKind::Pdf),
            excel: FileSlot::new(FileKind::Spreadsheet),
            income: PageList::new(StatementKind::Income),
            balance: PageList::new(StatementKind::Balance),
            cash_flow: PageList::new(StatementKind::CashFlow),
            state: SubmissionState::default(),
        }
    }

    /// 由表单描述文件填充
    pub fn from_form_file(form: &FormFile) -> Result<Self, FormError> {
        let mut upload = Self::new();
        if let Some(pdf) = &form.pdf {
            upload.select_file(FileKind::Pdf, pdf.clone())?;
        }
        if let Some(excel) = &form.excel {
            upload.select_file(FileKind::Spreadsheet, excel.clone())?;
        }
        for kind in StatementKind::ALL {
            upload.replace_pages(kind, form.pages.get(kind).iter().cloned());
        }
        Ok(upload)
    }

    // ========== 文件槽位 ==========

    fn slot(&self, kind: FileKind) -> &FileSlot {
        match kind {
            FileKind::Pdf => &self.pdf,
            FileKind::Spreadsheet => &self.excel,
        }
    }

    /// 选择文件，替换槽位中原有的文件
    pub fn select_file(&mut self, kind: FileKind, path: impl Into<PathBuf>) -> Result<&SelectedFile, FormError> {
        match kind {
            FileKind::Pdf => self.pdf.select(path),
            FileKind::Spreadsheet => self.excel.select(path),
        }
    }

    pub fn file(&self, kind: FileKind) -> Option<&SelectedFile> {
        self.slot(kind).file()
    }

    /// 槽位中文件的展示名称
    pub fn file_name(&self, kind: FileKind) -> Option<&str> {
        self.slot(kind).display_name()
    }

    // ========== 页码列表 ==========

    pub fn pages(&self, kind: StatementKind) -> &PageList {
        match kind {
            StatementKind::Income => &self.income,
            StatementKind::Balance => &self.balance,
            StatementKind::CashFlow => &self.cash_flow,
        }
    }

    fn pages_mut(&mut self, kind: StatementKind) -> &mut PageList {
        match kind {
            StatementKind::Income => &mut self.income,
            StatementKind::Balance => &mut self.balance,
            StatementKind::CashFlow => &mut self.cash_flow,
        }
    }

    /// 整体替换某类报表的页码
    pub fn replace_pages<I, S>(&mut self, kind: StatementKind, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.pages_mut(kind) = PageList::with_entries(kind, entries);
    }

    /// 追加空白页码，返回新项索引
    pub fn add_page(&mut self, kind: StatementKind) -> usize {
        self.pages_mut(kind).append()
    }

    pub fn set_page(&mut self, kind: StatementKind, index: usize, value: impl Into<String>) -> Result<(), FormError> {
        self.pages_mut(kind).set(index, value)
    }

    pub fn remove_page(&mut self, kind: StatementKind, index: usize) -> Result<String, FormError> {
        self.pages_mut(kind).remove(index)
    }

    // ========== 提交状态 ==========

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_in_progress()
    }

    /// 提交按钮是否可用：不在处理中且两个文件都已选择
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && self.pdf.is_filled() && self.excel.is_filled()
    }

    /// 提交前置条件：两个文件都已选择，且每类报表至少一个页码
    pub fn check_preconditions(&self) -> Result<(), FormError> {
        if !self.pdf.is_filled() || !self.excel.is_filled() {
            return Err(FormError::MissingFiles);
        }
        match StatementKind::ALL.into_iter().find(|kind| self.pages(*kind).is_empty()) {
            Some(kind) => Err(FormError::EmptyPageList { kind }),
            None => Ok(()),
        }
    }

    /// 把页码文本转换为整数
    ///
    /// 非严格模式下无法解析的项保留为 `None`
    pub fn statement_pages(&self, strict: bool) -> Result<StatementPages, FormError> {
        let mut pages = StatementPages::default();
        for kind in StatementKind::ALL {
            let list = self.pages(kind);
            *pages.get_mut(kind) = if strict {
                list.parsed_strict()?.into_iter().map(Some).collect()
            } else {
                list.parsed()
            };
        }
        Ok(pages)
    }
}
