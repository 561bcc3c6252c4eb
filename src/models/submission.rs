//! 提交请求数据结构
//!
//! 一次提交 = 两个文件 + 按报表类型分组的页码（JSON 文本）

use serde::{Deserialize, Serialize};

use crate::models::file_slot::{FileKind, SelectedFile};
use crate::models::statement::StatementKind;

/// 按报表类型分组的整数页码
///
/// 无法解析的页码保存为 `None`，序列化为 JSON `null`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementPages {
    pub income: Vec<Option<i64>>,
    pub balance: Vec<Option<i64>>,
    #[serde(rename = "cashFlow")]
    pub cash_flow: Vec<Option<i64>>,
}

impl StatementPages {
    pub fn get(&self, kind: StatementKind) -> &[Option<i64>] {
        match kind {
            StatementKind::Income => &self.income,
            StatementKind::Balance => &self.balance,
            StatementKind::CashFlow => &self.cash_flow,
        }
    }

    pub fn get_mut(&mut self, kind: StatementKind) -> &mut Vec<Option<i64>> {
        match kind {
            StatementKind::Income => &mut self.income,
            StatementKind::Balance => &mut self.balance,
            StatementKind::CashFlow => &mut self.cash_flow,
        }
    }

    /// `pages` 字段的 JSON 文本
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// 是否存在无法解析的页码
    pub fn has_unparsed(&self) -> bool {
        StatementKind::ALL
            .iter()
            .any(|kind| self.get(*kind).iter().any(Option::is_none))
    }
}

/// multipart 中的一个文件部分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// 表单字段名（`pdf_file` / `excel_file`）
    pub field: &'static str,
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(kind: FileKind, file: &SelectedFile, bytes: Vec<u8>) -> Self {
        Self {
            field: kind.field_name(),
            file_name: file.name.clone(),
            mime: file.mime,
            bytes,
        }
    }
}

/// 完整的提交请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub pdf: FilePart,
    pub excel: FilePart,
    pub pages: StatementPages,
}

impl SubmissionRequest {
    /// multipart 中页码字段的名称
    pub const PAGES_FIELD: &'static str = "pages";

    pub fn pages_json(&self) -> serde_json::Result<String> {
        self.pages.to_json()
    }
}
