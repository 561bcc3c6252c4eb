//! 文件槽位
//!
//! 每个槽位最多持有一个文件，新选择整体替换旧文件

use std::path::{Path, PathBuf};

use crate::error::FormError;

/// 文件槽位类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// PDF 年报
    Pdf,
    /// Excel 模板
    Spreadsheet,
}

const PDF_TYPES: &[(&str, &str)] = &[("pdf", "application/pdf")];

const SPREADSHEET_TYPES: &[(&str, &str)] = &[
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("xls", "application/vnd.ms-excel"),
];

impl FileKind {
    /// 该槽位接受的 (扩展名, MIME) 列表
    pub fn accepted_types(self) -> &'static [(&'static str, &'static str)] {
        match self {
            FileKind::Pdf => PDF_TYPES,
            FileKind::Spreadsheet => SPREADSHEET_TYPES,
        }
    }

    /// 根据扩展名判断文件是否可放入该槽位，返回对应的 MIME
    pub fn mime_for(self, path: &Path) -> Option<&'static str> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        self.accepted_types()
            .iter()
            .find(|(e, _)| *e == ext)
            .map(|(_, mime)| *mime)
    }

    /// multipart 表单中的字段名
    pub fn field_name(self) -> &'static str {
        match self {
            FileKind::Pdf => "pdf_file",
            FileKind::Spreadsheet => "excel_file",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF",
            FileKind::Spreadsheet => "Excel",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 已选择的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    /// 展示用文件名
    pub name: String,
    pub mime: &'static str,
}

impl SelectedFile {
    /// 按槽位类型检查并构建
    pub fn for_kind(kind: FileKind, path: impl Into<PathBuf>) -> Result<Self, FormError> {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        match kind.mime_for(&path) {
            Some(mime) if !name.is_empty() => Ok(Self { path, name, mime }),
            _ => Err(FormError::RejectedFile {
                kind,
                name: path.display().to_string(),
            }),
        }
    }
}

/// 单文件槽位
#[derive(Debug, Clone)]
pub struct FileSlot {
    kind: FileKind,
    file: Option<SelectedFile>,
}

impl FileSlot {
    pub fn new(kind: FileKind) -> Self {
        Self { kind, file: None }
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// 选择文件；被拒绝时槽位保持原状
    pub fn select(&mut self, path: impl Into<PathBuf>) -> Result<&SelectedFile, FormError> {
        let file = SelectedFile::for_kind(self.kind, path)?;
        Ok(&*self.file.insert(file))
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// 当前文件名（用于展示）
    pub fn display_name(&self) -> Option<&str> {
        self.file.as_ref().map(|f| f.name.as_str())
    }

    pub fn is_filled(&self) -> bool {
        self.file.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(
            FileKind::Pdf.mime_for(Path::new("Annual-Report.PDF")),
            Some("application/pdf")
        );
        assert_eq!(
            FileKind::Spreadsheet.mime_for(Path::new("template.xls")),
            Some("application/vnd.ms-excel")
        );
        assert_eq!(FileKind::Spreadsheet.mime_for(Path::new("report.pdf")), None);
        assert_eq!(FileKind::Pdf.mime_for(Path::new("no_extension")), None);
    }

    #[test]
    fn test_select_replaces_previous_file() {
        let mut slot = FileSlot::new(FileKind::Pdf);
        assert!(!slot.is_filled());

        slot.select("a/2023.pdf").unwrap();
        slot.select("b/2024.pdf").unwrap();

        assert_eq!(slot.display_name(), Some("2024.pdf"));
        assert_eq!(slot.file().unwrap().path, PathBuf::from("b/2024.pdf"));
    }

    #[test]
    fn test_rejected_file_keeps_slot() {
        let mut slot = FileSlot::new(FileKind::Spreadsheet);
        slot.select("template.xlsx").unwrap();

        let err = slot.select("notes.txt").unwrap_err();
        assert!(matches!(err, FormError::RejectedFile { kind: FileKind::Spreadsheet, .. }));
        assert_eq!(slot.display_name(), Some("template.xlsx"));
    }
}
