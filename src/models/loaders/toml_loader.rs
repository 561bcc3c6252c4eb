use crate::error::{AppError, FileError, Result};
use crate::models::form_file::FormFile;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从 TOML 文件加载表单描述
///
/// 文件中的相对路径按表单文件所在目录解析
pub async fn load_form_file(toml_file_path: &Path) -> Result<FormFile> {
    if !toml_file_path.exists() {
        return Err(FileError::NotFound {
            path: toml_file_path.to_path_buf(),
        }
        .into());
    }

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(toml_file_path, e))?;

    let mut form: FormFile = toml::from_str(&content).map_err(|e| FileError::TomlParseFailed {
        path: toml_file_path.to_path_buf(),
        source: e,
    })?;

    let base = toml_file_path.parent().unwrap_or_else(|| Path::new(""));
    form.pdf = form.pdf.map(|p| resolve(base, p));
    form.excel = form.excel.map(|p| resolve(base, p));

    // 设置文件路径
    form.file_path = Some(toml_file_path.to_path_buf());

    tracing::debug!(
        "已加载表单文件: {} (利润表 {} 项, 资产负债表 {} 项, 现金流量表 {} 项)",
        toml_file_path.display(),
        form.pages.income.len(),
        form.pages.balance.len(),
        form.pages.cash_flow.len()
    );

    Ok(form)
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_relative_paths_follow_form_file() {
        let dir = tempfile::tempdir().unwrap();
        let form_path = dir.path().join("form.toml");
        std::fs::write(
            &form_path,
            "pdf = \"docs/report.pdf\"\nexcel = \"/abs/template.xlsx\"\n[pages]\nincome = [\"3\"]\n",
        )
        .unwrap();

        let form = load_form_file(&form_path).await.unwrap();
        assert_eq!(form.pdf, Some(dir.path().join("docs/report.pdf")));
        assert_eq!(form.excel, Some(PathBuf::from("/abs/template.xlsx")));
        assert_eq!(form.file_path.as_deref(), Some(form_path.as_path()));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let err = load_form_file(Path::new("/definitely/not/here.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::File(FileError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_bad_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let form_path = dir.path().join("broken.toml");
        std::fs::write(&form_path, "pdf = [").unwrap();

        let err = load_form_file(&form_path).await.unwrap_err();
        assert!(matches!(err, AppError::File(FileError::TomlParseFailed { .. })));
    }
}
