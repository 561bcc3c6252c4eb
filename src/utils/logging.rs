/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::info;

use crate::models::file_slot::FileKind;
use crate::models::statement::StatementKind;
use crate::services::UploadForm;
use crate::workflow::SubmitOutcome;

/// 记录程序启动信息
///
/// # 参数
/// - `endpoint`: 后端接口地址
pub fn log_startup(endpoint: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 财务报表提取 - 上传客户端");
    info!("🌐 后端地址: {}", endpoint);
    info!("{}", "=".repeat(60));
}

/// 记录表单内容概要
pub fn log_form_summary(form: &UploadForm) {
    info!("\n{}", "─".repeat(60));
    for kind in [FileKind::Pdf, FileKind::Spreadsheet] {
        info!(
            "📄 {} 文件: {}",
            kind,
            form.file_name(kind).unwrap_or("(未选择)")
        );
    }
    for kind in StatementKind::ALL {
        let pages = form.pages(kind);
        info!("📋 {} 页码: [{}]", kind, pages.entries().join(", "));
    }
    info!("{}", "─".repeat(60));
}

/// 打印最终结果
///
/// # 参数
/// - `outcome`: 提交结果
pub fn print_outcome(outcome: &SubmitOutcome) {
    info!("\n{}", "=".repeat(60));
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    match outcome {
        SubmitOutcome::Downloaded(path) => info!("✅ 结果文件: {}", path.display()),
        SubmitOutcome::Blocked(e) => info!("⚠️ 未提交: {}", e),
        SubmitOutcome::Busy => info!("⚠️ 未提交: 已有提交正在处理"),
        SubmitOutcome::Failed => info!("❌ 处理失败"),
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("abc", 5), "abc");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("利润表资产负债表", 3), "利润表...");
    }
}
