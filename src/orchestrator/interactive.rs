//! 交互式表单编辑器
//!
//! 一行一个命令，项号从 1 开始：
//!
//! ```text
//! pdf <路径>              选择 PDF
//! excel <路径>            选择 Excel
//! add <报表>              追加空白页码
//! set <报表> <项号> [值]  修改页码
//! remove <报表> <项号>    删除页码
//! show                    查看表单
//! submit                  提交
//! help / quit
//! ```

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::models::file_slot::FileKind;
use crate::models::statement::StatementKind;
use crate::services::UploadForm;

pub const HELP: &str = "命令:
  pdf <路径>              选择 PDF 文件
  excel <路径>            选择 Excel 文件 (.xlsx / .xls)
  add <报表>              追加空白页码 (报表: income / balance / cashflow)
  set <报表> <项号> [值]  修改第 N 项页码
  remove <报表> <项号>    删除第 N 项页码
  show                    查看当前表单
  submit                  提交
  help                    显示帮助
  quit                    退出";

/// 编辑器命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    Select(FileKind, PathBuf),
    Add(StatementKind),
    Set(StatementKind, usize, String),
    Remove(StatementKind, usize),
    Show,
    Submit,
    Help,
    Quit,
}

/// 命令执行后编辑器要做的事
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// 打印消息后继续
    Print(String),
    Submit,
    Quit,
}

/// 解析一行输入；空行返回 `Ok(None)`
pub fn parse_command(line: &str) -> Result<Option<EditorCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };

    let command = match head.to_lowercase().as_str() {
        "pdf" | "excel" => {
            let rest = line.trim_start()[head.len()..].trim();
            if rest.is_empty() {
                return Err(format!("用法: {} <路径>", head));
            }
            let kind = if head.eq_ignore_ascii_case("pdf") {
                FileKind::Pdf
            } else {
                FileKind::Spreadsheet
            };
            EditorCommand::Select(kind, PathBuf::from(rest))
        }
        "add" => EditorCommand::Add(parse_kind(words.next())?),
        "set" => {
            let kind = parse_kind(words.next())?;
            let index = parse_position(words.next())?;
            let value = words.collect::<Vec<_>>().join(" ");
            EditorCommand::Set(kind, index, value)
        }
        "remove" | "rm" => {
            let kind = parse_kind(words.next())?;
            EditorCommand::Remove(kind, parse_position(words.next())?)
        }
        "show" | "ls" => EditorCommand::Show,
        "submit" => EditorCommand::Submit,
        "help" | "?" => EditorCommand::Help,
        "quit" | "exit" | "q" => EditorCommand::Quit,
        other => return Err(format!("未知命令: {}（输入 help 查看帮助）", other)),
    };
    Ok(Some(command))
}

fn parse_kind(word: Option<&str>) -> Result<StatementKind, String> {
    let word = word.ok_or_else(|| "缺少报表类型 (income / balance / cashflow)".to_string())?;
    StatementKind::from_str(word).ok_or_else(|| format!("未知报表类型: {}", word))
}

// 项号从 1 开始，返回 0 起的索引
fn parse_position(word: Option<&str>) -> Result<usize, String> {
    let word = word.ok_or_else(|| "缺少项号".to_string())?;
    match word.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("无效项号: {}（从 1 开始）", word)),
    }
}

/// 把命令作用到表单上
pub fn apply_command(form: &mut UploadForm, command: EditorCommand) -> EditorAction {
    let message = match command {
        EditorCommand::Select(kind, path) => match form.select_file(kind, path) {
            Ok(file) => format!("已选择 {} 文件: {}", kind, file.name),
            Err(e) => e.to_string(),
        },
        EditorCommand::Add(kind) => {
            let index = form.add_page(kind);
            format!("{} 已添加第 {} 项（用 set 填写页码）", kind, index + 1)
        }
        EditorCommand::Set(kind, index, value) => match form.set_page(kind, index, value) {
            Ok(()) => render_pages(form, kind),
            Err(e) => e.to_string(),
        },
        EditorCommand::Remove(kind, index) => match form.remove_page(kind, index) {
            Ok(_) => render_pages(form, kind),
            Err(e) => e.to_string(),
        },
        EditorCommand::Show => render_form(form),
        EditorCommand::Help => HELP.to_string(),
        EditorCommand::Submit => return EditorAction::Submit,
        EditorCommand::Quit => return EditorAction::Quit,
    };
    EditorAction::Print(message)
}

fn render_pages(form: &UploadForm, kind: StatementKind) -> String {
    let entries = form.pages(kind).entries();
    if entries.is_empty() {
        return format!("{}: (无)", kind);
    }
    let items: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, page)| format!("{}. {}", i + 1, if page.is_empty() { "_" } else { page.as_str() }))
        .collect();
    format!("{}: {}", kind, items.join("  "))
}

/// 表单的文本视图
pub fn render_form(form: &UploadForm) -> String {
    let mut out = String::new();
    for kind in [FileKind::Pdf, FileKind::Spreadsheet] {
        let _ = writeln!(out, "{} 文件: {}", kind, form.file_name(kind).unwrap_or("(未选择)"));
    }
    for kind in StatementKind::ALL {
        let _ = writeln!(out, "{}", render_pages(form, kind));
    }
    let status = if form.is_busy() {
        "处理中..."
    } else if form.can_submit() {
        "可以提交"
    } else {
        "请先选择 PDF 和 Excel 文件"
    };
    let _ = write!(out, "状态: {}", status);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("   ").unwrap(), None);
        assert_eq!(
            parse_command("pdf  reports/annual 2024.pdf").unwrap(),
            Some(EditorCommand::Select(FileKind::Pdf, PathBuf::from("reports/annual 2024.pdf")))
        );
        assert_eq!(
            parse_command("add cashflow").unwrap(),
            Some(EditorCommand::Add(StatementKind::CashFlow))
        );
        assert_eq!(
            parse_command("set balance 2 6").unwrap(),
            Some(EditorCommand::Set(StatementKind::Balance, 1, "6".to_string()))
        );
        assert_eq!(
            parse_command("set income 1").unwrap(),
            Some(EditorCommand::Set(StatementKind::Income, 0, String::new()))
        );
        assert_eq!(
            parse_command("remove income 1").unwrap(),
            Some(EditorCommand::Remove(StatementKind::Income, 0))
        );
        assert_eq!(parse_command("QUIT").unwrap(), Some(EditorCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("pdf").is_err());
        assert!(parse_command("add equity").is_err());
        assert!(parse_command("remove income 0").is_err());
        assert!(parse_command("set income x 3").is_err());
        assert!(parse_command("download").is_err());
    }

    #[test]
    fn test_apply_edits_form() {
        let mut form = UploadForm::new();
        apply_command(&mut form, EditorCommand::Add(StatementKind::Income));
        apply_command(&mut form, EditorCommand::Add(StatementKind::Income));
        let action = apply_command(&mut form, EditorCommand::Set(StatementKind::Income, 1, "4".into()));
        assert_eq!(action, EditorAction::Print("利润表: 1. _  2. 4".to_string()));

        apply_command(&mut form, EditorCommand::Remove(StatementKind::Income, 0));
        assert_eq!(form.pages(StatementKind::Income).entries(), &["4"]);
    }

    #[test]
    fn test_apply_reports_errors_without_changes() {
        let mut form = UploadForm::new();
        let action = apply_command(&mut form, EditorCommand::Remove(StatementKind::Balance, 3));
        assert!(matches!(action, EditorAction::Print(msg) if msg.contains("超出范围")));

        let action = apply_command(
            &mut form,
            EditorCommand::Select(FileKind::Spreadsheet, PathBuf::from("report.pdf")),
        );
        assert!(matches!(action, EditorAction::Print(msg) if msg.contains("不接受")));
        assert!(form.file(FileKind::Spreadsheet).is_none());
    }

    #[test]
    fn test_render_form_status() {
        let mut form = UploadForm::new();
        assert!(render_form(&form).ends_with("请先选择 PDF 和 Excel 文件"));

        form.select_file(FileKind::Pdf, "a.pdf").unwrap();
        form.select_file(FileKind::Spreadsheet, "b.xlsx").unwrap();
        let text = render_form(&form);
        assert!(text.contains("PDF 文件: a.pdf"));
        assert!(text.ends_with("可以提交"));
    }

    #[test]
    fn test_submit_and_quit_actions() {
        let mut form = UploadForm::new();
        assert_eq!(apply_command(&mut form, EditorCommand::Submit), EditorAction::Submit);
        assert_eq!(apply_command(&mut form, EditorCommand::Quit), EditorAction::Quit);
    }
}
