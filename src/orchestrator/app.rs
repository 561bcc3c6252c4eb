use std::io::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::cli::{Commands, FormArgs, InteractiveArgs};
use crate::config::Config;
use crate::infrastructure::{ReqwestTransport, Transport};
use crate::models::file_slot::FileKind;
use crate::models::loaders::load_form_file;
use crate::models::statement::StatementKind;
use crate::orchestrator::interactive::{apply_command, parse_command, render_form, EditorAction, HELP};
use crate::services::{ConsoleNotifier, NoticeLevel, Notifier, UploadForm};
use crate::utils::logging::{log_form_summary, log_startup, print_outcome};
use crate::workflow::{SubmissionController, SubmitOutcome};

/// 应用主结构
pub struct App<T = ReqwestTransport> {
    controller: SubmissionController<T>,
    notifier: Arc<dyn Notifier>,
}

impl App<ReqwestTransport> {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config.endpoint_url);

        let transport = ReqwestTransport::new(&config).context("无法创建 HTTP 客户端")?;
        Ok(Self::with_transport(&config, transport, Arc::new(ConsoleNotifier)))
    }
}

impl<T: Transport> App<T> {
    /// 使用自定义传输层和通知方式创建
    pub fn with_transport(config: &Config, transport: T, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            controller: SubmissionController::new(config, transport, Arc::clone(&notifier)),
            notifier,
        }
    }

    /// 运行命令，返回是否成功
    pub async fn run(&self, command: Commands) -> Result<bool> {
        match command {
            Commands::Submit(args) => self.submit_once(&args).await,
            Commands::Check(args) => self.check(&args).await,
            Commands::Interactive(args) => self.interactive(&args).await,
        }
    }

    async fn submit_once(&self, args: &FormArgs) -> Result<bool> {
        let form = build_form(args).await?;
        log_form_summary(&form);

        let outcome = self.controller.submit(&form).await;
        print_outcome(&outcome);

        Ok(matches!(outcome, SubmitOutcome::Downloaded(_)))
    }

    async fn check(&self, args: &FormArgs) -> Result<bool> {
        let form = build_form(args).await?;
        log_form_summary(&form);

        match self.controller.prepare(&form) {
            Ok(pages) => {
                if pages.has_unparsed() {
                    warn!("⚠️ 存在无法解析的页码，提交时将以 null 发送");
                }
                println!("{}", pages.to_json()?);
                Ok(true)
            }
            Err(e) => {
                self.notifier.notify(NoticeLevel::Blocking, &e.to_string());
                Ok(false)
            }
        }
    }

    async fn interactive(&self, args: &InteractiveArgs) -> Result<bool> {
        let mut form = match &args.form {
            Some(path) => {
                let form_file = load_form_file(path).await?;
                UploadForm::from_form_file(&form_file)?
            }
            None => UploadForm::new(),
        };

        println!("{}\n", HELP);
        println!("{}", render_form(&form));

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut last_success = false;

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(msg) => {
                    println!("{}", msg);
                    continue;
                }
            };

            match apply_command(&mut form, command) {
                EditorAction::Print(message) => println!("{}", message),
                EditorAction::Submit => {
                    info!("📤 开始提交...");
                    let outcome = self.controller.submit(&form).await;
                    last_success = matches!(outcome, SubmitOutcome::Downloaded(_));
                    print_outcome(&outcome);
                }
                EditorAction::Quit => break,
            }
        }

        Ok(last_success)
    }
}

/// 根据命令行参数构建表单
///
/// 先加载表单文件，再用命令行中的文件和页码覆盖
pub async fn build_form(args: &FormArgs) -> Result<UploadForm> {
    let mut form = match &args.form {
        Some(path) => {
            let form_file = load_form_file(path)
                .await
                .with_context(|| format!("无法加载表单文件: {}", path.display()))?;
            UploadForm::from_form_file(&form_file)?
        }
        None => UploadForm::new(),
    };

    if let Some(pdf) = &args.pdf {
        form.select_file(FileKind::Pdf, pdf.clone())?;
    }
    if let Some(excel) = &args.excel {
        form.select_file(FileKind::Spreadsheet, excel.clone())?;
    }

    for (kind, values) in [
        (StatementKind::Income, &args.income),
        (StatementKind::Balance, &args.balance),
        (StatementKind::CashFlow, &args.cash_flow),
    ] {
        if values.is_empty() {
            continue;
        }
        form.replace_pages(kind, values.iter().cloned());
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_flags_override_form_file() {
        let dir = tempfile::tempdir().unwrap();
        let form_path = dir.path().join("form.toml");
        std::fs::write(
            &form_path,
            "pdf = \"a.pdf\"\nexcel = \"a.xlsx\"\n[pages]\nincome = [\"3\"]\nbalance = [\"5\"]\ncash_flow = [\"7\"]\n",
        )
        .unwrap();

        let args = FormArgs {
            form: Some(form_path),
            pdf: Some(PathBuf::from("/data/b.pdf")),
            balance: vec!["8".into(), "9".into()],
            ..Default::default()
        };
        let form = build_form(&args).await.unwrap();

        assert_eq!(form.file_name(FileKind::Pdf), Some("b.pdf"));
        assert_eq!(form.file_name(FileKind::Spreadsheet), Some("a.xlsx"));
        assert_eq!(form.pages(StatementKind::Income).entries(), &["3"]);
        assert_eq!(form.pages(StatementKind::Balance).entries(), &["8", "9"]);
    }

    #[tokio::test]
    async fn test_flags_only() {
        let args = FormArgs {
            excel: Some(PathBuf::from("t.xls")),
            cash_flow: vec!["12".into()],
            ..Default::default()
        };
        let form = build_form(&args).await.unwrap();
        assert!(form.file(FileKind::Pdf).is_none());
        assert_eq!(form.pages(StatementKind::CashFlow).entries(), &["12"]);
    }

    #[test]
    fn test_wrong_file_type_is_an_error() {
        let args = FormArgs {
            pdf: Some(PathBuf::from("report.xlsx")),
            ..Default::default()
        };
        assert!(tokio_test::block_on(build_form(&args)).is_err());
    }
}
