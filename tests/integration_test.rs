use statement_submit::cli::FormArgs;
use statement_submit::config::Config;
use statement_submit::logger;
use statement_submit::orchestrator::build_form;
use statement_submit::services::ConsoleNotifier;
use statement_submit::{ReqwestTransport, SubmissionController, SubmitOutcome};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::test]
#[ignore] // 默认忽略，需要后端在 SUBMIT_ENDPOINT 运行：cargo test -- --ignored
async fn test_submit_form_file_to_backend() {
    // 初始化日志
    logger::init(true);

    // 加载配置
    let config = Config::from_env();

    // 注意：请根据实际情况修改表单文件路径
    let args = FormArgs {
        form: Some(PathBuf::from("demos/form.toml")),
        ..Default::default()
    };
    let form = build_form(&args).await.expect("加载表单失败");

    let transport = ReqwestTransport::new(&config).expect("创建 HTTP 客户端失败");
    let controller = SubmissionController::new(&config, transport, Arc::new(ConsoleNotifier));

    let outcome = controller.submit(&form).await;

    assert!(
        matches!(outcome, SubmitOutcome::Downloaded(_)),
        "提交应该成功: {:?}",
        outcome
    );
}

#[tokio::test]
#[ignore]
async fn test_backend_rejects_unparsed_pages() {
    logger::init(true);

    let config = Config::from_env();
    let args = FormArgs {
        form: Some(PathBuf::from("demos/form.toml")),
        income: vec!["abc".to_string()],
        ..Default::default()
    };
    let form = build_form(&args).await.expect("加载表单失败");

    let transport = ReqwestTransport::new(&config).expect("创建 HTTP 客户端失败");
    let controller = SubmissionController::new(&config, transport, Arc::new(ConsoleNotifier));

    // 后端校验页码，null 会被拒绝
    assert_eq!(controller.submit(&form).await, SubmitOutcome::Failed);
}

#[test]
fn test_default_config_targets_local_backend() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert!(ReqwestTransport::new(&config).is_ok());
}
