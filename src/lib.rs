//! # Statement Submit
//!
//! 财务报表提取的上传客户端：选择年报 PDF 与 Excel 模板，
//! 为利润表、资产负债表、现金流量表分别填写页码，提交给后端处理并保存结果文件。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有 HTTP 客户端，只暴露"发送一次提交"的能力
//! - `ReqwestTransport` - multipart POST 的唯一实现
//!
//! ### ② 业务能力层（Services）
//! - `UploadForm` - 文件槽位、页码列表、处理中标志
//! - `DownloadWriter` - 以固定文件名保存结果
//! - `Notifier` - 面向用户的提示
//!
//! ### ③ 流程层（Workflow）
//! - `SubmissionController` - 检查 → 转换页码 → 发送 → 保存 / 提示
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 命令分发与表单构建
//! - `orchestrator/interactive` - 交互式表单编辑

pub mod cli;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, Result};
pub use infrastructure::{ReqwestTransport, Transport, TransportResponse};
pub use models::{FileKind, StatementKind, StatementPages, SubmissionRequest};
pub use orchestrator::App;
pub use services::UploadForm;
pub use workflow::{SubmissionController, SubmitOutcome};
