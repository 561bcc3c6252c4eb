//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责把命令行输入变成表单，并驱动提交流程。
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 管理 HTTP 传输层与通知方式
//! - 从表单文件 / 命令行参数构建表单
//! - 分发 submit / check / interactive 命令
//!
//! ### `interactive` - 交互式编辑器
//! - 解析一行命令
//! - 作用到 UploadForm 上
//! - 渲染表单的文本视图
//!
//! ## 层次关系
//!
//! ```text
//! app / interactive (处理用户输入)
//!     ↓
//! workflow::SubmissionController (处理一次提交)
//!     ↓
//! services (能力层：form / download / notify)
//!     ↓
//! infrastructure (基础设施：Transport)
//! ```

pub mod app;
pub mod interactive;

// 重新导出主要类型
pub use app::{build_form, App};
pub use interactive::{apply_command, parse_command, render_form, EditorAction, EditorCommand};
