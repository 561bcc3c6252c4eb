//! 用户通知 - 业务能力层
//!
//! 只负责"把结果告诉用户"，不关心流程

use std::sync::Mutex;

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// 前置条件不满足，需要用户先修改表单
    Blocking,
    /// 处理失败
    Failure,
    /// 处理成功
    Success,
}

/// 面向用户的通知
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// 终端通知：成功写 stdout，其余写 stderr
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Success => println!("✅ {}", message),
            NoticeLevel::Failure => eprintln!("❌ {}", message),
            NoticeLevel::Blocking => eprintln!("⚠️ {}", message),
        }
    }
}

/// 记录所有通知，便于在测试或上层流程中检查
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取出目前为止的全部通知
    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    pub fn last_level(&self) -> Option<NoticeLevel> {
        self.notices().last().map(|(level, _)| *level)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push((level, message.to_string()));
        }
    }
}
