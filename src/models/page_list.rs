//! 页码列表
//!
//! 每类报表一个有序列表，元素为用户输入的原始文本，提交时才解析为整数

use std::num::IntErrorKind;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::FormError;
use crate::models::statement::StatementKind;

/// 单类报表的页码列表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageList {
    kind: StatementKind,
    entries: Vec<String>,
}

impl PageList {
    pub fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    pub fn with_entries<I, S>(kind: StatementKind, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 追加一个空白项，返回其索引
    pub fn append(&mut self) -> usize {
        self.entries.push(String::new());
        self.entries.len() - 1
    }

    /// 修改指定位置的页码，其他项不变
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<(), FormError> {
        let len = self.entries.len();
        let slot = self.entries.get_mut(index).ok_or(FormError::IndexOutOfRange {
            kind: self.kind,
            index,
            len,
        })?;
        *slot = value.into();
        Ok(())
    }

    /// 删除指定位置的页码，后续项前移
    pub fn remove(&mut self, index: usize) -> Result<String, FormError> {
        if index >= self.entries.len() {
            return Err(FormError::IndexOutOfRange {
                kind: self.kind,
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// 把全部项解析为整数，无法解析的项为 `None`
    pub fn parsed(&self) -> Vec<Option<i64>> {
        self.entries.iter().map(|s| parse_page_number(s)).collect()
    }

    /// 严格解析：任何一项不是正整数就报错
    pub fn parsed_strict(&self) -> Result<Vec<i64>, FormError> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, raw)| match parse_page_number(raw) {
                Some(n) if n >= 1 => Ok(n),
                _ => Err(FormError::InvalidPageNumber {
                    kind: self.kind,
                    index,
                    value: raw.clone(),
                }),
            })
            .collect()
    }
}

fn leading_integer() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("valid regex"))
}

/// 尽力解析页码：忽略前导空白，取开头的十进制整数部分
///
/// `"12"` → 12，`" 7 "` → 7，`"12abc"` → 12，`"abc"` / `""` → None。
/// 只认 ASCII 数字；超出 i64 范围的值截断到 `i64::MAX` / `i64::MIN`
pub fn parse_page_number(raw: &str) -> Option<i64> {
    let caps = leading_integer().captures(raw)?;
    match caps.get(1)?.as_str().parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
