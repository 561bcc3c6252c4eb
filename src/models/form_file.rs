use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::statement::StatementKind;

/// 表单描述文件（TOML）
///
/// ```toml
/// pdf = "annual_report_2024.pdf"
/// excel = "template.xlsx"
///
/// [pages]
/// income = ["3"]
/// balance = [5, 6]
/// cash_flow = ["7"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormFile {
    #[serde(default)]
    pub pdf: Option<PathBuf>,
    #[serde(default)]
    pub excel: Option<PathBuf>,
    #[serde(default)]
    pub pages: FormPages,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<PathBuf>,
}

/// 表单描述文件中的页码部分
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormPages {
    #[serde(default, deserialize_with = "deserialize_entries")]
    pub income: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_entries")]
    pub balance: Vec<String>,
    #[serde(default, alias = "cashFlow", deserialize_with = "deserialize_entries")]
    pub cash_flow: Vec<String>,
}

impl FormPages {
    pub fn get(&self, kind: StatementKind) -> &[String] {
        match kind {
            StatementKind::Income => &self.income,
            StatementKind::Balance => &self.balance,
            StatementKind::CashFlow => &self.cash_flow,
        }
    }
}

// 页码既可以写成字符串也可以写成整数，统一保留为原始文本
fn deserialize_entries<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct EntryVisitor;

    impl<'de> Visitor<'de> for EntryVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer page number")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    struct Entry(String);

    impl<'de> Deserialize<'de> for Entry {
        fn deserialize<D2>(deserializer: D2) -> Result<Self, D2::Error>
        where
            D2: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(EntryVisitor).map(Entry)
        }
    }

    let entries: Vec<Entry> = Vec::deserialize(deserializer)?;
    Ok(entries.into_iter().map(|e| e.0).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_page_entries() {
        let form: FormFile = toml::from_str(
            r#"
            pdf = "report.pdf"
            excel = "template.xlsx"

            [pages]
            income = ["3"]
            balance = [5, "6"]
            cashFlow = ["7"]
            "#,
        )
        .unwrap();

        assert_eq!(form.pdf, Some(PathBuf::from("report.pdf")));
        assert_eq!(form.pages.income, vec!["3"]);
        assert_eq!(form.pages.balance, vec!["5", "6"]);
        assert_eq!(form.pages.get(StatementKind::CashFlow), &["7".to_string()]);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let form: FormFile = toml::from_str(r#"pdf = "report.pdf""#).unwrap();
        assert!(form.excel.is_none());
        assert!(form.pages.income.is_empty());
    }
}
