/// 报表类型枚举
///
/// 序列化名称与后端约定一致：`income` / `balance` / `cashFlow`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum StatementKind {
    /// 利润表
    #[serde(rename = "income")]
    Income,
    /// 资产负债表
    #[serde(rename = "balance")]
    Balance,
    /// 现金流量表
    #[serde(rename = "cashFlow")]
    CashFlow,
}

impl StatementKind {
    /// 全部报表类型，顺序即表单展示顺序
    pub const ALL: [StatementKind; 3] = [
        StatementKind::Income,
        StatementKind::Balance,
        StatementKind::CashFlow,
    ];

    /// 后端使用的键名
    pub fn key(self) -> &'static str {
        match self {
            StatementKind::Income => "income",
            StatementKind::Balance => "balance",
            StatementKind::CashFlow => "cashFlow",
        }
    }

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            StatementKind::Income => "利润表",
            StatementKind::Balance => "资产负债表",
            StatementKind::CashFlow => "现金流量表",
        }
    }

    /// 尝试从字符串解析报表类型
    ///
    /// 同时接受后端键名、常见英文别名和中文名称
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "i" | "利润表" | "利润" => Some(StatementKind::Income),
            "balance" | "b" | "资产负债表" | "资产负债" => Some(StatementKind::Balance),
            "cashflow" | "cash_flow" | "cash-flow" | "c" | "现金流量表" | "现金流" => {
                Some(StatementKind::CashFlow)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(StatementKind::from_str("income"), Some(StatementKind::Income));
        assert_eq!(StatementKind::from_str("cashFlow"), Some(StatementKind::CashFlow));
        assert_eq!(StatementKind::from_str("cash-flow"), Some(StatementKind::CashFlow));
        assert_eq!(StatementKind::from_str("资产负债表"), Some(StatementKind::Balance));
        assert_eq!(StatementKind::from_str("equity"), None);
    }

    #[test]
    fn test_serde_key_matches_backend() {
        let json = serde_json::to_string(&StatementKind::CashFlow).unwrap();
        assert_eq!(json, "\"cashFlow\"");
        for kind in StatementKind::ALL {
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.key());
        }
    }
}
