use std::path::PathBuf;

use crate::error::ConfigError;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 后端处理接口地址
    pub endpoint_url: String,
    /// 结果文件保存目录
    pub download_dir: PathBuf,
    /// 结果文件名（固定）
    pub download_file_name: String,
    /// 页码无法解析时是否拒绝提交
    pub strict_page_numbers: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: "http://localhost:5000/process".to_string(),
            download_dir: PathBuf::from("."),
            download_file_name: "processed_financial_statements.xlsx".to_string(),
            strict_page_numbers: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            endpoint_url: std::env::var("SUBMIT_ENDPOINT").unwrap_or(default.endpoint_url),
            download_dir: std::env::var("DOWNLOAD_DIR").map(PathBuf::from).unwrap_or(default.download_dir),
            download_file_name: std::env::var("DOWNLOAD_FILE_NAME").unwrap_or(default.download_file_name),
            strict_page_numbers: std::env::var("STRICT_PAGE_NUMBERS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.strict_page_numbers),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 检查端点地址是否可用
    pub fn validate(&self) -> Result<(), ConfigError> {
        match reqwest::Url::parse(&self.endpoint_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            _ => Err(ConfigError::InvalidEndpoint(self.endpoint_url.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.endpoint_url, "http://localhost:5000/process");
        assert_eq!(config.download_dir, PathBuf::from("."));
        assert_eq!(
            config.download_file_name,
            "processed_financial_statements.xlsx"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_http() {
        let config = Config {
            endpoint_url: "ftp://example.com/process".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            endpoint_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
