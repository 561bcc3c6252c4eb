use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "statement-submit",
    version,
    about = "上传年报 PDF 与 Excel 模板，按报表页码提交给后端提取并保存结果"
)]
pub struct Cli {
    /// 后端处理接口地址（覆盖 SUBMIT_ENDPOINT）
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// 结果文件保存目录（覆盖 DOWNLOAD_DIR）
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// 页码无法解析为正整数时拒绝提交
    #[arg(long, global = true)]
    pub strict: bool,

    /// 显示详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// 填写表单并提交一次
    Submit(FormArgs),
    /// 只检查表单并打印将要发送的页码，不发请求
    Check(FormArgs),
    /// 交互式编辑表单
    Interactive(InteractiveArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct FormArgs {
    /// 表单描述文件（TOML）
    #[arg(long)]
    pub form: Option<PathBuf>,

    /// PDF 文件
    #[arg(long)]
    pub pdf: Option<PathBuf>,

    /// Excel 文件（.xlsx / .xls）
    #[arg(long)]
    pub excel: Option<PathBuf>,

    /// 利润表页码，可重复
    #[arg(long = "income", value_name = "PAGE", allow_hyphen_values = true)]
    pub income: Vec<String>,

    /// 资产负债表页码，可重复
    #[arg(long = "balance", value_name = "PAGE", allow_hyphen_values = true)]
    pub balance: Vec<String>,

    /// 现金流量表页码，可重复
    #[arg(long = "cash-flow", value_name = "PAGE", allow_hyphen_values = true)]
    pub cash_flow: Vec<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct InteractiveArgs {
    /// 用表单描述文件预先填充
    #[arg(long)]
    pub form: Option<PathBuf>,
}

impl Cli {
    /// 命令行参数覆盖环境变量配置
    pub fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint_url = endpoint.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.download_dir = dir.clone();
        }
        if self.strict {
            config.strict_page_numbers = true;
        }
        if self.verbose {
            config.verbose_logging = true;
        }
    }
}
