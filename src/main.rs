use anyhow::Result;
use clap::Parser;
use tracing::error;

use statement_submit::cli::Cli;
use statement_submit::{logger, App, Config};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // 加载配置，命令行参数优先
    let mut config = Config::from_env();
    cli.apply(&mut config);

    // 初始化日志
    logger::init(config.verbose_logging);

    match run(cli, config).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            error!(error = %err, "command failed");
            for cause in err.chain().skip(1) {
                error!(cause = %cause, "caused by");
            }
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli, config: Config) -> Result<bool> {
    let app = App::initialize(config)?;
    app.run(cli.command).await
}
