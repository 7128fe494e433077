use anyhow::Result;
use matricula_assinatura::config::DEFAULT_CONFIG_FILE;
use matricula_assinatura::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置：配置文件 + 环境变量
    let config_path =
        std::env::var("MATRICULA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let config = Config::load(&config_path)?;

    // 初始化日志
    logger::init_with_verbose(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config)?.run().await?;

    Ok(())
}
