use clap::Parser;
use distance_lambda::utils::{logger, validation::Validate};
use distance_lambda::{body_text, handle_request, request_with_origin, CliConfig, DistanceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    let config = DistanceConfig::from(&cli);
    if cli.verbose {
        tracing::debug!("Distance config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 模擬一次 API Gateway 調用
    let request = request_with_origin(cli.origin.clone());
    let client = reqwest::Client::new();
    let response = handle_request(&config, &client, &request).await;

    println!("{}", body_text(&response));

    if response.status_code != 200 {
        eprintln!("❌ HTTP {}", response.status_code);
        std::process::exit(match response.status_code {
            404 => 2,
            _ => 1,
        });
    }

    Ok(())
}
