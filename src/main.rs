use clap::Parser;
use dog_breeds::utils::logger;
use dog_breeds::{BreedListHandler, CliConfig, HandlerResponse};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting dog breeds CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                "❌ Configuration validation failed: {} (Category: {:?})",
                e,
                e.category()
            );
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let handler = BreedListHandler::from_config(&config);
    let response = handler.handle().await;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    if let HandlerResponse::Error(error) = &response {
        tracing::error!(
            "❌ Invocation failed with {}: {}",
            error.status_code,
            error.message
        );
        std::process::exit(2);
    }

    Ok(())
}
