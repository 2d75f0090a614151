use clap::Parser;
use club_cards::core::ConfigProvider;
use club_cards::sheets::SheetsClient;
use club_cards::utils::{logger, validation::Validate};
use club_cards::{CardPipeline, CliConfig, Engine, LocalStorage, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting club-cards");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Some(path) = cli.config.clone() {
        let config = TomlConfig::from_file(&path)?;
        run(config).await
    } else {
        run(cli).await
    }
}

async fn run<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let sheets = SheetsClient::new(config.base_url(), config.api_key());
    let pipeline = CardPipeline::new(sheets, storage, config);
    let engine = Engine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Club cards page rendered successfully!");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Rendering failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
