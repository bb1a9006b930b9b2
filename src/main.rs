use clap::Parser;
use vacancy_feed::utils::{logger, validation::Validate};
use vacancy_feed::{FeedConfig, FeedPipeline};

#[tokio::main]
async fn main() {
    let config = FeedConfig::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting vacancy-feed");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let pipeline = FeedPipeline::new(config);

    match pipeline.run().await {
        Ok(path) => {
            tracing::info!("Export completed successfully");
            println!("✅ Feed written to {}", path.display());
        }
        Err(e) => {
            tracing::error!("Pipeline aborted: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
