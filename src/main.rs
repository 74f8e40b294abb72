use swasthya::api::{start_api_server, ApiContext};
use swasthya::config::{self, AppConfig};
use swasthya::pipeline::completion::OpenAiClient;
use swasthya::pipeline::processor::HealthQueryProcessor;
use swasthya::pipeline::reference::MedlinePlusClient;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = AppConfig::from_env();

    let reference = MedlinePlusClient::new(
        &config.health_api_base_url,
        config.health_api_key.clone(),
    );
    let generator = OpenAiClient::new(config.openai_api_key.clone());
    let ctx = ApiContext::new(HealthQueryProcessor::new(reference, generator));

    let mut server = start_api_server(ctx, &config.bind_addr, &config.allowed_origins).await?;
    tracing::info!(addr = %server.session.server_addr, "Serving health query API");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown requested");
    server.shutdown();

    Ok(())
}
