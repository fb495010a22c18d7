use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{error, info, warn};

use mobile_bff::config::AppConfig;
use mobile_bff::infrastructure::{
    init_logging, BankDataServiceTrait, HttpBankDataService, InMemoryBankDataService,
};
use mobile_bff::web::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _guards = init_logging(None)?;

    info!("Starting mobile BFF service");
    let config = AppConfig::from_env();

    let bank_data: Arc<dyn BankDataServiceTrait> = match &config.bank_data_url {
        Some(base_url) => {
            info!("Using upstream bank data service at {}", base_url);
            Arc::new(HttpBankDataService::new(
                base_url,
                Duration::from_secs(config.bank_data_timeout_secs),
            )?)
        }
        None => {
            warn!("BANK_DATA_URL not set, serving in-memory demo accounts");
            Arc::new(InMemoryBankDataService::with_demo_accounts())
        }
    };

    let app = create_router(bank_data);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Mobile BFF listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Mobile BFF stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => error!("failed to listen for shutdown signal: {}", e),
    }
}
