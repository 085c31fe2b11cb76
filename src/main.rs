use stockwatch::infrastructure::bootstrap::build_alert_job;
use stockwatch::infrastructure::config::logging::LoggingConfig;
use stockwatch::infrastructure::config::settings::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    LoggingConfig::from_env().init();
    info!("stockwatch starting");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Configuration is incomplete, nothing to do");
            return;
        }
    };

    let job = build_alert_job(&config);
    let outcome = job.run().await;

    info!(outcome = %outcome, "stockwatch finished");
}
