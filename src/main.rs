use dioxus_logger::tracing;
use einhorn::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialise logger: {}", e);
    }

    match startup::run(&config).await {
        Ok(db) => {
            tracing::info!("Einhorn schema is up to date");
            if let Err(e) = db.close().await {
                tracing::warn!("Failed to close database connection: {}", e);
            }
        }
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}
