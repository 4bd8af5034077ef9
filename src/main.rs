use dex::config::Config;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<(), dex::Error> {
    // Load .env first so RUST_LOG from it is honoured
    dotenv().ok();

    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dex=debug,warn")),
        )
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_target(true)
        .with_ansi(true)
        .pretty()
        .init();

    let config = Config::from_env().inspect_err(|e| error!("{}", e))?;

    info!("Starting bot with prefix {}", config.prefix);
    dex::run(config).await
}
