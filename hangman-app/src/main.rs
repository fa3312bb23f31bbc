use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hangman_app::{app::App, bootstrap::open_store, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they don't interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Hangman...");

    let config = Config::from_env()?;
    let store = open_store(&config).await?;

    let mut app = App::new(
        store.clone(),
        &config,
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    );
    let result = app.run().await;
    drop(app);

    store.close().await?;
    info!("Hangman shutdown complete.");
    result
}
