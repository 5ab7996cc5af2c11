// src/main.rs
use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::fmt::init as tracing_init;

use product_store::cli::{self, Cli};
use product_store::client::ProductClient;
use product_store::config::Config;
use product_store::store::ProductStore;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env();

    let client = match ProductClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            std::process::exit(1);
        }
    };
    let mut store = ProductStore::new(client);

    if let Err(e) = cli::run(cli, &mut store).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
