mod screens;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use trivet_core::{ApiClient, ApiConfig, NetworkClient};

#[derive(Parser)]
#[command(name = "trivet")]
#[command(about = "Recipe viewer and admin dashboard client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a single recipe
    Recipe {
        /// Recipe identifier (the `_id` a share link carries)
        #[arg(long)]
        id: String,
        /// Backend URL (default: $TRIVET_API_URL or the public backend)
        #[arg(long)]
        server: Option<String>,
    },
    /// Show the admin dashboard
    Dashboard {
        /// Admin username
        #[arg(long)]
        username: String,
        /// Admin password
        #[arg(long)]
        password: String,
        /// Backend URL (default: $TRIVET_API_URL or the public backend)
        #[arg(long)]
        server: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recipe { id, server } => {
            let api = api_client(server.as_deref())?;
            screens::recipe(&api, &id).await;
        }
        Commands::Dashboard {
            username,
            password,
            server,
        } => {
            let api = api_client(server.as_deref())?;
            screens::dashboard(&api, &username, &password).await;
        }
    }

    Ok(())
}

fn api_client(server: Option<&str>) -> Result<ApiClient> {
    let mut config = ApiConfig::from_env()?;
    if let Some(server) = server {
        config.set_base_url(server)?;
    }

    let http = NetworkClient::new()?;
    Ok(ApiClient::new(config, Arc::new(http)))
}
