/// Alcove - mirror remote search queries into local folders
use alcove_server_client::{AlcoveClient, ServerConfig};
use alcove_sync::SyncRunner;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;

use config::MirrorConfig;
use error::Result;

#[derive(Parser)]
#[command(name = "alcove")]
#[command(about = "Mirror remote search queries into local folders", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "alcove=info,alcove_sync=info,alcove_server_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = MirrorConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let client = AlcoveClient::new(ServerConfig::new(&config.server.url))?;

    let runner = SyncRunner::new(
        client,
        config.credentials,
        config.target_folder,
        config.queries,
    );

    runner.run().await?;

    Ok(())
}
