/// Analysis Service - derives name and email reports from directory users
use analysis_service::{config::ServiceConfig, create_router, state::AppState, UserProcessor};
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userhub_core::UserId;

#[derive(Parser)]
#[command(name = "analysis-service")]
#[command(about = "Userhub user analysis service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Analyze one user and print the report as JSON
    Analyze {
        /// User ID in the directory
        id: String,
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "analysis_service=info,userhub_directory_client=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Analyze { id, config } => {
            analyze(&id, config).await?;
        }
    }

    Ok(())
}

fn load_config(config_path: Option<PathBuf>) -> anyhow::Result<ServiceConfig> {
    let config = ServiceConfig::load(config_path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting analysis service");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let processor = UserProcessor::from_config(&config)?;
    tracing::info!(
        "Directory service at {} (timeout {}s)",
        processor.directory_url(),
        config.directory.timeout_secs
    );

    let app = create_router(AppState::new(Arc::new(processor)));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn analyze(id: &str, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let processor = UserProcessor::from_config(&config)?;

    let analysis = processor.process_user(&UserId::new(id)).await?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);

    Ok(())
}
