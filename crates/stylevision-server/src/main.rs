use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use stylevision_server::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    let service = stylevision_server::build_service(&config)?;

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    info!("stylevision-server listening on http://{addr}");

    stylevision_server::serve(listener, service).await?;
    Ok(())
}
