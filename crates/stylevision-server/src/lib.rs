pub mod config;
mod routes;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;

use anyhow::Result;
use stylevision_service::LocalService;
use tokio::net::TcpListener;

use config::ServerConfig;

/// Wire the image store, catalog and text generator into a service.
pub fn build_service(config: &ServerConfig) -> Result<LocalService> {
    let store_config = config.store_config();
    let images = stylevision_store::create_store(&store_config);
    let catalog = stylevision_store::create_catalog(&store_config)?;
    let generator = stylevision_generator::build_generator(&config.generator)?;
    tracing::info!(
        images = %store_config.image_dir().display(),
        catalog = %store_config.csv_path().display(),
        "stores ready"
    );
    Ok(LocalService::new(images, catalog, generator))
}

pub async fn serve(listener: TcpListener, service: LocalService) -> Result<()> {
    let app = routes::build_router(service);
    axum::serve(listener, app).await?;
    Ok(())
}
