use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use stylevision_generator::{MockGenerator, TextGenerator};
use stylevision_service::LocalService;
use stylevision_store::StoreConfig;
use tokio::net::TcpListener;

/// Build a test router over a fresh temp data directory. Returns the router
/// and the data directory so tests can inspect the files written.
pub fn test_router(generator: Arc<dyn TextGenerator>) -> (Router, PathBuf) {
    let data_dir = tempfile::tempdir().unwrap().keep();
    let store_config = StoreConfig::with_data_dir(&data_dir);
    let images = stylevision_store::create_store(&store_config);
    let catalog = stylevision_store::create_catalog(&store_config).unwrap();
    let service = LocalService::new(images, catalog, generator);
    (crate::routes::build_router(service), data_dir)
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    pub data_dir: PathBuf,
    _handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub fn csv_path(&self) -> PathBuf {
        StoreConfig::with_data_dir(&self.data_dir).csv_path()
    }

    pub fn image_dir(&self) -> PathBuf {
        StoreConfig::with_data_dir(&self.data_dir).image_dir()
    }
}

/// Spawn an axum test server on a random port with a generator that always
/// succeeds.
pub async fn spawn_test_server() -> TestServer {
    spawn_test_server_with(Arc::new(MockGenerator::success(
        "A flowing silk wrap dress in rich red.",
    )))
    .await
}

/// Spawn an axum test server on a random port with the given generator.
pub async fn spawn_test_server_with(generator: Arc<dyn TextGenerator>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let (app, data_dir) = test_router(generator);
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base_url,
        data_dir,
        _handle: handle,
    }
}
