use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use stylevision_generator::GeneratorConfig;
use stylevision_store::StoreConfig;

#[derive(Debug, Parser)]
#[command(name = "stylevision-server", about = "StyleVision product entry server")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "STYLEVISION_BIND", default_value = "127.0.0.1")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "STYLEVISION_PORT", default_value_t = 8501)]
    pub port: u16,

    /// Base directory for images and the product catalog
    #[arg(long, env = "STYLEVISION_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Catalog CSV file (default: <data-dir>/ecommerce/final_output.csv)
    #[arg(long, env = "STYLEVISION_CSV_PATH")]
    pub csv_path: Option<PathBuf>,

    /// Image directory (default: <data-dir>/img)
    #[arg(long, env = "STYLEVISION_IMAGE_DIR")]
    pub image_dir: Option<PathBuf>,

    #[command(flatten)]
    pub generator: GeneratorConfig,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            data_dir: self.data_dir.clone(),
            image_dir: self.image_dir.clone(),
            csv_path: self.csv_path.clone(),
        }
    }
}
