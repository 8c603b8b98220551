//! XCO2 dashboard HTTP server binary.
//!
//! # Usage
//!
//! ```bash
//! # Serve with the default configuration (data/ directory, epoch-second files)
//! cargo run --bin xco2view-server
//!
//! # Serve a configured variant, with the real NetCDF reader
//! XCO2VIEW_CONFIG=config.toml \
//!   cargo run --bin xco2view-server --features netcdf-files
//! ```
//!
//! # Environment Variables
//!
//! - `XCO2VIEW_CONFIG`: Path to the TOML configuration (optional)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use xco2view::http::{create_router, AppState};
use xco2view::{DashboardConfig, DashboardService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let config = match env::var("XCO2VIEW_CONFIG") {
        Ok(path) => DashboardConfig::load(&PathBuf::from(path))?,
        Err(_) => DashboardConfig::default(),
    };
    info!(title = %config.title, data_dir = %config.catalog.data_dir.display(), "starting XCO2 dashboard");

    let service = Arc::new(DashboardService::new(config));
    if service.catalog().is_empty() {
        info!("no data files found; the page will show an empty selection");
    } else {
        info!(files = service.catalog().files().len(), "catalog scanned");
    }

    let state = AppState::new(service);
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    info!("server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
