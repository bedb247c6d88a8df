use std::path::Path;

use atrium_engine::device::SurfaceInit;
use atrium_engine::logging::{init_logging, LoggingConfig};
use atrium_engine::window::{Runtime, RuntimeConfig};

fn main() {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Atrium".to_string(),
        asset_root: Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"),
        ..RuntimeConfig::default()
    };

    log::info!("assets: {}", config.asset_root.display());
    println!("  drag with the left mouse button to orbit, scroll to zoom, 1 toggles wireframe");

    if let Err(err) = Runtime::run(config, SurfaceInit::default()) {
        log::error!("{err:#}");
        eprintln!("atrium: {err:#}");
        std::process::exit(1);
    }
}
