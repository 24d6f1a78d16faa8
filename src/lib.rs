pub mod capture;
pub mod classifier;
pub mod config;
pub mod display;
pub mod emotion;
pub mod hud;
pub mod sampler;
pub mod session;
mod utils;

use anyhow::{Context, Result};

use capture::open_camera;
use classifier::DeepFaceClient;
use config::HudConfig;
use display::WindowSurface;
use session::HudSession;

pub fn run() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("Emotion HUD starting up...");

    let config = HudConfig::default();

    // A missing camera is unrecoverable; there is no fallback source.
    let source = open_camera(config.camera_index)
        .with_context(|| format!("could not open camera {}", config.camera_index))?;

    let classifier = DeepFaceClient::new(
        config.classifier_endpoint.clone(),
        config.classifier_timeout,
    );
    log::info!("classifier endpoint: {}", classifier.endpoint());

    let display = WindowSurface::new(config.window_title.clone());

    let summary = HudSession::new(source, classifier, display, config).run()?;
    log::info!("Emotion HUD exiting: {}", summary.reason);
    Ok(())
}
