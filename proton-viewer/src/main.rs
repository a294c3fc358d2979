//! Proton viewer - desktop frontend for the Proton engine.
//!
//! Usage: `proton-viewer [config.json]`

mod app;
mod input;
mod painter;

use std::fmt;

use eframe::egui;
use proton::{ConfigError, ProtonConfig};

#[derive(Debug)]
enum ViewerError {
    Config(ConfigError),
    Eframe(eframe::Error),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::Config(e) => write!(f, "{}", e),
            ViewerError::Eframe(e) => write!(f, "Viewer failed: {}", e),
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewerError::Config(e) => Some(e),
            ViewerError::Eframe(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ViewerError {
    fn from(e: ConfigError) -> Self {
        ViewerError::Config(e)
    }
}

impl From<eframe::Error> for ViewerError {
    fn from(e: eframe::Error) -> Self {
        ViewerError::Eframe(e)
    }
}

fn load_config() -> Result<ProtonConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading config from {}", path);
            ProtonConfig::load(path)
        }
        None => Ok(ProtonConfig::default()),
    }
}

fn run() -> Result<(), ViewerError> {
    let config = load_config()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.screen.width, config.screen.height])
            .with_resizable(false)
            .with_title("Proton"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Proton",
        options,
        Box::new(|_cc| Ok(Box::new(app::ViewerApp::new(config)))),
    )?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
