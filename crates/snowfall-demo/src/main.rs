//! Full-window animated snowfall.
//!
//! Opens one window, covers it with a full-screen quad and runs the bundled
//! snow fragment shader, fed each frame with elapsed time and the window's
//! physical resolution.

mod app;

use anyhow::Result;
use winit::dpi::LogicalSize;

use snowfall_engine::device::GpuInit;
use snowfall_engine::logging::{init_logging, LoggingConfig};
use snowfall_engine::scene::ShaderProgram;
use snowfall_engine::window::{Runtime, RuntimeConfig};

use crate::app::SnowApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title:        "Snow".to_string(),
        initial_size: LogicalSize::new(1280.0, 720.0),
    };

    log::info!("starting snowfall ({})", env!("CARGO_PKG_VERSION"));

    Runtime::run(config, GpuInit::default(), SnowApp::new(ShaderProgram::snow()))
}
