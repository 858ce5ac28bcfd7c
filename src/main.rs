//=========================================================================
// Flappy: Binary Entry Point
//=========================================================================

use std::process::ExitCode;

use flappy_engine::core::render::HeadlessCanvas;
use flappy_engine::EngineBuilder;
use log::error;

/// Directory the asset paths are resolved against.
const RESOURCE_ROOT: &str = "resources";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match EngineBuilder::new().build().run(HeadlessCanvas::new(RESOURCE_ROOT)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal: {}", e);
            eprintln!("flappy: {}", e);
            ExitCode::from(2)
        }
    }
}
