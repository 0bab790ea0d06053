mod app_state;
mod application;
mod cli;
mod headless;
mod logging;
mod scene;

use std::process::ExitCode;

use winit::event_loop::EventLoop;

use glex_config::GlexConfig;

fn main() -> ExitCode {
    let args = cli::parse();

    let log = logging::init(args.log_level.as_deref());
    tracing::info!("glex v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = glex_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        GlexConfig::default()
    });
    log.apply_config_level(config.logging.level);

    if args.print_config {
        println!("{}", glex_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    if args.headless {
        return match headless::run(&config, args.frames) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("Headless run failed: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let scene = match scene::Scene::from_config(&config) {
        Ok(scene) => scene,
        Err(e) => {
            tracing::error!("Failed to build scene: {e}");
            return ExitCode::FAILURE;
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::GlexApp::new(config, scene);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");

    if app.failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
