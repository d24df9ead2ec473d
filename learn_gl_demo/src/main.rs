//! LearnOpenGL demo
//!
//! ```text
//! learn_gl_demo [SCENE] [--width W] [--height H] [--resources DIR] [--no-vsync] [--wireframe] [--verbose]
//! ```
//!
//! Exits with 0 on a normal close and -1 when the window, the context or the
//! GL function loader cannot be created.

mod app;
mod cli;
mod scenes;

use clap::Parser;
use learn_gl::engine_error;
use learn_gl::learngl::log::LogSeverity;
use learn_gl::learngl::Engine;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::app::{LearnGlApp, EXIT_INIT_FAILURE};
use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if cli.verbose {
        Engine::set_min_severity(LogSeverity::Debug);
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            engine_error!("learngl::demo", "Failed to create event loop: {}", e);
            std::process::exit(EXIT_INIT_FAILURE);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = LearnGlApp::new(cli.renderer_config(), cli.scene, cli.resources_dir());
    if let Err(e) = event_loop.run_app(&mut app) {
        engine_error!("learngl::demo", "Event loop terminated abnormally: {}", e);
        std::process::exit(EXIT_INIT_FAILURE);
    }
    std::process::exit(app.exit_code());
}
