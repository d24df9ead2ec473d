/// Command line of the demo binary

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use learn_gl::learngl::RendererConfig;

/// Tutorial program to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SceneKind {
    /// Window and clear color only
    #[default]
    HelloWindow,
    /// One orange triangle
    HelloTriangle,
    /// Indexed quad (two triangles sharing an edge)
    HelloRectangle,
    /// Per-vertex colors blended with a time-varying uniform
    Shaders,
    /// Textured quad mixing two images
    Textures,
}

impl SceneKind {
    /// Window title suffix
    pub fn title(&self) -> &'static str {
        match self {
            SceneKind::HelloWindow => "Hello Window",
            SceneKind::HelloTriangle => "Hello Triangle",
            SceneKind::HelloRectangle => "Hello Rectangle",
            SceneKind::Shaders => "Shaders",
            SceneKind::Textures => "Textures",
        }
    }
}

/// LearnOpenGL "getting started" programs
#[derive(Debug, Parser)]
#[command(name = "learn_gl_demo", version, about)]
pub struct Cli {
    /// Program to run
    #[arg(value_enum, default_value_t = SceneKind::HelloWindow)]
    pub scene: SceneKind,

    /// Initial window width
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Directory holding `shaders/` and `textures/`
    #[arg(long, value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// Swap without waiting for vertical sync
    #[arg(long)]
    pub no_vsync: bool,

    /// Rasterize polygons as lines
    #[arg(long)]
    pub wireframe: bool,

    /// Log debug messages
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Window and context configuration for this invocation
    pub fn renderer_config(&self) -> RendererConfig {
        RendererConfig {
            app_name: format!("LearnOpenGL - {}", self.scene.title()),
            width: self.width,
            height: self.height,
            vsync: !self.no_vsync,
            wireframe: self.wireframe,
            ..RendererConfig::default()
        }
    }

    /// Resources directory, defaulting to the one shipped with the crate
    pub fn resources_dir(&self) -> PathBuf {
        self.resources
            .clone()
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources"))
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
