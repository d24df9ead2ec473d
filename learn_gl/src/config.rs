/// Renderer configuration shared by the backend and the demo programs

/// Window and context configuration
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Window title
    pub app_name: String,
    /// Initial window width in logical pixels
    pub width: u32,
    /// Initial window height in logical pixels
    pub height: u32,
    /// Requested OpenGL version (major, minor)
    pub gl_version: (u8, u8),
    /// Request a core profile context
    pub core_profile: bool,
    /// Wait for vertical sync when swapping buffers
    pub vsync: bool,
    /// Request a debug context and route driver messages to the engine logger
    pub debug_output: bool,
    /// Show the window on creation
    pub visible: bool,
    /// Color used to clear the back buffer every frame (RGBA)
    pub clear_color: [f32; 4],
    /// Rasterize polygons as lines
    pub wireframe: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            app_name: "LearnOpenGL".to_string(),
            width: 800,
            height: 600,
            gl_version: (3, 3),
            core_profile: true,
            vsync: true,
            debug_output: cfg!(debug_assertions),
            visible: true,
            clear_color: [0.2, 0.3, 0.3, 1.0],
            wireframe: false,
        }
    }
}
