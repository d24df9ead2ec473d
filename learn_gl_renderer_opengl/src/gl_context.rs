/// Window + OpenGL context creation with glutin
///
/// Builds, in order: the winit window together with a matching GL config,
/// a 3.3 core context, the window surface; then makes the context current,
/// loads the GL entry points and wraps them in an `OpenGLDevice`.

use std::num::NonZeroU32;
use std::rc::Rc;

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use learn_gl::learngl::{Error, GraphicsDevice, RendererConfig, Result};
use learn_gl::{engine_debug, engine_err, engine_report, engine_warn};

use crate::OpenGLDevice;

const SOURCE: &str = "learngl::opengl::context";

fn init_error(what: &str, error: impl std::fmt::Display) -> Error {
    engine_report!(SOURCE, Error::InitializationFailed(format!("{}: {}", what, error)))
}

/// Window, surface, context and device, dropped in that reverse order
///
/// Field order matters: the device (and every GPU object holding it) must be
/// released while the context is still alive.
pub struct GlWindowContext {
    device: Rc<OpenGLDevice>,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl GlWindowContext {
    /// Create the window and a current OpenGL context
    ///
    /// # Errors
    ///
    /// `Error::InitializationFailed` when no suitable config exists, or the
    /// window, context or surface cannot be created.
    pub fn new(event_loop: &ActiveEventLoop, config: &RendererConfig) -> Result<Self> {
        let window_attributes = Window::default_attributes()
            .with_title(config.app_name.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_visible(config.visible);

        let template = ConfigTemplateBuilder::new().with_alpha_size(8).with_depth_size(24);
        let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attributes));
        let (window, gl_config) = display_builder
            .build(event_loop, template, pick_config)
            .map_err(|e| init_error("no suitable GL config", e))?;
        let window = window.ok_or_else(|| init_error("window creation", "display builder returned no window"))?;
        engine_debug!(
            SOURCE,
            "GL config: alpha {} bits, depth {} bits, {} samples",
            gl_config.alpha_size(),
            gl_config.depth_size(),
            gl_config.num_samples()
        );

        let raw_window_handle = window
            .window_handle()
            .map_err(|e| init_error("window handle", e))?
            .as_raw();
        let (major, minor) = config.gl_version;
        let profile = if config.core_profile { GlProfile::Core } else { GlProfile::Compatibility };
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(profile)
            .with_debug(config.debug_output)
            .build(Some(raw_window_handle));

        let gl_display = gl_config.display();
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .map_err(|e| init_error("OpenGL context creation", e))?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(|e| init_error("surface attributes", e))?;
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(|e| init_error("window surface creation", e))?;

        let context = not_current
            .make_current(&surface)
            .map_err(|e| init_error("make context current", e))?;

        let interval = if config.vsync { SwapInterval::Wait(NonZeroU32::MIN) } else { SwapInterval::DontWait };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            engine_warn!(SOURCE, "Could not set swap interval: {}", e);
        }

        let gl = unsafe { glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name)) };
        let device = Rc::new(unsafe { OpenGLDevice::new(gl, config) });
        let size = window.inner_size();
        device.viewport(0, 0, size.width, size.height);

        Ok(Self { device, surface, context, window })
    }

    /// The window
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Concrete device
    pub fn opengl_device(&self) -> &Rc<OpenGLDevice> {
        &self.device
    }

    /// Device as the core trait object
    pub fn device(&self) -> Rc<dyn GraphicsDevice> {
        self.device.clone()
    }

    /// Resize the surface and the viewport (ignored for zero sizes)
    pub fn resize(&self, width: u32, height: u32) {
        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.surface.resize(&self.context, w, h);
            self.device.viewport(0, 0, width, height);
        }
    }

    /// Present the back buffer
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(|e| engine_err!(SOURCE, "swap_buffers failed: {}", e))
    }
}

/// Prefer the config with the most samples
///
/// glutin reports an empty match set as an error from `DisplayBuilder::build`
/// (mapped to `InitializationFailed` above), so the picker always receives at
/// least one config. The picker signature returns a bare `Config`.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, candidate| if candidate.num_samples() > best.num_samples() { candidate } else { best })
        .expect("glutin yields at least one matching config")
}
