/*!
# LearnOpenGL - OpenGL Renderer Backend

OpenGL 3.3 core implementation of the learn_gl `GraphicsDevice` trait.

GL entry points come from `glow`; the window and context are created with
`glutin` on top of `winit`.

```no_run
use learn_gl::learngl::RendererConfig;
use learn_gl_renderer_opengl::learngl::GlWindowContext;
# fn resumed(event_loop: &winit::event_loop::ActiveEventLoop) -> learn_gl::learngl::Result<()> {
let context = GlWindowContext::new(event_loop, &RendererConfig::default())?;
let device = context.device();
# let _ = device;
# Ok(())
# }
```
*/

mod opengl_convert;
mod opengl_device;
mod gl_context;
mod debug;

pub use opengl_device::OpenGLDevice;
pub use gl_context::GlWindowContext;

pub use debug::{gl_debug_stats, print_gl_debug_report, reset_gl_debug_stats, GlDebugStats};

/// Backend types under the shared `learngl` namespace
pub mod learngl {
    pub use crate::gl_context::GlWindowContext;
    pub use crate::opengl_device::OpenGLDevice;
}
