/// winit application driving one scene
///
/// Lifecycle: `resumed` creates the window, context and scene once; every
/// `RedrawRequested` clears, renders the scene, swaps and asks for the next
/// frame. Escape or closing the window ends the loop.

use std::path::PathBuf;
use std::time::Instant;

use learn_gl::learngl::render::ClearFlags;
use learn_gl::learngl::{RendererConfig, Result};
use learn_gl::{engine_error, engine_info};
use learn_gl_renderer_opengl::learngl::GlWindowContext;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use crate::cli::SceneKind;
use crate::scenes::{build_scene, Scene};

const SOURCE: &str = "learngl::demo";

/// Process exit code for window/context creation failures
pub const EXIT_INIT_FAILURE: i32 = -1;
/// Process exit code for scene or frame failures
pub const EXIT_RUNTIME_FAILURE: i32 = 1;

pub struct LearnGlApp {
    config: RendererConfig,
    scene_kind: SceneKind,
    resources: PathBuf,
    // Declared before the context: GPU objects go first.
    scene: Option<Box<dyn Scene>>,
    context: Option<GlWindowContext>,
    start_time: Instant,
    frame_count: u64,
    exit_code: i32,
}

impl LearnGlApp {
    pub fn new(config: RendererConfig, scene_kind: SceneKind, resources: PathBuf) -> Self {
        Self {
            config,
            scene_kind,
            resources,
            scene: None,
            context: None,
            start_time: Instant::now(),
            frame_count: 0,
            exit_code: 0,
        }
    }

    /// Code the process should exit with
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, code: i32) {
        self.exit_code = code;
        event_loop.exit();
    }

    fn render_frame(&mut self) -> Result<()> {
        let (Some(context), Some(scene)) = (&self.context, &self.scene) else {
            return Ok(());
        };
        context.device().clear(ClearFlags::COLOR, self.config.clear_color);
        scene.render(self.start_time.elapsed().as_secs_f32())?;
        context.swap_buffers()?;
        self.frame_count += 1;
        context.window().request_redraw();
        Ok(())
    }
}

impl ApplicationHandler for LearnGlApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.context.is_some() {
            return;
        }

        let context = match GlWindowContext::new(event_loop, &self.config) {
            Ok(context) => context,
            Err(_) => return self.fail(event_loop, EXIT_INIT_FAILURE),
        };
        match build_scene(self.scene_kind, context.device(), &self.resources) {
            Ok(scene) => self.scene = Some(scene),
            Err(e) => {
                engine_error!(SOURCE, "Scene '{}' could not be built: {}", self.scene_kind.title(), e);
                self.context = Some(context);
                return self.fail(event_loop, EXIT_RUNTIME_FAILURE);
            }
        }

        context.window().request_redraw();
        self.context = Some(context);
        self.start_time = Instant::now();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event: KeyEvent {
                    logical_key: Key::Named(NamedKey::Escape),
                    state: ElementState::Pressed,
                    ..
                },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(context) = &self.context {
                    context.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render_frame() {
                    engine_error!(SOURCE, "Frame {} failed: {}", self.frame_count, e);
                    self.fail(event_loop, EXIT_RUNTIME_FAILURE);
                }
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        let seconds = self.start_time.elapsed().as_secs_f32();
        if self.frame_count > 0 && seconds > 0.0 {
            engine_info!(
                SOURCE,
                "{} frames in {:.1}s ({:.1} fps)",
                self.frame_count,
                seconds,
                self.frame_count as f32 / seconds
            );
        }
        self.scene = None;
        self.context = None;
        if self.config.debug_output {
            learn_gl_renderer_opengl::print_gl_debug_report();
        }
    }
}
