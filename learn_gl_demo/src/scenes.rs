/// Tutorial scenes: GPU objects built once, drawn every frame

use std::path::Path;
use std::rc::Rc;

use glam::Vec4;
use learn_gl::learngl::geometry::{ComponentType, IndexBuffer, Mesh, VertexBuffer, VertexLayout};
use learn_gl::learngl::render::{FilterMode, GraphicsDevice, PrimitiveTopology, WrapMode};
use learn_gl::learngl::shader::ShaderProgram;
use learn_gl::learngl::texture::{Image, LoadOptions, Texture2D, TextureParams};
use learn_gl::learngl::{Error, Result};
use learn_gl::{engine_info, engine_warn};

use crate::cli::SceneKind;

const SOURCE: &str = "learngl::demo";

/// Something drawn once per frame, after the clear
pub trait Scene {
    /// Issue this frame's draw calls; `time` is seconds since start
    fn render(&self, time: f32) -> Result<()>;
}

/// Build the GPU objects of `kind`
pub fn build_scene(kind: SceneKind, device: Rc<dyn GraphicsDevice>, resources: &Path) -> Result<Box<dyn Scene>> {
    engine_info!(SOURCE, "Loading scene '{}' from {}", kind.title(), resources.display());
    let shaders = resources.join("shaders");
    let scene: Box<dyn Scene> = match kind {
        SceneKind::HelloWindow => Box::new(HelloWindow),
        SceneKind::HelloTriangle => Box::new(SingleMesh {
            program: ShaderProgram::from_files(
                device.clone(),
                shaders.join("hello_triangle.vs"),
                shaders.join("hello_triangle.fs"),
            )?,
            mesh: Mesh::new(device, &triangle_vertices()?, None, PrimitiveTopology::TriangleList)?,
        }),
        SceneKind::HelloRectangle => Box::new(SingleMesh {
            program: ShaderProgram::from_files(
                device.clone(),
                shaders.join("hello_triangle.vs"),
                shaders.join("hello_triangle.fs"),
            )?,
            mesh: Mesh::new(
                device,
                &rectangle_vertices()?,
                Some(&rectangle_indices()),
                PrimitiveTopology::TriangleList,
            )?,
        }),
        SceneKind::Shaders => Box::new(PulsingTriangle {
            program: ShaderProgram::from_files(device.clone(), shaders.join("shaders.vs"), shaders.join("shaders.fs"))?,
            mesh: Mesh::new(device, &colored_triangle_vertices()?, None, PrimitiveTopology::TriangleList)?,
        }),
        SceneKind::Textures => Box::new(TexturedQuad::new(device, resources)?),
    };
    Ok(scene)
}

// ===== SCENES =====

/// Clear color only
struct HelloWindow;

impl Scene for HelloWindow {
    fn render(&self, _time: f32) -> Result<()> {
        Ok(())
    }
}

/// One program, one mesh, no uniforms
struct SingleMesh {
    program: ShaderProgram,
    mesh: Mesh,
}

impl Scene for SingleMesh {
    fn render(&self, _time: f32) -> Result<()> {
        self.mesh.draw(&self.program)
    }
}

/// Vertex colors blended with a green channel following `sin(t)`
struct PulsingTriangle {
    program: ShaderProgram,
    mesh: Mesh,
}

impl Scene for PulsingTriangle {
    fn render(&self, time: f32) -> Result<()> {
        self.program.use_program();
        self.program.set_uniform("ourColor", Vec4::new(0.0, pulse(time), 0.0, 1.0));
        self.mesh.draw(&self.program)
    }
}

/// Green intensity for the shaders scene, in [0, 1]
pub fn pulse(time: f32) -> f32 {
    time.sin() / 2.0 + 0.5
}

struct TexturedQuad {
    program: ShaderProgram,
    mesh: Mesh,
    container: Texture2D,
    face: Texture2D,
}

impl TexturedQuad {
    fn new(device: Rc<dyn GraphicsDevice>, resources: &Path) -> Result<Self> {
        let shaders = resources.join("shaders");
        let textures = resources.join("textures");

        let program = ShaderProgram::from_files(device.clone(), shaders.join("textures.vs"), shaders.join("textures.fs"))?;
        let mesh = Mesh::new(
            device.clone(),
            &textured_quad_vertices()?,
            Some(&rectangle_indices()),
            PrimitiveTopology::TriangleList,
        )?;
        let container = load_or_checkerboard(device.clone(), &textures.join("container.jpg"))?;
        let face = load_or_checkerboard(device, &textures.join("awesomeface.png"))?;

        program.use_program();
        program.set_int("texture1", 0);
        program.set_int("texture2", 1);

        Ok(Self { program, mesh, container, face })
    }
}

impl Scene for TexturedQuad {
    fn render(&self, _time: f32) -> Result<()> {
        self.container.bind(0);
        self.face.bind(1);
        self.mesh.draw(&self.program)
    }
}

/// Load `path` flipped for GL's bottom-left origin, or fall back to a checkerboard
fn load_or_checkerboard(device: Rc<dyn GraphicsDevice>, path: &Path) -> Result<Texture2D> {
    let params = TextureParams {
        wrap: WrapMode::Repeat,
        filter: FilterMode::Linear,
        mipmaps: true,
    };
    let options = LoadOptions { flip_vertically: true };
    match Texture2D::load_with_options(device.clone(), path, &options, &params) {
        Err(Error::Load { path, reason }) => {
            engine_warn!(SOURCE, "Using a checkerboard for {} ({})", path.display(), reason);
            Texture2D::from_image(device, &Image::checkerboard(256, 256, 32), &params)
        }
        other => other,
    }
}

// ===== VERTEX DATA =====

/// Position-only triangle
pub fn triangle_vertices() -> Result<VertexBuffer> {
    #[rustfmt::skip]
    let vertices = [
        -0.5, -0.5, 0.0,
         0.5, -0.5, 0.0,
         0.0,  0.5, 0.0,
    ];
    VertexBuffer::from_f32(&vertices, VertexLayout::packed(&[(0, 3, ComponentType::F32)])?)
}

/// Position-only unit quad corners: top right, bottom right, bottom left, top left
pub fn rectangle_vertices() -> Result<VertexBuffer> {
    #[rustfmt::skip]
    let vertices = [
         0.5,  0.5, 0.0,
         0.5, -0.5, 0.0,
        -0.5, -0.5, 0.0,
        -0.5,  0.5, 0.0,
    ];
    VertexBuffer::from_f32(&vertices, VertexLayout::packed(&[(0, 3, ComponentType::F32)])?)
}

/// Two triangles covering the quad
pub fn rectangle_indices() -> IndexBuffer {
    IndexBuffer::from_u32(vec![0, 1, 3, 1, 2, 3])
}

/// Position + color per vertex
pub fn colored_triangle_vertices() -> Result<VertexBuffer> {
    #[rustfmt::skip]
    let vertices = [
        // positions        // colors
         0.5, -0.5, 0.0,    1.0, 0.0, 0.0,
        -0.5, -0.5, 0.0,    0.0, 1.0, 0.0,
         0.0,  0.5, 0.0,    0.0, 0.0, 1.0,
    ];
    let layout = VertexLayout::packed(&[(0, 3, ComponentType::F32), (1, 3, ComponentType::F32)])?;
    VertexBuffer::from_f32(&vertices, layout)
}

/// Position + color + texture coordinates per vertex
pub fn textured_quad_vertices() -> Result<VertexBuffer> {
    #[rustfmt::skip]
    let vertices = [
        // positions        // colors         // texture coords
         0.5,  0.5, 0.0,    1.0, 0.0, 0.0,    1.0, 1.0,
         0.5, -0.5, 0.0,    0.0, 1.0, 0.0,    1.0, 0.0,
        -0.5, -0.5, 0.0,    0.0, 0.0, 1.0,    0.0, 0.0,
        -0.5,  0.5, 0.0,    1.0, 1.0, 0.0,    0.0, 1.0,
    ];
    let layout = VertexLayout::packed(&[
        (0, 3, ComponentType::F32),
        (1, 3, ComponentType::F32),
        (2, 2, ComponentType::F32),
    ])?;
    VertexBuffer::from_f32(&vertices, layout)
}

#[cfg(test)]
#[path = "scenes_tests.rs"]
mod tests;
