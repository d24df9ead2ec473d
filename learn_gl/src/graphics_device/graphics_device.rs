/// GraphicsDevice trait - the immediate-mode graphics context seen by the core
///
/// Every method runs on the thread that owns the context and returns once the
/// driver call returns. Binding state (active program, bound vertex array,
/// texture units) is global to the device; the resource wrappers in this
/// crate bind what they need right before they use it.

use bitflags::bitflags;

use crate::error::Result;
use crate::geometry::VertexAttribute;
use crate::graphics_device::{
    StageId, ProgramId, BufferId, VertexArrayId, TextureId, UniformLocation,
    UniformValue, TextureDesc, PixelFormat,
};

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

/// Outcome of a compile or link request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileStatus {
    /// True when the driver reports success
    pub success: bool,
    /// Driver info log (may be non-empty on success: warnings)
    pub log: String,
}

impl CompileStatus {
    /// Successful status with an empty log
    pub fn ok() -> Self {
        Self { success: true, log: String::new() }
    }

    /// Failed status with a log
    pub fn failed(log: impl Into<String>) -> Self {
        Self { success: false, log: log.into() }
    }
}

/// Buffer binding target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferTarget {
    /// Per-vertex attribute data (GL_ARRAY_BUFFER)
    Vertex,
    /// Element indices (GL_ELEMENT_ARRAY_BUFFER)
    Index,
}

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Triangle list
    TriangleList,
    /// Triangle strip
    TriangleStrip,
    /// Line list
    LineList,
    /// Point list
    PointList,
}

/// Index buffer element type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    /// 16-bit indices (max 65535 vertices)
    U16,
    /// 32-bit indices
    U32,
}

/// Polygon rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonMode {
    /// Fill polygons
    Fill,
    /// Draw edges only (wireframe)
    Line,
    /// Draw vertices only
    Point,
}

bitflags! {
    /// Buffers cleared by `GraphicsDevice::clear`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        /// Color buffer
        const COLOR = 1 << 0;
        /// Depth buffer
        const DEPTH = 1 << 1;
        /// Stencil buffer
        const STENCIL = 1 << 2;
    }
}

/// Driver identification strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    /// GL_VENDOR
    pub vendor: String,
    /// GL_RENDERER
    pub renderer: String,
    /// GL_VERSION
    pub version: String,
}

/// Graphics context interface
///
/// Implemented by backends (e.g. `OpenGLDevice`). Objects are shared through
/// `Rc<dyn GraphicsDevice>`, which keeps them on the context thread.
pub trait GraphicsDevice {
    /// Driver identification
    fn info(&self) -> DeviceInfo;

    // ===== SHADERS =====

    /// Create an empty shader object for `stage`
    fn create_stage(&self, stage: ShaderStage) -> Result<StageId>;

    /// Upload `source` into a shader object and compile it
    fn compile_stage(&self, stage: StageId, source: &str) -> CompileStatus;

    /// Delete a shader object
    fn delete_stage(&self, stage: StageId);

    /// Create an empty program object
    fn create_program(&self) -> Result<ProgramId>;

    /// Attach `stages`, link, and detach them again
    fn link_program(&self, program: ProgramId, stages: &[StageId]) -> CompileStatus;

    /// Delete a program object
    fn delete_program(&self, program: ProgramId);

    /// Make `program` the active program (None deactivates)
    fn use_program(&self, program: Option<ProgramId>);

    /// Currently active program
    fn active_program(&self) -> Option<ProgramId>;

    /// Location of an active uniform, None when the name does not resolve
    fn uniform_location(&self, program: ProgramId, name: &str) -> Option<UniformLocation>;

    /// Set a uniform of the *active* program
    fn set_uniform(&self, location: UniformLocation, value: &UniformValue);

    // ===== VERTEX DATA =====

    /// Create a vertex array object
    fn create_vertex_array(&self) -> Result<VertexArrayId>;

    /// Bind a vertex array object (None unbinds)
    fn bind_vertex_array(&self, vertex_array: Option<VertexArrayId>);

    /// Delete a vertex array object
    fn delete_vertex_array(&self, vertex_array: VertexArrayId);

    /// Create a buffer, bind it to `target` and upload `data` once (static draw)
    ///
    /// The buffer stays bound. An index buffer created while a vertex array
    /// is bound becomes that vertex array's element buffer.
    fn create_buffer(&self, target: BufferTarget, data: &[u8]) -> Result<BufferId>;

    /// Delete a buffer object
    fn delete_buffer(&self, buffer: BufferId);

    /// Describe and enable one attribute of the bound vertex array, sourcing
    /// from the buffer currently bound to `BufferTarget::Vertex`
    fn set_vertex_attribute(&self, attribute: &VertexAttribute, stride: u32);

    // ===== TEXTURES =====

    /// Create a 2D texture, upload pixels, apply sampler state and mipmaps
    fn create_texture(&self, desc: &TextureDesc<'_>) -> Result<TextureId>;

    /// Bind a texture to a texture unit (None unbinds)
    fn bind_texture(&self, unit: u32, texture: Option<TextureId>);

    /// Read back level 0 of a texture, None when unsupported
    fn read_texture(&self, texture: TextureId, format: PixelFormat, width: u32, height: u32) -> Option<Vec<u8>>;

    /// Delete a texture object
    fn delete_texture(&self, texture: TextureId);

    // ===== FRAME =====

    /// Set the viewport rectangle
    fn viewport(&self, x: i32, y: i32, width: u32, height: u32);

    /// Clear the selected buffers (color buffer to `color`)
    fn clear(&self, flags: ClearFlags, color: [f32; 4]);

    /// Select fill or wireframe rasterization
    fn set_polygon_mode(&self, mode: PolygonMode);

    /// Draw `count` vertices of the bound vertex array starting at `first`
    fn draw_arrays(&self, topology: PrimitiveTopology, first: u32, count: u32);

    /// Draw `count` indices of the bound vertex array's element buffer
    fn draw_elements(&self, topology: PrimitiveTopology, count: u32, index_type: IndexType, byte_offset: u32);
}
