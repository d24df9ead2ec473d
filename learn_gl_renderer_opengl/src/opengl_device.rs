/// OpenGLDevice - GraphicsDevice implementation on top of glow
///
/// Every method issues GL calls on the current context. The device must only
/// be used on the thread where that context is current, which `Rc` sharing in
/// the core already guarantees.

use std::cell::Cell;

use glow::HasContext;
use learn_gl::learngl::{GraphicsDevice, RendererConfig, Result};
use learn_gl::learngl::geometry::VertexAttribute;
use learn_gl::learngl::render::{
    BufferId, BufferTarget, ClearFlags, CompileStatus, DeviceInfo, IndexType, PixelFormat,
    PolygonMode, PrimitiveTopology, ProgramId, ShaderStage, StageId, TextureDesc, TextureId,
    UniformLocation, UniformValue, VertexArrayId,
};
use learn_gl::{engine_err, engine_info, engine_warn};

use crate::opengl_convert::*;

const SOURCE: &str = "learngl::opengl";

/// OpenGL 3.3 core device
pub struct OpenGLDevice {
    gl: glow::Context,
    info: DeviceInfo,
    active_program: Cell<Option<ProgramId>>,
}

impl OpenGLDevice {
    /// Wrap a loaded glow context
    ///
    /// Sets pixel (un)pack alignment to 1 so tightly packed RGB rows of any
    /// width upload and read back correctly, and installs the debug-output
    /// callback when requested and compiled in.
    ///
    /// # Safety
    ///
    /// The context behind `gl` must be current on the calling thread for the
    /// whole lifetime of the device.
    pub unsafe fn new(mut gl: glow::Context, config: &RendererConfig) -> Self {
        let info = DeviceInfo {
            vendor: gl.get_parameter_string(glow::VENDOR),
            renderer: gl.get_parameter_string(glow::RENDERER),
            version: gl.get_parameter_string(glow::VERSION),
        };
        engine_info!(SOURCE, "OpenGL {} ({}, {})", info.version, info.renderer, info.vendor);

        gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
        gl.pixel_store_i32(glow::PACK_ALIGNMENT, 1);

        if config.debug_output {
            crate::debug::install(&mut gl);
        }

        let device = Self {
            gl,
            info,
            active_program: Cell::new(None),
        };
        if config.wireframe {
            device.set_polygon_mode(PolygonMode::Line);
        }
        device
    }

    /// Raw glow context
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }
}

impl GraphicsDevice for OpenGLDevice {
    fn info(&self) -> DeviceInfo {
        self.info.clone()
    }

    // ===== SHADERS =====

    fn create_stage(&self, stage: ShaderStage) -> Result<StageId> {
        let shader = unsafe { self.gl.create_shader(shader_stage_to_gl(stage)) }
            .map_err(|e| engine_err!(SOURCE, "Failed to create {:?} shader: {}", stage, e))?;
        Ok(StageId(shader.0))
    }

    fn compile_stage(&self, stage: StageId, source: &str) -> CompileStatus {
        let shader = glow::NativeShader(stage.0);
        unsafe {
            self.gl.shader_source(shader, source);
            self.gl.compile_shader(shader);
            CompileStatus {
                success: self.gl.get_shader_compile_status(shader),
                log: self.gl.get_shader_info_log(shader),
            }
        }
    }

    fn delete_stage(&self, stage: StageId) {
        unsafe { self.gl.delete_shader(glow::NativeShader(stage.0)) };
    }

    fn create_program(&self) -> Result<ProgramId> {
        let program = unsafe { self.gl.create_program() }
            .map_err(|e| engine_err!(SOURCE, "Failed to create program: {}", e))?;
        Ok(ProgramId(program.0))
    }

    fn link_program(&self, program: ProgramId, stages: &[StageId]) -> CompileStatus {
        let native = glow::NativeProgram(program.0);
        unsafe {
            for stage in stages {
                self.gl.attach_shader(native, glow::NativeShader(stage.0));
            }
            self.gl.link_program(native);
            let status = CompileStatus {
                success: self.gl.get_program_link_status(native),
                log: self.gl.get_program_info_log(native),
            };
            for stage in stages {
                self.gl.detach_shader(native, glow::NativeShader(stage.0));
            }
            status
        }
    }

    fn delete_program(&self, program: ProgramId) {
        if self.active_program.get() == Some(program) {
            self.use_program(None);
        }
        unsafe { self.gl.delete_program(glow::NativeProgram(program.0)) };
    }

    fn use_program(&self, program: Option<ProgramId>) {
        unsafe { self.gl.use_program(program.map(|p| glow::NativeProgram(p.0))) };
        self.active_program.set(program);
    }

    fn active_program(&self) -> Option<ProgramId> {
        self.active_program.get()
    }

    fn uniform_location(&self, program: ProgramId, name: &str) -> Option<UniformLocation> {
        unsafe { self.gl.get_uniform_location(glow::NativeProgram(program.0), name) }
            .map(|location| UniformLocation(location.0))
    }

    fn set_uniform(&self, location: UniformLocation, value: &UniformValue) {
        let native = glow::NativeUniformLocation(location.0);
        let location = Some(&native);
        let gl = &self.gl;
        unsafe {
            match *value {
                UniformValue::Bool(v) => gl.uniform_1_i32(location, v as i32),
                UniformValue::Int(v) => gl.uniform_1_i32(location, v),
                UniformValue::UInt(v) => gl.uniform_1_u32(location, v),
                UniformValue::Float(v) => gl.uniform_1_f32(location, v),
                UniformValue::Vec2([x, y]) => gl.uniform_2_f32(location, x, y),
                UniformValue::Vec3([x, y, z]) => gl.uniform_3_f32(location, x, y, z),
                UniformValue::Vec4([x, y, z, w]) => gl.uniform_4_f32(location, x, y, z, w),
                UniformValue::IVec2([x, y]) => gl.uniform_2_i32(location, x, y),
                UniformValue::IVec3([x, y, z]) => gl.uniform_3_i32(location, x, y, z),
                UniformValue::IVec4([x, y, z, w]) => gl.uniform_4_i32(location, x, y, z, w),
                UniformValue::Mat2(m) => gl.uniform_matrix_2_f32_slice(location, false, &m),
                UniformValue::Mat3(m) => gl.uniform_matrix_3_f32_slice(location, false, &m),
                UniformValue::Mat4(m) => gl.uniform_matrix_4_f32_slice(location, false, &m),
            }
        }
    }

    // ===== VERTEX DATA =====

    fn create_vertex_array(&self) -> Result<VertexArrayId> {
        let vertex_array = unsafe { self.gl.create_vertex_array() }
            .map_err(|e| engine_err!(SOURCE, "Failed to create vertex array: {}", e))?;
        Ok(VertexArrayId(vertex_array.0))
    }

    fn bind_vertex_array(&self, vertex_array: Option<VertexArrayId>) {
        unsafe { self.gl.bind_vertex_array(vertex_array.map(|v| glow::NativeVertexArray(v.0))) };
    }

    fn delete_vertex_array(&self, vertex_array: VertexArrayId) {
        unsafe { self.gl.delete_vertex_array(glow::NativeVertexArray(vertex_array.0)) };
    }

    fn create_buffer(&self, target: BufferTarget, data: &[u8]) -> Result<BufferId> {
        let gl_target = buffer_target_to_gl(target);
        unsafe {
            let buffer = self
                .gl
                .create_buffer()
                .map_err(|e| engine_err!(SOURCE, "Failed to create {:?} buffer: {}", target, e))?;
            self.gl.bind_buffer(gl_target, Some(buffer));
            self.gl.buffer_data_u8_slice(gl_target, data, glow::STATIC_DRAW);
            Ok(BufferId(buffer.0))
        }
    }

    fn delete_buffer(&self, buffer: BufferId) {
        unsafe { self.gl.delete_buffer(glow::NativeBuffer(buffer.0)) };
    }

    fn set_vertex_attribute(&self, attribute: &VertexAttribute, stride: u32) {
        let data_type = component_type_to_gl(attribute.component_type);
        let size = attribute.components as i32;
        unsafe {
            if attribute.component_type.is_integer() && !attribute.normalized {
                self.gl.vertex_attrib_pointer_i32(
                    attribute.location,
                    size,
                    data_type,
                    stride as i32,
                    attribute.offset as i32,
                );
            } else {
                self.gl.vertex_attrib_pointer_f32(
                    attribute.location,
                    size,
                    data_type,
                    attribute.normalized,
                    stride as i32,
                    attribute.offset as i32,
                );
            }
            self.gl.enable_vertex_attrib_array(attribute.location);
        }
    }

    // ===== TEXTURES =====

    fn create_texture(&self, desc: &TextureDesc<'_>) -> Result<TextureId> {
        if desc.pixels.len() != desc.expected_len() {
            return Err(engine_err!(
                SOURCE,
                "Texture data is {} bytes, expected {} for {}x{} {:?}",
                desc.pixels.len(),
                desc.expected_len(),
                desc.width,
                desc.height,
                desc.format
            ));
        }

        let (internal_format, format) = pixel_format_to_gl(desc.format);
        let wrap = wrap_mode_to_gl(desc.wrap);
        unsafe {
            let texture = self
                .gl
                .create_texture()
                .map_err(|e| engine_err!(SOURCE, "Failed to create texture: {}", e))?;
            self.gl.bind_texture(glow::TEXTURE_2D, Some(texture));

            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, wrap);
            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, wrap);
            self.gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                min_filter_to_gl(desc.filter, desc.mipmaps),
            );
            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, mag_filter_to_gl(desc.filter));

            self.gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                internal_format,
                desc.width as i32,
                desc.height as i32,
                0,
                format,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(desc.pixels)),
            );
            if desc.mipmaps {
                self.gl.generate_mipmap(glow::TEXTURE_2D);
            }
            Ok(TextureId(texture.0))
        }
    }

    fn bind_texture(&self, unit: u32, texture: Option<TextureId>) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, texture.map(|t| glow::NativeTexture(t.0)));
        }
    }

    fn read_texture(&self, texture: TextureId, format: PixelFormat, width: u32, height: u32) -> Option<Vec<u8>> {
        let (_, gl_format) = pixel_format_to_gl(format);
        let mut pixels = vec![0u8; width as usize * height as usize * format.bytes_per_pixel() as usize];
        unsafe {
            self.gl.bind_texture(glow::TEXTURE_2D, Some(glow::NativeTexture(texture.0)));
            self.gl.get_tex_image(
                glow::TEXTURE_2D,
                0,
                gl_format,
                glow::UNSIGNED_BYTE,
                glow::PixelPackData::Slice(Some(&mut pixels)),
            );
            if self.gl.get_error() != glow::NO_ERROR {
                engine_warn!(SOURCE, "Texture {} readback failed", texture);
                return None;
            }
        }
        Some(pixels)
    }

    fn delete_texture(&self, texture: TextureId) {
        unsafe { self.gl.delete_texture(glow::NativeTexture(texture.0)) };
    }

    // ===== FRAME =====

    fn viewport(&self, x: i32, y: i32, width: u32, height: u32) {
        unsafe { self.gl.viewport(x, y, width as i32, height as i32) };
    }

    fn clear(&self, flags: ClearFlags, color: [f32; 4]) {
        unsafe {
            if flags.contains(ClearFlags::COLOR) {
                self.gl.clear_color(color[0], color[1], color[2], color[3]);
            }
            self.gl.clear(clear_flags_to_gl(flags));
        }
    }

    fn set_polygon_mode(&self, mode: PolygonMode) {
        unsafe { self.gl.polygon_mode(glow::FRONT_AND_BACK, polygon_mode_to_gl(mode)) };
    }

    fn draw_arrays(&self, topology: PrimitiveTopology, first: u32, count: u32) {
        unsafe { self.gl.draw_arrays(topology_to_gl(topology), first as i32, count as i32) };
    }

    fn draw_elements(&self, topology: PrimitiveTopology, count: u32, index_type: IndexType, byte_offset: u32) {
        unsafe {
            self.gl.draw_elements(
                topology_to_gl(topology),
                count as i32,
                index_type_to_gl(index_type),
                byte_offset as i32,
            )
        };
    }
}

impl Drop for OpenGLDevice {
    fn drop(&mut self) {
        crate::debug::log_summary();
    }
}
