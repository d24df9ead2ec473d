/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Behaves like a forgiving GL context: object names are handed out from a
/// counter, "compilation" checks a few structural properties of the GLSL
/// text, and every state change is recorded so tests can inspect it.
///
/// Compile rules:
/// - the source must contain `#version` and `void main`
/// - braces must be balanced
/// - the marker `SYNTAX_ERROR` always fails
///
/// Link rules:
/// - exactly one compiled vertex stage and one compiled fragment stage
/// - every fragment `in` must be written by a vertex `out` of the same name
///
/// Every `uniform` declaration of the linked stages gets a location, in
/// declaration order.

use std::cell::{Cell, RefCell};
use std::num::NonZeroU32;

use rustc_hash::FxHashMap;

use crate::engine_bail;
use crate::error::Result;
use crate::geometry::VertexAttribute;
use crate::graphics_device::{
    GraphicsDevice, DeviceInfo, ShaderStage, CompileStatus, BufferTarget, PrimitiveTopology,
    IndexType, PolygonMode, ClearFlags, StageId, ProgramId, BufferId, VertexArrayId, TextureId,
    UniformLocation, UniformValue, TextureDesc, PixelFormat, WrapMode, FilterMode,
};

// ============================================================================
// Recorded objects
// ============================================================================

#[derive(Debug, Clone)]
pub struct MockStage {
    pub stage: ShaderStage,
    pub source: Option<String>,
    pub compiled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MockProgram {
    pub linked: bool,
    pub uniforms: Vec<String>,
    pub uniform_values: FxHashMap<u32, UniformValue>,
}

#[derive(Debug, Clone)]
pub struct MockBuffer {
    pub target: BufferTarget,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct MockVertexArray {
    /// (attribute, stride, source buffer)
    pub attributes: Vec<(VertexAttribute, u32, Option<BufferId>)>,
    pub element_buffer: Option<BufferId>,
}

#[derive(Debug, Clone)]
pub struct MockTexture {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub wrap: WrapMode,
    pub filter: FilterMode,
    pub mip_levels: u32,
    pub pixels: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    Arrays { first: u32, count: u32 },
    Elements { count: u32, index_type: IndexType, byte_offset: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub topology: PrimitiveTopology,
    pub kind: DrawKind,
    pub program: Option<ProgramId>,
    pub vertex_array: Option<VertexArrayId>,
}

#[derive(Debug, Default)]
struct MockState {
    stages: FxHashMap<StageId, MockStage>,
    programs: FxHashMap<ProgramId, MockProgram>,
    buffers: FxHashMap<BufferId, MockBuffer>,
    vertex_arrays: FxHashMap<VertexArrayId, MockVertexArray>,
    textures: FxHashMap<TextureId, MockTexture>,
    texture_units: FxHashMap<u32, TextureId>,
    active_program: Option<ProgramId>,
    bound_vertex_array: Option<VertexArrayId>,
    bound_array_buffer: Option<BufferId>,
    draws: Vec<DrawCall>,
    deleted_stages: Vec<StageId>,
    double_deletes: u32,
    buffers_created: u32,
    orphan_uniform_sets: u32,
    clears: Vec<(ClearFlags, [f32; 4])>,
    viewport: (i32, i32, u32, u32),
    polygon_mode: Option<PolygonMode>,
}

// ============================================================================
// Mock device
// ============================================================================

#[derive(Debug, Default)]
pub struct MockGraphicsDevice {
    state: RefCell<MockState>,
    next_name: Cell<u32>,
    fail_buffer_creation: Cell<bool>,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_name(&self) -> NonZeroU32 {
        let name = self.next_name.get() + 1;
        self.next_name.set(name);
        NonZeroU32::new(name).unwrap_or(NonZeroU32::MIN)
    }

    /// Make every subsequent `create_buffer` fail
    pub fn set_fail_buffer_creation(&self, fail: bool) {
        self.fail_buffer_creation.set(fail);
    }

    // ===== INSPECTION =====

    pub fn live_stage_count(&self) -> usize {
        self.state.borrow().stages.len()
    }

    pub fn live_program_count(&self) -> usize {
        self.state.borrow().programs.len()
    }

    pub fn live_buffer_count(&self) -> usize {
        self.state.borrow().buffers.len()
    }

    pub fn live_vertex_array_count(&self) -> usize {
        self.state.borrow().vertex_arrays.len()
    }

    pub fn live_texture_count(&self) -> usize {
        self.state.borrow().textures.len()
    }

    /// Buffers created over the device lifetime (deleted ones included)
    pub fn buffers_created(&self) -> u32 {
        self.state.borrow().buffers_created
    }

    pub fn deleted_stages(&self) -> Vec<StageId> {
        self.state.borrow().deleted_stages.clone()
    }

    /// Deletions of names that were not alive
    pub fn double_deletes(&self) -> u32 {
        self.state.borrow().double_deletes
    }

    /// `set_uniform` calls issued with no active program or a bad location
    pub fn orphan_uniform_sets(&self) -> u32 {
        self.state.borrow().orphan_uniform_sets
    }

    pub fn program(&self, program: ProgramId) -> Option<MockProgram> {
        self.state.borrow().programs.get(&program).cloned()
    }

    /// Last value written to `name` of `program`
    pub fn uniform_value(&self, program: ProgramId, name: &str) -> Option<UniformValue> {
        let state = self.state.borrow();
        let program = state.programs.get(&program)?;
        let location = program.uniforms.iter().position(|u| u == name)? as u32;
        program.uniform_values.get(&location).copied()
    }

    pub fn buffer(&self, buffer: BufferId) -> Option<MockBuffer> {
        self.state.borrow().buffers.get(&buffer).cloned()
    }

    pub fn vertex_array(&self, vertex_array: VertexArrayId) -> Option<MockVertexArray> {
        self.state.borrow().vertex_arrays.get(&vertex_array).cloned()
    }

    pub fn bound_vertex_array(&self) -> Option<VertexArrayId> {
        self.state.borrow().bound_vertex_array
    }

    pub fn texture(&self, texture: TextureId) -> Option<MockTexture> {
        self.state.borrow().textures.get(&texture).cloned()
    }

    pub fn bound_texture(&self, unit: u32) -> Option<TextureId> {
        self.state.borrow().texture_units.get(&unit).copied()
    }

    pub fn draw_calls(&self) -> Vec<DrawCall> {
        self.state.borrow().draws.clone()
    }

    pub fn clears(&self) -> Vec<(ClearFlags, [f32; 4])> {
        self.state.borrow().clears.clone()
    }

    pub fn current_viewport(&self) -> (i32, i32, u32, u32) {
        self.state.borrow().viewport
    }

    pub fn polygon_mode(&self) -> Option<PolygonMode> {
        self.state.borrow().polygon_mode
    }
}

// ============================================================================
// GLSL-ish checks
// ============================================================================

/// Declarations `(qualifier, name)` of every `in`/`out`/`uniform` statement
fn declarations(source: &str) -> Vec<(String, String)> {
    let mut found = Vec::new();
    for statement in source.split(';') {
        // ignore preprocessor lines, comments and function bodies
        let statement: String = statement
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .map(|line| line.split("//").next().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ");
        let mut statement = statement.trim();
        if let Some(end) = statement.rfind('}') {
            statement = statement[end + 1..].trim();
        }
        if statement.starts_with("layout") {
            match statement.find(')') {
                Some(close) => statement = statement[close + 1..].trim(),
                None => continue,
            }
        }
        let tokens: Vec<&str> = statement.split_whitespace().collect();
        if tokens.len() < 3 || tokens.iter().any(|t| t.contains('(')) {
            continue;
        }
        if matches!(tokens[0], "in" | "out" | "uniform") {
            let name = tokens[tokens.len() - 1];
            let name = name.split('[').next().unwrap_or(name);
            found.push((tokens[0].to_string(), name.to_string()));
        }
    }
    found
}

fn check_source(source: &str) -> CompileStatus {
    if source.contains("SYNTAX_ERROR") {
        return CompileStatus::failed("0:1(1): error: syntax error, unexpected IDENTIFIER\n");
    }
    if !source.contains("#version") {
        return CompileStatus::failed("0:1(1): error: missing #version directive\n");
    }
    if !source.contains("void main") {
        return CompileStatus::failed("error: entry point 'main' not found\n");
    }
    let mut depth: i32 = 0;
    for c in source.chars() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return CompileStatus::failed("error: syntax error, unexpected '}'\n");
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return CompileStatus::failed("error: syntax error, unexpected end of file\n");
    }
    CompileStatus::ok()
}

// ============================================================================
// GraphicsDevice implementation
// ============================================================================

impl GraphicsDevice for MockGraphicsDevice {
    fn info(&self) -> DeviceInfo {
        DeviceInfo {
            vendor: "LearnGL".to_string(),
            renderer: "Mock".to_string(),
            version: "3.3 (mock)".to_string(),
        }
    }

    fn create_stage(&self, stage: ShaderStage) -> Result<StageId> {
        let id = StageId(self.next_name());
        self.state.borrow_mut().stages.insert(id, MockStage { stage, source: None, compiled: false });
        Ok(id)
    }

    fn compile_stage(&self, stage: StageId, source: &str) -> CompileStatus {
        let mut state = self.state.borrow_mut();
        let Some(entry) = state.stages.get_mut(&stage) else {
            return CompileStatus::failed("invalid shader name");
        };
        let status = check_source(source);
        entry.source = Some(source.to_string());
        entry.compiled = status.success;
        status
    }

    fn delete_stage(&self, stage: StageId) {
        let mut state = self.state.borrow_mut();
        if state.stages.remove(&stage).is_some() {
            state.deleted_stages.push(stage);
        } else {
            state.double_deletes += 1;
        }
    }

    fn create_program(&self) -> Result<ProgramId> {
        let id = ProgramId(self.next_name());
        self.state.borrow_mut().programs.insert(id, MockProgram::default());
        Ok(id)
    }

    fn link_program(&self, program: ProgramId, stages: &[StageId]) -> CompileStatus {
        let mut state = self.state.borrow_mut();

        let mut vertex = None;
        let mut fragment = None;
        for id in stages {
            match state.stages.get(id) {
                Some(stage) if stage.compiled => {
                    let source = stage.source.clone().unwrap_or_default();
                    match stage.stage {
                        ShaderStage::Vertex => vertex = Some(source),
                        ShaderStage::Fragment => fragment = Some(source),
                    }
                }
                _ => return CompileStatus::failed("error: attached shader is not compiled\n"),
            }
        }
        let (Some(vertex), Some(fragment)) = (vertex, fragment) else {
            return CompileStatus::failed("error: program lacks a vertex or fragment stage\n");
        };

        let vertex_decls = declarations(&vertex);
        let fragment_decls = declarations(&fragment);
        for (qualifier, name) in &fragment_decls {
            let written = vertex_decls.iter().any(|(q, n)| q == "out" && n == name);
            if qualifier == "in" && !written {
                return CompileStatus::failed(format!(
                    "error: fragment shader input `{}' has no matching vertex shader output\n",
                    name
                ));
            }
        }

        let mut uniforms: Vec<String> = Vec::new();
        for (qualifier, name) in vertex_decls.iter().chain(fragment_decls.iter()) {
            if qualifier == "uniform" && !uniforms.contains(name) {
                uniforms.push(name.clone());
            }
        }

        match state.programs.get_mut(&program) {
            Some(entry) => {
                entry.linked = true;
                entry.uniforms = uniforms;
                entry.uniform_values.clear();
                CompileStatus::ok()
            }
            None => CompileStatus::failed("invalid program name"),
        }
    }

    fn delete_program(&self, program: ProgramId) {
        let mut state = self.state.borrow_mut();
        if state.programs.remove(&program).is_none() {
            state.double_deletes += 1;
            return;
        }
        if state.active_program == Some(program) {
            state.active_program = None;
        }
    }

    fn use_program(&self, program: Option<ProgramId>) {
        self.state.borrow_mut().active_program = program;
    }

    fn active_program(&self) -> Option<ProgramId> {
        self.state.borrow().active_program
    }

    fn uniform_location(&self, program: ProgramId, name: &str) -> Option<UniformLocation> {
        let state = self.state.borrow();
        let program = state.programs.get(&program).filter(|p| p.linked)?;
        program
            .uniforms
            .iter()
            .position(|u| u == name)
            .map(|index| UniformLocation(index as u32))
    }

    fn set_uniform(&self, location: UniformLocation, value: &UniformValue) {
        let mut state = self.state.borrow_mut();
        let Some(active) = state.active_program else {
            state.orphan_uniform_sets += 1;
            return;
        };
        match state.programs.get_mut(&active) {
            Some(program) if (location.0 as usize) < program.uniforms.len() => {
                program.uniform_values.insert(location.0, *value);
            }
            _ => state.orphan_uniform_sets += 1,
        }
    }

    fn create_vertex_array(&self) -> Result<VertexArrayId> {
        let id = VertexArrayId(self.next_name());
        self.state.borrow_mut().vertex_arrays.insert(id, MockVertexArray::default());
        Ok(id)
    }

    fn bind_vertex_array(&self, vertex_array: Option<VertexArrayId>) {
        self.state.borrow_mut().bound_vertex_array = vertex_array;
    }

    fn delete_vertex_array(&self, vertex_array: VertexArrayId) {
        let mut state = self.state.borrow_mut();
        if state.vertex_arrays.remove(&vertex_array).is_none() {
            state.double_deletes += 1;
        } else if state.bound_vertex_array == Some(vertex_array) {
            state.bound_vertex_array = None;
        }
    }

    fn create_buffer(&self, target: BufferTarget, data: &[u8]) -> Result<BufferId> {
        if self.fail_buffer_creation.get() {
            engine_bail!("learngl::MockGraphicsDevice", "Buffer creation failed (forced)");
        }
        let id = BufferId(self.next_name());
        let mut state = self.state.borrow_mut();
        state.buffers.insert(id, MockBuffer { target, data: data.to_vec() });
        state.buffers_created += 1;
        match target {
            BufferTarget::Vertex => state.bound_array_buffer = Some(id),
            BufferTarget::Index => {
                if let Some(vao) = state.bound_vertex_array {
                    if let Some(vertex_array) = state.vertex_arrays.get_mut(&vao) {
                        vertex_array.element_buffer = Some(id);
                    }
                }
            }
        }
        Ok(id)
    }

    fn delete_buffer(&self, buffer: BufferId) {
        let mut state = self.state.borrow_mut();
        if state.buffers.remove(&buffer).is_none() {
            state.double_deletes += 1;
        } else if state.bound_array_buffer == Some(buffer) {
            state.bound_array_buffer = None;
        }
    }

    fn set_vertex_attribute(&self, attribute: &VertexAttribute, stride: u32) {
        let mut state = self.state.borrow_mut();
        let source = state.bound_array_buffer;
        if let Some(vao) = state.bound_vertex_array {
            if let Some(vertex_array) = state.vertex_arrays.get_mut(&vao) {
                vertex_array.attributes.push((*attribute, stride, source));
            }
        }
    }

    fn create_texture(&self, desc: &TextureDesc<'_>) -> Result<TextureId> {
        if desc.pixels.len() != desc.expected_len() {
            engine_bail!(
                "learngl::MockGraphicsDevice",
                "Texture data is {} bytes, expected {}",
                desc.pixels.len(),
                desc.expected_len()
            );
        }
        let id = TextureId(self.next_name());
        self.state.borrow_mut().textures.insert(id, MockTexture {
            width: desc.width,
            height: desc.height,
            format: desc.format,
            wrap: desc.wrap,
            filter: desc.filter,
            mip_levels: desc.mip_levels(),
            pixels: desc.pixels.to_vec(),
        });
        Ok(id)
    }

    fn bind_texture(&self, unit: u32, texture: Option<TextureId>) {
        let mut state = self.state.borrow_mut();
        match texture {
            Some(id) => state.texture_units.insert(unit, id),
            None => state.texture_units.remove(&unit),
        };
    }

    fn read_texture(&self, texture: TextureId, format: PixelFormat, width: u32, height: u32) -> Option<Vec<u8>> {
        let state = self.state.borrow();
        let stored = state.textures.get(&texture)?;
        if stored.format != format || stored.width != width || stored.height != height {
            return None;
        }
        Some(stored.pixels.clone())
    }

    fn delete_texture(&self, texture: TextureId) {
        let mut state = self.state.borrow_mut();
        if state.textures.remove(&texture).is_none() {
            state.double_deletes += 1;
        }
        state.texture_units.retain(|_, bound| *bound != texture);
    }

    fn viewport(&self, x: i32, y: i32, width: u32, height: u32) {
        self.state.borrow_mut().viewport = (x, y, width, height);
    }

    fn clear(&self, flags: ClearFlags, color: [f32; 4]) {
        self.state.borrow_mut().clears.push((flags, color));
    }

    fn set_polygon_mode(&self, mode: PolygonMode) {
        self.state.borrow_mut().polygon_mode = Some(mode);
    }

    fn draw_arrays(&self, topology: PrimitiveTopology, first: u32, count: u32) {
        let mut state = self.state.borrow_mut();
        let call = DrawCall {
            topology,
            kind: DrawKind::Arrays { first, count },
            program: state.active_program,
            vertex_array: state.bound_vertex_array,
        };
        state.draws.push(call);
    }

    fn draw_elements(&self, topology: PrimitiveTopology, count: u32, index_type: IndexType, byte_offset: u32) {
        let mut state = self.state.borrow_mut();
        let call = DrawCall {
            topology,
            kind: DrawKind::Elements { count, index_type, byte_offset },
            program: state.active_program,
            vertex_array: state.bound_vertex_array,
        };
        state.draws.push(call);
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
