/// Conversions from learngl enums to OpenGL constants

use learn_gl::learngl::geometry::ComponentType;
use learn_gl::learngl::render::{
    BufferTarget, ClearFlags, FilterMode, IndexType, PixelFormat, PolygonMode, PrimitiveTopology,
    ShaderStage, WrapMode,
};

pub(crate) fn shader_stage_to_gl(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

pub(crate) fn buffer_target_to_gl(target: BufferTarget) -> u32 {
    match target {
        BufferTarget::Vertex => glow::ARRAY_BUFFER,
        BufferTarget::Index => glow::ELEMENT_ARRAY_BUFFER,
    }
}

pub(crate) fn topology_to_gl(topology: PrimitiveTopology) -> u32 {
    match topology {
        PrimitiveTopology::TriangleList => glow::TRIANGLES,
        PrimitiveTopology::TriangleStrip => glow::TRIANGLE_STRIP,
        PrimitiveTopology::LineList => glow::LINES,
        PrimitiveTopology::PointList => glow::POINTS,
    }
}

pub(crate) fn index_type_to_gl(index_type: IndexType) -> u32 {
    match index_type {
        IndexType::U16 => glow::UNSIGNED_SHORT,
        IndexType::U32 => glow::UNSIGNED_INT,
    }
}

pub(crate) fn polygon_mode_to_gl(mode: PolygonMode) -> u32 {
    match mode {
        PolygonMode::Fill => glow::FILL,
        PolygonMode::Line => glow::LINE,
        PolygonMode::Point => glow::POINT,
    }
}

pub(crate) fn clear_flags_to_gl(flags: ClearFlags) -> u32 {
    let mut mask = 0;
    if flags.contains(ClearFlags::COLOR) {
        mask |= glow::COLOR_BUFFER_BIT;
    }
    if flags.contains(ClearFlags::DEPTH) {
        mask |= glow::DEPTH_BUFFER_BIT;
    }
    if flags.contains(ClearFlags::STENCIL) {
        mask |= glow::STENCIL_BUFFER_BIT;
    }
    mask
}

pub(crate) fn component_type_to_gl(component_type: ComponentType) -> u32 {
    match component_type {
        ComponentType::F32 => glow::FLOAT,
        ComponentType::I32 => glow::INT,
        ComponentType::U32 => glow::UNSIGNED_INT,
        ComponentType::I16 => glow::SHORT,
        ComponentType::U16 => glow::UNSIGNED_SHORT,
        ComponentType::I8 => glow::BYTE,
        ComponentType::U8 => glow::UNSIGNED_BYTE,
    }
}

pub(crate) fn wrap_mode_to_gl(wrap: WrapMode) -> i32 {
    (match wrap {
        WrapMode::Repeat => glow::REPEAT,
        WrapMode::MirroredRepeat => glow::MIRRORED_REPEAT,
        WrapMode::ClampToEdge => glow::CLAMP_TO_EDGE,
        WrapMode::ClampToBorder => glow::CLAMP_TO_BORDER,
    }) as i32
}

/// Minification filter; mipmapped textures get the `*_MIPMAP_LINEAR` variant
pub(crate) fn min_filter_to_gl(filter: FilterMode, mipmaps: bool) -> i32 {
    (match (filter, mipmaps) {
        (FilterMode::Nearest, false) => glow::NEAREST,
        (FilterMode::Linear, false) => glow::LINEAR,
        (FilterMode::Nearest, true) => glow::NEAREST_MIPMAP_LINEAR,
        (FilterMode::Linear, true) => glow::LINEAR_MIPMAP_LINEAR,
    }) as i32
}

pub(crate) fn mag_filter_to_gl(filter: FilterMode) -> i32 {
    (match filter {
        FilterMode::Nearest => glow::NEAREST,
        FilterMode::Linear => glow::LINEAR,
    }) as i32
}

/// (internal format, pixel format) for `tex_image_2d` / `get_tex_image`
pub(crate) fn pixel_format_to_gl(format: PixelFormat) -> (i32, u32) {
    match format {
        PixelFormat::R8 => (glow::R8 as i32, glow::RED),
        PixelFormat::Rgb8 => (glow::RGB8 as i32, glow::RGB),
        PixelFormat::Rgba8 => (glow::RGBA8 as i32, glow::RGBA),
    }
}

#[cfg(test)]
#[path = "opengl_convert_tests.rs"]
mod tests;
