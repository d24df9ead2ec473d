/// Unit tests for opengl_convert.rs (no GPU required)

use super::*;

#[test]
fn test_clear_flags_mask() {
    assert_eq!(clear_flags_to_gl(ClearFlags::COLOR), glow::COLOR_BUFFER_BIT);
    assert_eq!(
        clear_flags_to_gl(ClearFlags::COLOR | ClearFlags::DEPTH),
        glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT
    );
    assert_eq!(clear_flags_to_gl(ClearFlags::empty()), 0);
}

#[test]
fn test_pixel_format_follows_channel_count() {
    assert_eq!(pixel_format_to_gl(PixelFormat::Rgba8), (glow::RGBA8 as i32, glow::RGBA));
    assert_eq!(pixel_format_to_gl(PixelFormat::Rgb8), (glow::RGB8 as i32, glow::RGB));
    assert_eq!(pixel_format_to_gl(PixelFormat::R8).1, glow::RED);
}

#[test]
fn test_min_filter_mipmap_variants() {
    assert_eq!(min_filter_to_gl(FilterMode::Linear, true), glow::LINEAR_MIPMAP_LINEAR as i32);
    assert_eq!(min_filter_to_gl(FilterMode::Nearest, true), glow::NEAREST_MIPMAP_LINEAR as i32);
    assert_eq!(min_filter_to_gl(FilterMode::Linear, false), glow::LINEAR as i32);
    assert_eq!(mag_filter_to_gl(FilterMode::Nearest), glow::NEAREST as i32);
}

#[test]
fn test_wrap_modes() {
    assert_eq!(wrap_mode_to_gl(WrapMode::Repeat), glow::REPEAT as i32);
    assert_eq!(wrap_mode_to_gl(WrapMode::MirroredRepeat), glow::MIRRORED_REPEAT as i32);
    assert_eq!(wrap_mode_to_gl(WrapMode::ClampToEdge), glow::CLAMP_TO_EDGE as i32);
    assert_eq!(wrap_mode_to_gl(WrapMode::ClampToBorder), glow::CLAMP_TO_BORDER as i32);
}

#[test]
fn test_draw_enums() {
    assert_eq!(topology_to_gl(PrimitiveTopology::TriangleList), glow::TRIANGLES);
    assert_eq!(index_type_to_gl(IndexType::U16), glow::UNSIGNED_SHORT);
    assert_eq!(index_type_to_gl(IndexType::U32), glow::UNSIGNED_INT);
    assert_eq!(polygon_mode_to_gl(PolygonMode::Line), glow::LINE);
    assert_eq!(buffer_target_to_gl(BufferTarget::Index), glow::ELEMENT_ARRAY_BUFFER);
    assert_eq!(shader_stage_to_gl(ShaderStage::Fragment), glow::FRAGMENT_SHADER);
}

#[test]
fn test_component_types() {
    assert_eq!(component_type_to_gl(ComponentType::F32), glow::FLOAT);
    assert_eq!(component_type_to_gl(ComponentType::U8), glow::UNSIGNED_BYTE);
    assert_eq!(component_type_to_gl(ComponentType::I16), glow::SHORT);
}
