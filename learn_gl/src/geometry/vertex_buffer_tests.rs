/// Unit tests for vertex_buffer.rs

use crate::error::Error;
use crate::geometry::{ComponentType, VertexAttribute, VertexBuffer, VertexLayout};

fn position_color_layout() -> VertexLayout {
    VertexLayout::packed(&[(0, 3, ComponentType::F32), (1, 3, ComponentType::F32)]).unwrap()
}

#[rustfmt::skip]
const COLORED_TRIANGLE: [f32; 18] = [
    // positions        // colors
     0.5, -0.5, 0.0,    1.0, 0.0, 0.0,
    -0.5, -0.5, 0.0,    0.0, 1.0, 0.0,
     0.0,  0.5, 0.0,    0.0, 0.0, 1.0,
];

#[test]
fn test_record_count() {
    let buffer = VertexBuffer::from_f32(&COLORED_TRIANGLE, position_color_layout()).unwrap();

    assert_eq!(buffer.record_count(), 3);
    assert_eq!(buffer.as_bytes().len(), 18 * 4);
    assert_eq!(buffer.layout().stride(), 24);
}

#[test]
fn test_partial_record_rejected() {
    let result = VertexBuffer::from_f32(&COLORED_TRIANGLE[..17], position_color_layout());
    assert!(matches!(result, Err(Error::InvalidLayout(_))));
}

#[test]
fn test_empty_buffer_has_no_records() {
    let buffer = VertexBuffer::new(Vec::new(), position_color_layout()).unwrap();
    assert_eq!(buffer.record_count(), 0);
}

#[test]
fn test_read_attribute_of_each_record() {
    let buffer = VertexBuffer::from_f32(&COLORED_TRIANGLE, position_color_layout()).unwrap();

    assert_eq!(buffer.read_f32(0, 0).unwrap(), vec![0.5, -0.5, 0.0]);
    assert_eq!(buffer.read_f32(0, 1).unwrap(), vec![1.0, 0.0, 0.0]);
    assert_eq!(buffer.read_f32(1, 1).unwrap(), vec![0.0, 1.0, 0.0]);
    assert_eq!(buffer.read_f32(2, 0).unwrap(), vec![0.0, 0.5, 0.0]);
    assert_eq!(buffer.read_f32(2, 1).unwrap(), vec![0.0, 0.0, 1.0]);
}

#[test]
fn test_attribute_bytes_respects_padding() {
    // position (vec2) at 0, texcoord (vec2) at 12, stride 20 (unused bytes 8..12 and 16..20)
    let layout = VertexLayout::new(
        20,
        vec![VertexAttribute::float(0, 2, 0), VertexAttribute::float(1, 2, 12)],
    )
    .unwrap();
    #[rustfmt::skip]
    let data = [
        1.0f32, 2.0, 99.0, 3.0, 4.0,
        5.0,    6.0, 99.0, 7.0, 8.0,
    ];
    let buffer = VertexBuffer::from_f32(&data, layout).unwrap();

    assert_eq!(buffer.record_count(), 2);
    assert_eq!(buffer.attribute_bytes(1, 1).unwrap().len(), 8);
    assert_eq!(buffer.read_f32(0, 1).unwrap(), vec![3.0, 4.0]);
    assert_eq!(buffer.read_f32(1, 0).unwrap(), vec![5.0, 6.0]);
    assert_eq!(buffer.read_f32(1, 1).unwrap(), vec![7.0, 8.0]);
}

#[test]
fn test_unknown_location_rejected() {
    let buffer = VertexBuffer::from_f32(&COLORED_TRIANGLE, position_color_layout()).unwrap();
    assert!(matches!(buffer.read_f32(0, 7), Err(Error::InvalidLayout(_))));
}

#[test]
fn test_record_out_of_range_rejected() {
    let buffer = VertexBuffer::from_f32(&COLORED_TRIANGLE, position_color_layout()).unwrap();
    assert!(matches!(buffer.attribute_bytes(3, 0), Err(Error::InvalidResource(_))));
}

#[test]
fn test_read_f32_on_integer_attribute_rejected() {
    let layout = VertexLayout::packed(&[(0, 4, ComponentType::U8)]).unwrap();
    let buffer = VertexBuffer::new(vec![255, 0, 0, 255], layout).unwrap();

    assert_eq!(buffer.attribute_bytes(0, 0).unwrap(), &[255, 0, 0, 255]);
    assert!(matches!(buffer.read_f32(0, 0), Err(Error::InvalidLayout(_))));
}
