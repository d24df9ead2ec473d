/// Unit tests for the scene vertex data (no GPU required)

use super::*;

#[test]
fn test_triangle_has_three_positions() {
    let vertices = triangle_vertices().unwrap();

    assert_eq!(vertices.record_count(), 3);
    assert_eq!(vertices.layout().stride(), 12);
    assert_eq!(vertices.read_f32(2, 0).unwrap(), vec![0.0, 0.5, 0.0]);
}

#[test]
fn test_rectangle_indices_form_two_triangles() {
    let vertices = rectangle_vertices().unwrap();
    let indices = rectangle_indices();

    indices.validate(vertices.record_count()).unwrap();
    let triangles: Vec<[u32; 3]> = indices.triangles().collect();
    assert_eq!(triangles, vec![[0, 1, 3], [1, 2, 3]]);
}

#[test]
fn test_colored_triangle_interleaving() {
    let vertices = colored_triangle_vertices().unwrap();

    assert_eq!(vertices.layout().stride(), 24);
    assert_eq!(vertices.read_f32(0, 1).unwrap(), vec![1.0, 0.0, 0.0]);
    assert_eq!(vertices.read_f32(1, 1).unwrap(), vec![0.0, 1.0, 0.0]);
}

#[test]
fn test_textured_quad_layout() {
    let vertices = textured_quad_vertices().unwrap();

    assert_eq!(vertices.record_count(), 4);
    assert_eq!(vertices.layout().stride(), 32);
    assert_eq!(vertices.layout().attribute(2).unwrap().offset, 24);
    assert_eq!(vertices.read_f32(3, 2).unwrap(), vec![0.0, 1.0]);
    rectangle_indices().validate(vertices.record_count()).unwrap();
}

#[test]
fn test_pulse_stays_in_unit_range() {
    assert!((pulse(0.0) - 0.5).abs() < 1e-6);
    assert!((pulse(std::f32::consts::FRAC_PI_2) - 1.0).abs() < 1e-6);
    for step in 0..100 {
        let value = pulse(step as f32 * 0.37);
        assert!((0.0..=1.0).contains(&value), "{}", value);
    }
}
