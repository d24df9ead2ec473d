/// Geometry module - vertex layouts, CPU-side buffers and uploaded meshes

pub mod vertex_layout;
pub mod vertex_buffer;
pub mod index_buffer;
pub mod mesh;

pub use vertex_layout::*;
pub use vertex_buffer::*;
pub use index_buffer::*;
pub use mesh::*;
