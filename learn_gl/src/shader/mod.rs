/// Shader module - compiled and linked GPU programs

pub mod shader_program;

pub use shader_program::*;
