/// Uniform values accepted by `GraphicsDevice::set_uniform`

use glam::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4, IVec2, IVec3, IVec4};

/// A value for one uniform
///
/// Matrices are stored column-major, as GLSL expects them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// `bool` (uploaded as an int)
    Bool(bool),
    /// `int` or `sampler*` unit
    Int(i32),
    /// `uint`
    UInt(u32),
    /// `float`
    Float(f32),
    /// `vec2`
    Vec2([f32; 2]),
    /// `vec3`
    Vec3([f32; 3]),
    /// `vec4`
    Vec4([f32; 4]),
    /// `ivec2`
    IVec2([i32; 2]),
    /// `ivec3`
    IVec3([i32; 3]),
    /// `ivec4`
    IVec4([i32; 4]),
    /// `mat2`
    Mat2([f32; 4]),
    /// `mat3`
    Mat3([f32; 9]),
    /// `mat4`
    Mat4([f32; 16]),
}

impl UniformValue {
    /// GLSL type name of the value
    pub fn glsl_type(&self) -> &'static str {
        match self {
            UniformValue::Bool(_) => "bool",
            UniformValue::Int(_) => "int",
            UniformValue::UInt(_) => "uint",
            UniformValue::Float(_) => "float",
            UniformValue::Vec2(_) => "vec2",
            UniformValue::Vec3(_) => "vec3",
            UniformValue::Vec4(_) => "vec4",
            UniformValue::IVec2(_) => "ivec2",
            UniformValue::IVec3(_) => "ivec3",
            UniformValue::IVec4(_) => "ivec4",
            UniformValue::Mat2(_) => "mat2",
            UniformValue::Mat3(_) => "mat3",
            UniformValue::Mat4(_) => "mat4",
        }
    }
}

impl From<bool> for UniformValue {
    fn from(value: bool) -> Self {
        UniformValue::Bool(value)
    }
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        UniformValue::Int(value)
    }
}

impl From<u32> for UniformValue {
    fn from(value: u32) -> Self {
        UniformValue::UInt(value)
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        UniformValue::Float(value)
    }
}

impl From<[f32; 2]> for UniformValue {
    fn from(value: [f32; 2]) -> Self {
        UniformValue::Vec2(value)
    }
}

impl From<[f32; 3]> for UniformValue {
    fn from(value: [f32; 3]) -> Self {
        UniformValue::Vec3(value)
    }
}

impl From<[f32; 4]> for UniformValue {
    fn from(value: [f32; 4]) -> Self {
        UniformValue::Vec4(value)
    }
}

impl From<Vec2> for UniformValue {
    fn from(value: Vec2) -> Self {
        UniformValue::Vec2(value.to_array())
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        UniformValue::Vec3(value.to_array())
    }
}

impl From<Vec4> for UniformValue {
    fn from(value: Vec4) -> Self {
        UniformValue::Vec4(value.to_array())
    }
}

impl From<IVec2> for UniformValue {
    fn from(value: IVec2) -> Self {
        UniformValue::IVec2(value.to_array())
    }
}

impl From<IVec3> for UniformValue {
    fn from(value: IVec3) -> Self {
        UniformValue::IVec3(value.to_array())
    }
}

impl From<IVec4> for UniformValue {
    fn from(value: IVec4) -> Self {
        UniformValue::IVec4(value.to_array())
    }
}

impl From<Mat2> for UniformValue {
    fn from(value: Mat2) -> Self {
        UniformValue::Mat2(value.to_cols_array())
    }
}

impl From<Mat3> for UniformValue {
    fn from(value: Mat3) -> Self {
        UniformValue::Mat3(value.to_cols_array())
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        UniformValue::Mat4(value.to_cols_array())
    }
}

#[cfg(test)]
#[path = "uniform_tests.rs"]
mod tests;
