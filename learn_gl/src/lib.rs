/*!
# LearnGL

Core types for the LearnOpenGL "getting started" programs.

The crate is backend-agnostic: it talks to the GPU through the
`GraphicsDevice` trait, which the `learn_gl_renderer_opengl` crate implements
on top of an OpenGL 3.3 core context.

## Architecture

- **GraphicsDevice**: immediate-mode context trait (shaders, buffers, textures, draws)
- **ShaderProgram**: compiled and linked program with typed uniform setters
- **VertexLayout / VertexBuffer / IndexBuffer**: interleaved vertex data and its validation
- **Mesh**: uploaded vertex array, drawn with an explicit program
- **Image / Texture2D**: decoded images and uploaded 2D textures

GPU objects are owned by their creator and released on drop.
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod graphics_device;
pub mod shader;
pub mod geometry;
pub mod texture;

// Main learngl namespace module
pub mod learngl {
    // Error types
    pub use crate::error::{Error, Result, CompileStage};

    // Logging hub
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::RendererConfig;

    // Graphics device trait
    pub use crate::graphics_device::GraphicsDevice;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Device-level types (handles, enums, descriptors)
    pub mod render {
        pub use crate::graphics_device::*;
    }

    // Shader programs
    pub mod shader {
        pub use crate::shader::*;
    }

    // Vertex data and meshes
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Images and textures
    pub mod texture {
        pub use crate::texture::*;
    }
}

// Re-export math library at crate root
pub use glam;
