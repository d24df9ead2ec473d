/// Graphics device module - the context abstraction and the plain data it exchanges

// Module declarations
pub mod graphics_device;
pub mod handles;
pub mod uniform;
pub mod texture;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use handles::*;
pub use uniform::*;
pub use texture::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
