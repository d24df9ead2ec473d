/// Opaque GPU object names
///
/// OpenGL names every object with a non-zero unsigned integer; zero means
/// "no object". The handles below keep that representation but give every
/// object kind its own type so a texture name can never be passed where a
/// program is expected.

use std::fmt;
use std::num::NonZeroU32;

macro_rules! gpu_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub NonZeroU32);

        impl $name {
            /// Raw object name
            pub fn raw(self) -> u32 {
                self.0.get()
            }

            /// Wrap a raw object name (None for 0)
            pub fn from_raw(raw: u32) -> Option<Self> {
                NonZeroU32::new(raw).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

gpu_handle!(
    /// One compiled (or compiling) shader stage
    StageId
);
gpu_handle!(
    /// A program object
    ProgramId
);
gpu_handle!(
    /// A buffer object (vertex or element data)
    BufferId
);
gpu_handle!(
    /// A vertex array object (attribute bindings + element buffer)
    VertexArrayId
);
gpu_handle!(
    /// A texture object
    TextureId
);

/// Location of an active uniform inside a linked program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub u32);

#[cfg(test)]
#[path = "handles_tests.rs"]
mod tests;
