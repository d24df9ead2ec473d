//! Error types for the LearnGL core
//!
//! This module defines the error type used throughout the crate: shader
//! compilation and linking, vertex layout validation, image loading and
//! backend failures.

use std::fmt;
use std::path::PathBuf;

/// Result type for LearnGL operations
pub type Result<T> = std::result::Result<T, Error>;

/// Step of program construction that produced a compilation error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStage {
    /// Vertex stage compilation
    Vertex,
    /// Fragment stage compilation
    Fragment,
    /// Linking both stages into a program
    Link,
}

impl fmt::Display for CompileStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileStage::Vertex => write!(f, "vertex"),
            CompileStage::Fragment => write!(f, "fragment"),
            CompileStage::Link => write!(f, "link"),
        }
    }
}

/// LearnGL errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend-specific error (driver refused to create an object, etc.)
    BackendError(String),

    /// Invalid resource (destroyed program, foreign device, etc.)
    InvalidResource(String),

    /// Initialization failed (window, context, function loader)
    InitializationFailed(String),

    /// A shader stage failed to compile, or the program failed to link
    Compilation {
        /// Failing step
        stage: CompileStage,
        /// Driver diagnostic text
        log: String,
    },

    /// A file could not be read or decoded
    Load {
        /// Path of the offending file
        path: PathBuf,
        /// Human readable reason
        reason: String,
    },

    /// Attribute descriptors are inconsistent with each other or with the data
    InvalidLayout(String),

    /// An index buffer references a vertex that does not exist
    IndexOutOfRange {
        /// Position of the offending value inside the index buffer
        position: usize,
        /// The offending index value
        index: u32,
        /// Number of records in the vertex buffer
        vertex_count: usize,
    },
}

impl Error {
    /// True when the error comes from the link step
    pub fn is_link_error(&self) -> bool {
        matches!(self, Error::Compilation { stage: CompileStage::Link, .. })
    }

    /// Failing stage of a compilation error
    pub fn compile_stage(&self) -> Option<CompileStage> {
        match self {
            Error::Compilation { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::Compilation { stage: CompileStage::Link, log } => {
                write!(f, "Program link failed: {}", log.trim_end())
            }
            Error::Compilation { stage, log } => {
                write!(f, "Shader compilation failed ({} stage): {}", stage, log.trim_end())
            }
            Error::Load { path, reason } => {
                write!(f, "Failed to load '{}': {}", path.display(), reason)
            }
            Error::InvalidLayout(msg) => write!(f, "Invalid vertex layout: {}", msg),
            Error::IndexOutOfRange { position, index, vertex_count } => write!(
                f,
                "Index {} at position {} is out of range (vertex count = {})",
                index, position, vertex_count
            ),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error value with file:line information and evaluate to it
///
/// # Example
///
/// ```no_run
/// # use learn_gl::engine_report;
/// # use learn_gl::learngl::Error;
/// let err = engine_report!("learngl::Mesh", Error::InvalidLayout("stride is zero".to_string()));
/// ```
#[macro_export]
macro_rules! engine_report {
    ($source:expr, $error:expr) => {{
        let error = $error;
        $crate::engine_error!($source, "{}", error);
        error
    }};
}

/// Log an ERROR message and build an `Error::BackendError` from it
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::learngl::Error::BackendError(message)
    }};
}

/// Log an ERROR message and return `Err(Error::BackendError)` from the current function
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
