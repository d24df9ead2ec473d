/// Linked GPU programs built from a vertex and a fragment source.
///
/// A `ShaderProgram` only exists once both stages compiled and the link
/// succeeded. Intermediate stage objects are owned by `CompiledStage` guards
/// and released on every construction path.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use crate::error::{CompileStage, Error, Result};
use crate::graphics_device::{
    GraphicsDevice, ShaderStage, StageId, ProgramId, UniformLocation, UniformValue,
};
use crate::{engine_debug, engine_report, engine_trace, engine_warn};

const SOURCE: &str = "learngl::ShaderProgram";

// ===== STAGE GUARD =====

/// One shader stage owned during program construction
///
/// Deletes the stage object when dropped.
struct CompiledStage<'a> {
    device: &'a dyn GraphicsDevice,
    id: StageId,
}

impl<'a> CompiledStage<'a> {
    fn compile(device: &'a dyn GraphicsDevice, stage: ShaderStage, source: &str) -> Result<Self> {
        let compile_stage = match stage {
            ShaderStage::Vertex => CompileStage::Vertex,
            ShaderStage::Fragment => CompileStage::Fragment,
        };

        let guard = Self { device, id: device.create_stage(stage)? };
        let status = device.compile_stage(guard.id, source);
        if !status.success {
            return Err(engine_report!(SOURCE, Error::Compilation {
                stage: compile_stage,
                log: status.log,
            }));
        }
        if !status.log.trim().is_empty() {
            engine_debug!(SOURCE, "{} stage compiled with warnings: {}", compile_stage, status.log.trim_end());
        }
        Ok(guard)
    }
}

impl Drop for CompiledStage<'_> {
    fn drop(&mut self) {
        self.device.delete_stage(self.id);
    }
}

// ===== SHADER PROGRAM =====

/// Observable program state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramState {
    /// Linked and usable
    Linked,
    /// GPU program released
    Destroyed,
}

/// Linked shader program
///
/// Exclusively owned; the GPU program is released by `destroy()` or on drop,
/// whichever comes first.
///
/// # Example
///
/// ```ignore
/// let program = ShaderProgram::new(device.clone(), VERTEX_SRC, FRAGMENT_SRC)?;
/// program.use_program();
/// program.set_uniform("ourColor", glam::Vec4::new(0.0, 1.0, 0.0, 1.0));
/// mesh.draw(&program)?;
/// ```
pub struct ShaderProgram {
    device: Rc<dyn GraphicsDevice>,
    id: Option<ProgramId>,
}

impl ShaderProgram {
    /// Compile both stages and link them
    ///
    /// # Errors
    ///
    /// - `Error::Compilation { stage: Vertex | Fragment, .. }` when a stage
    ///   fails to compile
    /// - `Error::Compilation { stage: Link, .. }` when linking fails
    /// - `Error::BackendError` when the driver refuses to create an object
    pub fn new(device: Rc<dyn GraphicsDevice>, vertex_source: &str, fragment_source: &str) -> Result<Self> {
        let id = {
            let vertex = CompiledStage::compile(device.as_ref(), ShaderStage::Vertex, vertex_source)?;
            let fragment = CompiledStage::compile(device.as_ref(), ShaderStage::Fragment, fragment_source)?;

            let id = device.create_program()?;
            let status = device.link_program(id, &[vertex.id, fragment.id]);
            if !status.success {
                device.delete_program(id);
                return Err(engine_report!(SOURCE, Error::Compilation {
                    stage: CompileStage::Link,
                    log: status.log,
                }));
            }
            id
        };

        engine_debug!(SOURCE, "Program {} linked", id);
        Ok(Self { device, id: Some(id) })
    }

    /// Read both sources from UTF-8 files, then compile and link
    ///
    /// # Errors
    ///
    /// `Error::Load` when a file cannot be read, otherwise as `new`.
    pub fn from_files(
        device: Rc<dyn GraphicsDevice>,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let vertex_source = read_source(vertex_path.as_ref())?;
        let fragment_source = read_source(fragment_path.as_ref())?;
        Self::new(device, &vertex_source, &fragment_source)
    }

    /// Program handle, None once destroyed
    pub fn id(&self) -> Option<ProgramId> {
        self.id
    }

    /// Current state
    pub fn state(&self) -> ProgramState {
        match self.id {
            Some(_) => ProgramState::Linked,
            None => ProgramState::Destroyed,
        }
    }

    /// True while the GPU program is alive
    pub fn is_linked(&self) -> bool {
        self.id.is_some()
    }

    /// Device this program lives on
    pub fn device(&self) -> &Rc<dyn GraphicsDevice> {
        &self.device
    }

    /// Make this the active program (idempotent)
    pub fn use_program(&self) {
        match self.id {
            Some(id) => self.device.use_program(Some(id)),
            None => engine_warn!(SOURCE, "use_program() on a destroyed program ignored"),
        }
    }

    /// Location of an active uniform
    pub fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        self.id.and_then(|id| self.device.uniform_location(id, name))
    }

    /// Set a uniform by name
    ///
    /// The program must be active (`use_program()` first). An unknown name is
    /// not an error: the call does nothing.
    pub fn set_uniform<V: Into<UniformValue>>(&self, name: &str, value: V) {
        let Some(id) = self.id else {
            engine_warn!(SOURCE, "set_uniform('{}') on a destroyed program ignored", name);
            return;
        };

        if cfg!(debug_assertions) && self.device.active_program() != Some(id) {
            engine_warn!(SOURCE, "set_uniform('{}') while program {} is not active", name, id);
        }

        match self.device.uniform_location(id, name) {
            Some(location) => self.device.set_uniform(location, &value.into()),
            None => engine_trace!(SOURCE, "uniform '{}' not found in program {}", name, id),
        }
    }

    /// Set a `bool` uniform
    pub fn set_bool(&self, name: &str, value: bool) {
        self.set_uniform(name, value);
    }

    /// Set an `int` uniform (also used for sampler units)
    pub fn set_int(&self, name: &str, value: i32) {
        self.set_uniform(name, value);
    }

    /// Set a `float` uniform
    pub fn set_float(&self, name: &str, value: f32) {
        self.set_uniform(name, value);
    }

    /// Release the GPU program; later calls do nothing
    pub fn destroy(&mut self) {
        if let Some(id) = self.id.take() {
            self.device.delete_program(id);
            engine_debug!(SOURCE, "Program {} destroyed", id);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl std::fmt::Debug for ShaderProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderProgram").field("id", &self.id).finish()
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        engine_report!(SOURCE, Error::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    })
}

#[cfg(test)]
#[path = "shader_program_tests.rs"]
mod tests;
