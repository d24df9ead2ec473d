/// GPU mesh: vertex array + vertex buffer (+ element buffer)
///
/// `Mesh::new` validates the CPU-side data before touching the device, so an
/// inconsistent layout or an out-of-range index never reaches the driver.

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::geometry::{IndexBuffer, VertexBuffer};
use crate::graphics_device::{
    GraphicsDevice, BufferTarget, BufferId, VertexArrayId, IndexType, PrimitiveTopology,
};
use crate::shader::ShaderProgram;
use crate::{engine_debug, engine_report};

const SOURCE: &str = "learngl::Mesh";

/// Element buffer and what `draw_elements` needs to read it
#[derive(Debug, Clone, Copy)]
struct ElementBuffer {
    buffer: BufferId,
    count: u32,
    index_type: IndexType,
}

/// Uploaded, drawable geometry
pub struct Mesh {
    device: Rc<dyn GraphicsDevice>,
    vertex_array: Option<VertexArrayId>,
    vertex_buffer: Option<BufferId>,
    element_buffer: Option<ElementBuffer>,
    vertex_count: u32,
    topology: PrimitiveTopology,
}

impl Mesh {
    /// Upload vertices (and optional indices) and record the attribute bindings
    ///
    /// # Errors
    ///
    /// - `Error::InvalidLayout` for an inconsistent vertex layout
    /// - `Error::IndexOutOfRange` when an index addresses a missing vertex
    /// - `Error::BackendError` when the device fails to create an object
    ///
    /// Objects created before a failure are released.
    pub fn new(
        device: Rc<dyn GraphicsDevice>,
        vertices: &VertexBuffer,
        indices: Option<&IndexBuffer>,
        topology: PrimitiveTopology,
    ) -> Result<Self> {
        vertices.layout().validate()?;
        if let Some(indices) = indices {
            indices.validate(vertices.record_count())?;
        }
        let vertex_count = u32::try_from(vertices.record_count()).map_err(|_| {
            engine_report!(SOURCE, Error::InvalidResource(format!(
                "{} vertices exceed the drawable range",
                vertices.record_count()
            )))
        })?;

        let mut mesh = Self {
            device: device.clone(),
            vertex_array: None,
            vertex_buffer: None,
            element_buffer: None,
            vertex_count,
            topology,
        };

        let vertex_array = device.create_vertex_array()?;
        mesh.vertex_array = Some(vertex_array);
        device.bind_vertex_array(Some(vertex_array));

        let upload = mesh.upload(vertices, indices);
        device.bind_vertex_array(None);
        upload?;

        engine_debug!(
            SOURCE,
            "Mesh uploaded: {} vertices, {} indices, {} attributes",
            vertex_count,
            indices.map_or(0, |i| i.len()),
            vertices.layout().attributes().len()
        );
        Ok(mesh)
    }

    /// Fill the bound vertex array
    fn upload(&mut self, vertices: &VertexBuffer, indices: Option<&IndexBuffer>) -> Result<()> {
        self.vertex_buffer = Some(self.device.create_buffer(BufferTarget::Vertex, vertices.as_bytes())?);

        if let Some(indices) = indices {
            let buffer = self.device.create_buffer(BufferTarget::Index, &indices.to_bytes())?;
            self.element_buffer = Some(ElementBuffer {
                buffer,
                count: indices.len() as u32,
                index_type: indices.index_type(),
            });
        }

        let layout = vertices.layout();
        for attribute in layout.attributes() {
            self.device.set_vertex_attribute(attribute, layout.stride());
        }
        Ok(())
    }

    /// Draw with `program`
    ///
    /// Activates the program, binds this mesh's vertex array and issues an
    /// indexed draw when the mesh has indices.
    ///
    /// # Errors
    ///
    /// `Error::InvalidResource` when the program is destroyed or belongs to
    /// another device.
    pub fn draw(&self, program: &ShaderProgram) -> Result<()> {
        if !program.is_linked() {
            return Err(engine_report!(SOURCE, Error::InvalidResource(
                "draw with a destroyed shader program".to_string()
            )));
        }
        if !Rc::ptr_eq(program.device(), &self.device) {
            return Err(engine_report!(SOURCE, Error::InvalidResource(
                "shader program belongs to another device".to_string()
            )));
        }

        program.use_program();
        self.device.bind_vertex_array(self.vertex_array);
        match self.element_buffer {
            Some(elements) => self.device.draw_elements(self.topology, elements.count, elements.index_type, 0),
            None => self.device.draw_arrays(self.topology, 0, self.vertex_count),
        }
        Ok(())
    }

    /// Number of vertex records
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Number of indices, 0 for non-indexed meshes
    pub fn index_count(&self) -> u32 {
        self.element_buffer.map_or(0, |e| e.count)
    }

    /// True when drawn with `draw_elements`
    pub fn is_indexed(&self) -> bool {
        self.element_buffer.is_some()
    }

    /// Primitive topology
    pub fn topology(&self) -> PrimitiveTopology {
        self.topology
    }

    /// Vertex array handle
    pub fn vertex_array(&self) -> Option<VertexArrayId> {
        self.vertex_array
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        if let Some(vertex_array) = self.vertex_array.take() {
            self.device.delete_vertex_array(vertex_array);
        }
        if let Some(buffer) = self.vertex_buffer.take() {
            self.device.delete_buffer(buffer);
        }
        if let Some(elements) = self.element_buffer.take() {
            self.device.delete_buffer(elements.buffer);
        }
    }
}

impl std::fmt::Debug for Mesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mesh")
            .field("vertex_array", &self.vertex_array)
            .field("vertex_count", &self.vertex_count)
            .field("index_count", &self.index_count())
            .field("topology", &self.topology)
            .finish()
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
