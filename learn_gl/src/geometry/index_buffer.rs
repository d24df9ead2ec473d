/// Element indices into a vertex buffer

use crate::error::{Error, Result};
use crate::engine_report;
use crate::graphics_device::IndexType;

/// Ordered list of vertex indices
///
/// Enables shared-vertex topology: a quad is 4 unique vertices and 6 indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexBuffer {
    indices: Vec<u32>,
    index_type: IndexType,
}

impl IndexBuffer {
    /// 32-bit indices
    pub fn from_u32(indices: Vec<u32>) -> Self {
        Self { indices, index_type: IndexType::U32 }
    }

    /// 16-bit indices
    pub fn from_u16(indices: &[u16]) -> Self {
        Self {
            indices: indices.iter().map(|&i| i as u32).collect(),
            index_type: IndexType::U16,
        }
    }

    /// Element type used on upload
    pub fn index_type(&self) -> IndexType {
        self.index_type
    }

    /// Indices as u32 values
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of indices
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when there are no indices
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Largest index, None when empty
    pub fn max_index(&self) -> Option<u32> {
        self.indices.iter().copied().max()
    }

    /// Bytes as uploaded to the element buffer (native endianness)
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.index_type {
            IndexType::U16 => {
                let narrow: Vec<u16> = self.indices.iter().map(|&i| i as u16).collect();
                bytemuck::cast_slice(&narrow).to_vec()
            }
            IndexType::U32 => bytemuck::cast_slice(&self.indices).to_vec(),
        }
    }

    /// Check that every index addresses an existing record
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfRange` for the first index `>= vertex_count`.
    pub fn validate(&self, vertex_count: usize) -> Result<()> {
        match self
            .indices
            .iter()
            .enumerate()
            .find(|(_, &index)| index as usize >= vertex_count)
        {
            Some((position, &index)) => Err(engine_report!(
                "learngl::IndexBuffer",
                Error::IndexOutOfRange { position, index, vertex_count }
            )),
            None => Ok(()),
        }
    }

    /// Triangles of a triangle-list interpretation (trailing indices ignored)
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

#[cfg(test)]
#[path = "index_buffer_tests.rs"]
mod tests;
