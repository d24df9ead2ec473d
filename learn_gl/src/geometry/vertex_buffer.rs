/// CPU-side interleaved vertex data paired with its layout

use crate::error::{Error, Result};
use crate::engine_report;
use crate::geometry::{ComponentType, VertexLayout};

/// Interleaved vertex records
///
/// Immutable snapshot: the bytes are uploaded as-is by `Mesh::new`.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBuffer {
    data: Vec<u8>,
    layout: VertexLayout,
}

impl VertexBuffer {
    /// Wrap raw bytes
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLayout` if the layout is inconsistent or the
    /// byte length is not a whole number of records.
    pub fn new(data: Vec<u8>, layout: VertexLayout) -> Result<Self> {
        layout.validate()?;
        if data.len() % layout.stride() as usize != 0 {
            return Err(engine_report!("learngl::VertexBuffer", Error::InvalidLayout(format!(
                "{} bytes is not a multiple of the {}-byte stride",
                data.len(),
                layout.stride()
            ))));
        }
        Ok(Self { data, layout })
    }

    /// Build from a flat list of floats (the usual tutorial vertex array)
    ///
    /// # Example
    ///
    /// ```
    /// use learn_gl::learngl::geometry::{VertexBuffer, VertexLayout, ComponentType};
    ///
    /// let layout = VertexLayout::packed(&[(0, 3, ComponentType::F32)]).unwrap();
    /// let triangle = VertexBuffer::from_f32(&[
    ///     -0.5, -0.5, 0.0,
    ///      0.5, -0.5, 0.0,
    ///      0.0,  0.5, 0.0,
    /// ], layout).unwrap();
    /// assert_eq!(triangle.record_count(), 3);
    /// ```
    pub fn from_f32(values: &[f32], layout: VertexLayout) -> Result<Self> {
        Self::new(bytemuck::cast_slice(values).to_vec(), layout)
    }

    /// Layout describing each record
    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Number of vertex records
    pub fn record_count(&self) -> usize {
        self.data.len() / self.layout.stride() as usize
    }

    /// Bytes of attribute `location` in record `record`
    ///
    /// Reads exactly `components * component size` bytes starting at
    /// `record * stride + offset`, regardless of the other attributes.
    pub fn attribute_bytes(&self, record: usize, location: u32) -> Result<&[u8]> {
        let attribute = self.layout.attribute(location).ok_or_else(|| {
            Error::InvalidLayout(format!("no attribute at location {}", location))
        })?;
        if record >= self.record_count() {
            return Err(Error::InvalidResource(format!(
                "record {} out of range ({} records)",
                record,
                self.record_count()
            )));
        }
        let start = record * self.layout.stride() as usize + attribute.offset as usize;
        let end = start + attribute.size_bytes() as usize;
        Ok(&self.data[start..end])
    }

    /// Decode a float attribute of one record
    pub fn read_f32(&self, record: usize, location: u32) -> Result<Vec<f32>> {
        match self.layout.attribute(location) {
            Some(attribute) if attribute.component_type != ComponentType::F32 => {
                return Err(Error::InvalidLayout(format!(
                    "attribute {} is {:?}, not F32",
                    location, attribute.component_type
                )));
            }
            _ => {}
        }
        let bytes = self.attribute_bytes(record, location)?;
        Ok(bytemuck::pod_collect_to_vec::<u8, f32>(bytes))
    }
}

#[cfg(test)]
#[path = "vertex_buffer_tests.rs"]
mod tests;
