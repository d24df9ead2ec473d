//! Vertex layout: how the bytes of one interleaved vertex record are split
//! into attributes.
//!
//! # Example
//!
//! ```text
//! position (vec3) | color (vec3) | texcoord (vec2)      stride = 32 bytes
//! 0             12 12          24 24              32
//! ```

use std::ops::Range;
use rustc_hash::FxHashSet;
use crate::error::{Error, Result};
use crate::engine_report;

/// Scalar type of one attribute component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    /// 32-bit float
    F32,
    /// 32-bit signed integer
    I32,
    /// 32-bit unsigned integer
    U32,
    /// 16-bit signed integer
    I16,
    /// 16-bit unsigned integer
    U16,
    /// 8-bit signed integer
    I8,
    /// 8-bit unsigned integer
    U8,
}

impl ComponentType {
    /// Size in bytes of one component
    pub fn size_bytes(&self) -> u32 {
        match self {
            ComponentType::F32 | ComponentType::I32 | ComponentType::U32 => 4,
            ComponentType::I16 | ComponentType::U16 => 2,
            ComponentType::I8 | ComponentType::U8 => 1,
        }
    }

    /// True for integer component types
    pub fn is_integer(&self) -> bool {
        !matches!(self, ComponentType::F32)
    }
}

/// One attribute inside a vertex record
///
/// Together with the owning layout's stride this is the full attribute
/// descriptor: (location, component count, component type, stride, offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Attribute location in the vertex shader (`layout (location = N)`)
    pub location: u32,
    /// Number of components (1..=4)
    pub components: u8,
    /// Component type
    pub component_type: ComponentType,
    /// Integer components are normalized to [0, 1] / [-1, 1] floats
    pub normalized: bool,
    /// Byte offset from the start of the vertex record
    pub offset: u32,
}

impl VertexAttribute {
    /// Float attribute with `components` components at `offset`
    pub fn float(location: u32, components: u8, offset: u32) -> Self {
        Self {
            location,
            components,
            component_type: ComponentType::F32,
            normalized: false,
            offset,
        }
    }

    /// Size in bytes of the attribute (`components * component size`)
    pub fn size_bytes(&self) -> u32 {
        self.components as u32 * self.component_type.size_bytes()
    }

    /// Byte range occupied inside a record, None if the end overflows `u32`
    pub fn byte_range(&self) -> Option<Range<u32>> {
        let end = self.offset.checked_add(self.size_bytes())?;
        Some(self.offset..end)
    }
}

/// Interleaved vertex layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    stride: u32,
    attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    /// Build a layout with an explicit stride and attribute offsets
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLayout` if the descriptors are inconsistent
    /// (see `validate`).
    pub fn new(stride: u32, attributes: Vec<VertexAttribute>) -> Result<Self> {
        let layout = Self { stride, attributes };
        layout.validate()?;
        Ok(layout)
    }

    /// Build a fully packed layout: attributes follow each other in the given
    /// order and the stride is the sum of their sizes
    ///
    /// # Example
    ///
    /// ```
    /// use learn_gl::learngl::geometry::{VertexLayout, ComponentType};
    ///
    /// // position + color
    /// let layout = VertexLayout::packed(&[
    ///     (0, 3, ComponentType::F32),
    ///     (1, 3, ComponentType::F32),
    /// ]).unwrap();
    /// assert_eq!(layout.stride(), 24);
    /// assert_eq!(layout.attribute(1).unwrap().offset, 12);
    /// ```
    pub fn packed(specs: &[(u32, u8, ComponentType)]) -> Result<Self> {
        let mut offset = 0;
        let mut attributes = Vec::with_capacity(specs.len());
        for &(location, components, component_type) in specs {
            let attribute = VertexAttribute {
                location,
                components,
                component_type,
                normalized: false,
                offset,
            };
            offset = offset.checked_add(attribute.size_bytes()).ok_or_else(|| {
                engine_report!("learngl::VertexLayout", Error::InvalidLayout(format!(
                    "packed size overflows at attribute {}",
                    location
                )))
            })?;
            attributes.push(attribute);
        }
        Self::new(offset, attributes)
    }

    /// Byte distance between consecutive records
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// All attributes, in declaration order
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Attribute bound to `location`
    pub fn attribute(&self, location: u32) -> Option<&VertexAttribute> {
        self.attributes.iter().find(|a| a.location == location)
    }

    /// True when the stride equals the sum of all attribute sizes
    pub fn is_packed(&self) -> bool {
        self.attributes.iter().map(|a| a.size_bytes()).sum::<u32>() == self.stride
    }

    /// Check that the descriptors are mutually consistent
    ///
    /// - stride is non-zero and there is at least one attribute
    /// - every attribute has 1..=4 components
    /// - every attribute fits inside the stride (`offset + size <= stride`)
    /// - no two attributes share a location
    /// - no two attributes overlap in bytes
    pub fn validate(&self) -> Result<()> {
        const SOURCE: &str = "learngl::VertexLayout";

        if self.stride == 0 {
            return Err(engine_report!(SOURCE, Error::InvalidLayout("stride is zero".to_string())));
        }
        if self.attributes.is_empty() {
            return Err(engine_report!(SOURCE, Error::InvalidLayout("layout has no attributes".to_string())));
        }

        let mut locations = FxHashSet::default();
        let mut ranges: Vec<(u32, Range<u32>)> = Vec::with_capacity(self.attributes.len());
        for attribute in &self.attributes {
            if !(1..=4).contains(&attribute.components) {
                return Err(engine_report!(SOURCE, Error::InvalidLayout(format!(
                    "attribute {} has {} components (expected 1..=4)",
                    attribute.location, attribute.components
                ))));
            }
            let range = match attribute.byte_range() {
                Some(range) if range.end <= self.stride => range,
                _ => {
                    return Err(engine_report!(SOURCE, Error::InvalidLayout(format!(
                        "attribute {} at offset {} ({} bytes) extends past stride {}",
                        attribute.location,
                        attribute.offset,
                        attribute.size_bytes(),
                        self.stride
                    ))));
                }
            };
            if !locations.insert(attribute.location) {
                return Err(engine_report!(SOURCE, Error::InvalidLayout(format!(
                    "location {} is used by more than one attribute",
                    attribute.location
                ))));
            }
            ranges.push((attribute.location, range));
        }

        ranges.sort_by_key(|(_, range)| range.start);
        for pair in ranges.windows(2) {
            let (first_location, first) = &pair[0];
            let (second_location, second) = &pair[1];
            if second.start < first.end {
                return Err(engine_report!(SOURCE, Error::InvalidLayout(format!(
                    "attributes {} and {} overlap",
                    first_location, second_location
                ))));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "vertex_layout_tests.rs"]
mod tests;
