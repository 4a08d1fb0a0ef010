//! # Wireframe Mesh Data Structure
//!
//! Named container of vertices and the line segments joining them.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A wireframe mesh: an ordered vertex list and line segments indexing it.
///
/// Vertices are append-only and keep their insertion order, so a vertex's
/// index never changes once it has been added.
///
/// # Example
///
/// ```rust
/// use surface_mesh::WireframeMesh;
/// use glam::DVec3;
///
/// let mut mesh = WireframeMesh::new("Segment");
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_segment(a, b);
/// assert_eq!(mesh.segment_count(), 1);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WireframeMesh {
    /// Human-readable label
    name: String,
    /// Vertex positions in object space
    vertices: Vec<DVec3>,
    /// Line segments as pairs of vertex indices
    segments: Vec<[u32; 2]>,
}

impl WireframeMesh {
    /// Creates an empty mesh with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(name: impl Into<String>, vertex_count: usize, segment_count: usize) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::with_capacity(vertex_count),
            segments: Vec::with_capacity(segment_count),
        }
    }

    /// Returns the mesh name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the mesh name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of segments.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    ///
    /// Indices are `u32`; callers keep meshes within
    /// [`MAX_GRID_VERTICES`](config::constants::MAX_GRID_VERTICES) vertices.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        debug_assert!(self.vertices.len() < config::constants::MAX_GRID_VERTICES);
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a segment between two vertex indices.
    pub fn add_segment(&mut self, a: u32, b: u32) {
        self.segments.push([a, b]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the segments.
    #[inline]
    pub fn segments(&self) -> &[[u32; 2]] {
        &self.segments
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the segment at the given index.
    #[inline]
    pub fn segment(&self, index: usize) -> [u32; 2] {
        self.segments[index]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates the mesh connectivity.
    ///
    /// Checks:
    /// - All segment indices reference an existing vertex
    /// - No segment joins a vertex to itself
    ///
    /// Vertex coordinates are not inspected; non-finite values are allowed.
    pub fn validate(&self) -> bool {
        let count = self.vertices.len();
        self.segments
            .iter()
            .all(|&[a, b]| (a as usize) < count && (b as usize) < count && a != b)
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x0, y0, z0, x1, y1, z1, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports segments as a line-list index buffer.
    ///
    /// Returns flattened [a0, b0, a1, b1, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.segments.iter().flatten().copied().collect()
    }
}

impl fmt::Display for WireframeMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model: {}", self.name)?;
        writeln!(f, "Model has {} vertices.", self.vertices.len())?;
        writeln!(f, "Model has {} line segments.", self.segments.len())?;
        for (i, v) in self.vertices.iter().enumerate() {
            writeln!(f, "{i}: ({}, {}, {})", v.x, v.y, v.z)?;
        }
        for (i, [a, b]) in self.segments.iter().enumerate() {
            writeln!(f, "{i}: [{a}, {b}]")?;
        }
        Ok(())
    }
}
