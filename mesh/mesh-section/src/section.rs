//! Mesh section container with bounds-tracked mutation.

use crate::{Aabb, SectionVertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One section of a procedural mesh.
///
/// Each material has its own section. A section exclusively owns its
/// vertex buffer, its index buffer, and a local bounding box that tightly
/// encloses every position added through [`MeshSection::add_vertex`].
///
/// Indices are stored flat; every 3 consecutive values form one triangle.
/// Index values are never validated against the vertex count here — that
/// invariant belongs to the caller.
///
/// # Example
///
/// ```
/// use mesh_section::{MeshSection, SectionVertex};
///
/// let mut section = MeshSection::new();
/// section.add_vertex(SectionVertex::from_raw(0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0));
/// section.add_vertex(SectionVertex::from_raw(2.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1));
/// section.add_triangle(0, 1, 0);
///
/// assert_eq!(section.vertex_count(), 2);
/// assert_eq!(section.triangle_count(), 1);
/// assert_eq!(section.bounds.max.x, 2.0);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshSection {
    /// Vertex buffer for this section.
    pub vertices: Vec<SectionVertex>,

    /// Index buffer; triples of indices into `vertices`.
    pub indices: Vec<u32>,

    /// Local bounds over every position added via [`MeshSection::add_vertex`].
    ///
    /// Populating `vertices` directly bypasses bounds tracking; callers
    /// doing so must reconstruct this box themselves.
    pub bounds: Aabb,
}

impl MeshSection {
    /// Create a new empty section.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_section::MeshSection;
    ///
    /// let section = MeshSection::new();
    /// assert!(section.is_empty());
    /// assert!(section.bounds.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            bounds: Aabb::empty(),
        }
    }

    /// Create a section with pre-allocated buffer capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(index_count),
            bounds: Aabb::empty(),
        }
    }

    /// Number of vertices in the section.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices in the section.
    #[inline]
    #[must_use]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of complete triangles described by the index buffer.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check whether the section holds no geometry at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Reset this section, clearing all mesh data.
    ///
    /// Afterwards the section is indistinguishable from a freshly
    /// constructed one: empty buffers, empty box.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.bounds = Aabb::empty();
    }

    /// Append a vertex and grow the bounding box to include its position.
    ///
    /// Only the position affects the box; normal and material do not.
    /// This is the only mutation path that keeps `bounds` in sync with
    /// the vertex buffer.
    pub fn add_vertex(&mut self, vertex: SectionVertex) {
        self.bounds.expand_to_include(&vertex.position());
        self.vertices.push(vertex);
    }

    /// Append one index value.
    ///
    /// The value is not checked against the vertex count, and the
    /// bounding box is unaffected.
    #[inline]
    pub fn add_index(&mut self, index: u32) {
        self.indices.push(index);
    }

    /// Append the three indices of one triangle.
    #[inline]
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.push(a);
        self.indices.push(b);
        self.indices.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point3;

    fn vertex_at(x: f32, y: f32, z: f32) -> SectionVertex {
        SectionVertex::from_raw(x, y, z, 0.0, 0.0, 1.0, 0)
    }

    #[test]
    fn add_vertex_grows_bounds_incrementally() {
        let mut section = MeshSection::new();

        section.add_vertex(vertex_at(1.0, 1.0, 1.0));
        assert_eq!(section.bounds.min, Point3::new(1.0, 1.0, 1.0));
        assert_eq!(section.bounds.max, Point3::new(1.0, 1.0, 1.0));

        section.add_vertex(vertex_at(-2.0, 3.0, 0.5));
        assert_eq!(section.bounds.min, Point3::new(-2.0, 1.0, 0.5));
        assert_eq!(section.bounds.max, Point3::new(1.0, 3.0, 1.0));
    }

    #[test]
    fn bounds_match_independent_recompute() {
        let points = [
            (0.0, 0.0, 0.0),
            (4.0, -1.0, 2.0),
            (-3.0, 5.0, 1.0),
            (1.0, 1.0, 1.0),
        ];

        let mut section = MeshSection::new();
        for &(x, y, z) in &points {
            section.add_vertex(vertex_at(x, y, z));
        }

        let positions: Vec<Point3<f32>> = section.vertices.iter().map(|v| v.position()).collect();
        let recomputed = Aabb::from_points(positions.iter());
        assert_eq!(section.bounds, recomputed);
    }

    #[test]
    fn interior_vertex_leaves_bounds_unchanged() {
        let mut section = MeshSection::new();
        section.add_vertex(vertex_at(0.0, 0.0, 0.0));
        section.add_vertex(vertex_at(10.0, 10.0, 10.0));

        let before = section.bounds;
        section.add_vertex(vertex_at(5.0, 5.0, 5.0));
        assert_eq!(section.bounds, before);
    }

    #[test]
    fn indices_do_not_affect_bounds_or_vertices() {
        let mut section = MeshSection::new();
        section.add_vertex(vertex_at(1.0, 2.0, 3.0));

        let bounds_before = section.bounds;
        section.add_index(0);
        section.add_triangle(0, 0, 0);

        assert_eq!(section.bounds, bounds_before);
        assert_eq!(section.vertex_count(), 1);
        assert_eq!(section.index_count(), 4);
        assert_eq!(section.triangle_count(), 1);
    }

    #[test]
    fn reset_restores_fresh_state() {
        let mut section = MeshSection::new();
        section.add_vertex(vertex_at(1.0, 2.0, 3.0));
        section.add_triangle(0, 0, 0);

        section.reset();

        assert!(section.is_empty());
        assert_eq!(section.vertex_count(), 0);
        assert_eq!(section.index_count(), 0);
        assert!(section.bounds.is_empty());
        assert_eq!(section.bounds, Aabb::empty());
    }

    #[test]
    fn reset_on_empty_is_noop() {
        let mut section = MeshSection::new();
        section.reset();
        assert!(section.is_empty());
        assert!(section.bounds.is_empty());
    }

    #[test]
    fn with_capacity_starts_empty() {
        let section = MeshSection::with_capacity(100, 300);
        assert!(section.is_empty());
        assert!(section.bounds.is_empty());
    }
}
